// Tue Jan 27 2026 - Alex

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::error::BinaryError;

/// Offset-based reads return None on a short buffer, writes report success
/// as bool. Nothing here panics.
pub struct EndianUtils;

impl EndianUtils {
    fn window(data: &[u8], offset: usize, size: usize) -> Option<&[u8]> {
        let end = offset.checked_add(size)?;
        data.get(offset..end)
    }

    fn window_mut(data: &mut [u8], offset: usize, size: usize) -> Option<&mut [u8]> {
        let end = offset.checked_add(size)?;
        data.get_mut(offset..end)
    }

    pub fn read_u8(data: &[u8], offset: usize) -> Option<u8> {
        data.get(offset).copied()
    }

    pub fn read_i8(data: &[u8], offset: usize) -> Option<i8> {
        data.get(offset).map(|&b| b as i8)
    }

    pub fn read_u16_le(data: &[u8], offset: usize) -> Option<u16> {
        Self::window(data, offset, 2).map(LittleEndian::read_u16)
    }

    pub fn read_u16_be(data: &[u8], offset: usize) -> Option<u16> {
        Self::window(data, offset, 2).map(BigEndian::read_u16)
    }

    pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
        Self::window(data, offset, 4).map(LittleEndian::read_u32)
    }

    pub fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
        Self::window(data, offset, 4).map(BigEndian::read_u32)
    }

    pub fn read_u64_le(data: &[u8], offset: usize) -> Option<u64> {
        Self::window(data, offset, 8).map(LittleEndian::read_u64)
    }

    pub fn read_u64_be(data: &[u8], offset: usize) -> Option<u64> {
        Self::window(data, offset, 8).map(BigEndian::read_u64)
    }

    pub fn read_i16_le(data: &[u8], offset: usize) -> Option<i16> {
        Self::read_u16_le(data, offset).map(|v| v as i16)
    }

    pub fn read_i16_be(data: &[u8], offset: usize) -> Option<i16> {
        Self::read_u16_be(data, offset).map(|v| v as i16)
    }

    pub fn read_i32_le(data: &[u8], offset: usize) -> Option<i32> {
        Self::read_u32_le(data, offset).map(|v| v as i32)
    }

    pub fn read_i32_be(data: &[u8], offset: usize) -> Option<i32> {
        Self::read_u32_be(data, offset).map(|v| v as i32)
    }

    pub fn read_i64_le(data: &[u8], offset: usize) -> Option<i64> {
        Self::read_u64_le(data, offset).map(|v| v as i64)
    }

    pub fn read_i64_be(data: &[u8], offset: usize) -> Option<i64> {
        Self::read_u64_be(data, offset).map(|v| v as i64)
    }

    pub fn read_f32_le(data: &[u8], offset: usize) -> Option<f32> {
        Self::window(data, offset, 4).map(LittleEndian::read_f32)
    }

    pub fn read_f32_be(data: &[u8], offset: usize) -> Option<f32> {
        Self::window(data, offset, 4).map(BigEndian::read_f32)
    }

    pub fn read_f64_le(data: &[u8], offset: usize) -> Option<f64> {
        Self::window(data, offset, 8).map(LittleEndian::read_f64)
    }

    pub fn read_f64_be(data: &[u8], offset: usize) -> Option<f64> {
        Self::window(data, offset, 8).map(BigEndian::read_f64)
    }

    pub fn write_u8(data: &mut [u8], offset: usize, value: u8) -> bool {
        match data.get_mut(offset) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn write_u16_le(data: &mut [u8], offset: usize, value: u16) -> bool {
        Self::window_mut(data, offset, 2)
            .map(|w| LittleEndian::write_u16(w, value))
            .is_some()
    }

    pub fn write_u16_be(data: &mut [u8], offset: usize, value: u16) -> bool {
        Self::window_mut(data, offset, 2)
            .map(|w| BigEndian::write_u16(w, value))
            .is_some()
    }

    pub fn write_u32_le(data: &mut [u8], offset: usize, value: u32) -> bool {
        Self::window_mut(data, offset, 4)
            .map(|w| LittleEndian::write_u32(w, value))
            .is_some()
    }

    pub fn write_u32_be(data: &mut [u8], offset: usize, value: u32) -> bool {
        Self::window_mut(data, offset, 4)
            .map(|w| BigEndian::write_u32(w, value))
            .is_some()
    }

    pub fn write_u64_le(data: &mut [u8], offset: usize, value: u64) -> bool {
        Self::window_mut(data, offset, 8)
            .map(|w| LittleEndian::write_u64(w, value))
            .is_some()
    }

    pub fn write_u64_be(data: &mut [u8], offset: usize, value: u64) -> bool {
        Self::window_mut(data, offset, 8)
            .map(|w| BigEndian::write_u64(w, value))
            .is_some()
    }

    pub fn write_i16_le(data: &mut [u8], offset: usize, value: i16) -> bool {
        Self::write_u16_le(data, offset, value as u16)
    }

    pub fn write_i16_be(data: &mut [u8], offset: usize, value: i16) -> bool {
        Self::write_u16_be(data, offset, value as u16)
    }

    pub fn write_i32_le(data: &mut [u8], offset: usize, value: i32) -> bool {
        Self::write_u32_le(data, offset, value as u32)
    }

    pub fn write_i32_be(data: &mut [u8], offset: usize, value: i32) -> bool {
        Self::write_u32_be(data, offset, value as u32)
    }

    pub fn write_i64_le(data: &mut [u8], offset: usize, value: i64) -> bool {
        Self::write_u64_le(data, offset, value as u64)
    }

    pub fn write_i64_be(data: &mut [u8], offset: usize, value: i64) -> bool {
        Self::write_u64_be(data, offset, value as u64)
    }

    pub fn write_f32_le(data: &mut [u8], offset: usize, value: f32) -> bool {
        Self::window_mut(data, offset, 4)
            .map(|w| LittleEndian::write_f32(w, value))
            .is_some()
    }

    pub fn write_f32_be(data: &mut [u8], offset: usize, value: f32) -> bool {
        Self::window_mut(data, offset, 4)
            .map(|w| BigEndian::write_f32(w, value))
            .is_some()
    }

    pub fn write_f64_le(data: &mut [u8], offset: usize, value: f64) -> bool {
        Self::window_mut(data, offset, 8)
            .map(|w| LittleEndian::write_f64(w, value))
            .is_some()
    }

    pub fn write_f64_be(data: &mut [u8], offset: usize, value: f64) -> bool {
        Self::window_mut(data, offset, 8)
            .map(|w| BigEndian::write_f64(w, value))
            .is_some()
    }

    pub fn swap_u16(value: u16) -> u16 {
        value.swap_bytes()
    }

    pub fn swap_u32(value: u32) -> u32 {
        value.swap_bytes()
    }

    pub fn swap_u64(value: u64) -> u64 {
        value.swap_bytes()
    }

    /// Reverses every 16-bit lane in place, flipping the buffer between LE
    /// and BE u16 sequences.
    pub fn swap_lanes_u16(data: &mut [u8]) -> Result<(), BinaryError> {
        if data.len() % 2 != 0 {
            return Err(BinaryError::MisalignedBuffer { len: data.len(), unit: 2 });
        }
        for lane in data.chunks_exact_mut(2) {
            lane.swap(0, 1);
        }
        Ok(())
    }

    pub fn swap_lanes_u32(data: &mut [u8]) -> Result<(), BinaryError> {
        if data.len() % 4 != 0 {
            return Err(BinaryError::MisalignedBuffer { len: data.len(), unit: 4 });
        }
        for lane in data.chunks_exact_mut(4) {
            lane.reverse();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(EndianUtils::read_u16_le(&data, 0), Some(0x0201));
        assert_eq!(EndianUtils::read_u16_be(&data, 0), Some(0x0102));
        assert_eq!(EndianUtils::read_u32_le(&data, 2), Some(0x06050403));
        assert_eq!(EndianUtils::read_u32_be(&data, 2), Some(0x03040506));
        assert_eq!(EndianUtils::read_u64_le(&data, 0), Some(0x0807060504030201));
        assert_eq!(EndianUtils::read_i8(&data, 7), Some(8));
    }

    #[test]
    fn test_short_buffer_reads() {
        let data = [0x01, 0x02];
        assert_eq!(EndianUtils::read_u32_le(&data, 0), None);
        assert_eq!(EndianUtils::read_u16_le(&data, 1), None);
        assert_eq!(EndianUtils::read_u8(&data, 2), None);
        assert_eq!(EndianUtils::read_u16_le(&data, usize::MAX), None);
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut buf = [0u8; 8];
        assert!(EndianUtils::write_u32_be(&mut buf, 2, 0xdeadbeef));
        assert_eq!(EndianUtils::read_u32_be(&buf, 2), Some(0xdeadbeef));
        assert!(EndianUtils::write_f64_le(&mut buf, 0, 1.5));
        assert_eq!(EndianUtils::read_f64_le(&buf, 0), Some(1.5));
    }

    #[test]
    fn test_signed_write_read_round_trip() {
        let mut buf = [0u8; 8];
        assert!(EndianUtils::write_i16_le(&mut buf, 0, -2));
        assert_eq!(EndianUtils::read_i16_le(&buf, 0), Some(-2));
        assert!(EndianUtils::write_i16_be(&mut buf, 0, i16::MIN));
        assert_eq!(EndianUtils::read_i16_be(&buf, 0), Some(i16::MIN));
        assert!(EndianUtils::write_i32_le(&mut buf, 2, -123456));
        assert_eq!(EndianUtils::read_i32_le(&buf, 2), Some(-123456));
        assert!(EndianUtils::write_i32_be(&mut buf, 4, -1));
        assert_eq!(EndianUtils::read_i32_be(&buf, 4), Some(-1));
        assert!(EndianUtils::write_i64_le(&mut buf, 0, i64::MIN + 1));
        assert_eq!(EndianUtils::read_i64_le(&buf, 0), Some(i64::MIN + 1));
        assert!(EndianUtils::write_i64_be(&mut buf, 0, -42));
        assert_eq!(EndianUtils::read_i64_be(&buf, 0), Some(-42));
        assert!(!EndianUtils::write_i32_le(&mut buf, 6, 0));
    }

    #[test]
    fn test_write_out_of_range_fails() {
        let mut buf = [0u8; 4];
        assert!(!EndianUtils::write_u32_le(&mut buf, 1, 0));
        assert!(!EndianUtils::write_u8(&mut buf, 4, 0));
        assert_eq!(buf, [0u8; 4]);
    }

    #[test]
    fn test_value_swaps() {
        assert_eq!(EndianUtils::swap_u16(0x1234), 0x3412);
        assert_eq!(EndianUtils::swap_u32(0x12345678), 0x78563412);
        assert_eq!(EndianUtils::swap_u64(0x0102030405060708), 0x0807060504030201);
    }

    #[test]
    fn test_lane_swaps() {
        let mut buf = [0x01, 0x02, 0x03, 0x04];
        EndianUtils::swap_lanes_u16(&mut buf).unwrap();
        assert_eq!(buf, [0x02, 0x01, 0x04, 0x03]);
        EndianUtils::swap_lanes_u32(&mut buf).unwrap();
        assert_eq!(buf, [0x03, 0x04, 0x01, 0x02]);

        let mut odd = [0u8; 3];
        assert_eq!(
            EndianUtils::swap_lanes_u16(&mut odd),
            Err(BinaryError::MisalignedBuffer { len: 3, unit: 2 })
        );
    }
}
