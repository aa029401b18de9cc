// Tue Jan 27 2026 - Alex

use std::fmt::Write;

use super::error::BinaryError;

pub struct HexUtils;

impl HexUtils {
    pub fn encode(data: &[u8]) -> String {
        data.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn encode_upper(data: &[u8]) -> String {
        data.iter().map(|b| format!("{:02X}", b)).collect()
    }

    pub fn encode_spaced(data: &[u8]) -> String {
        data.iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Tolerates spaces and a single leading 0x/0X prefix. Offsets in
    /// errors refer to the cleaned digit string.
    pub fn decode(s: &str) -> Result<Vec<u8>, BinaryError> {
        let despaced = s.replace(' ', "");
        let cleaned = despaced
            .strip_prefix("0x")
            .or_else(|| despaced.strip_prefix("0X"))
            .unwrap_or(&despaced);
        log::trace!("decoding {} hex digits", cleaned.len());
        if cleaned.len() % 2 != 0 {
            return Err(BinaryError::OddHexLength(cleaned.len()));
        }
        let digits: Vec<char> = cleaned.chars().collect();
        let mut out = Vec::with_capacity(digits.len() / 2);
        for (i, pair) in digits.chunks_exact(2).enumerate() {
            let hi = pair[0]
                .to_digit(16)
                .ok_or(BinaryError::InvalidHexDigit { ch: pair[0], offset: i * 2 })?;
            let lo = pair[1]
                .to_digit(16)
                .ok_or(BinaryError::InvalidHexDigit { ch: pair[1], offset: i * 2 + 1 })?;
            out.push(((hi << 4) | lo) as u8);
        }
        Ok(out)
    }

    /// Classic 16-bytes-per-row dump with offset column and ASCII gutter.
    pub fn dump(data: &[u8]) -> String {
        let mut out = String::new();
        for (row, chunk) in data.chunks(16).enumerate() {
            let _ = write!(out, "{:08x}  ", row * 16);
            for i in 0..16 {
                match chunk.get(i) {
                    Some(b) => {
                        let _ = write!(out, "{:02x} ", b);
                    }
                    None => out.push_str("   "),
                }
                if i == 7 {
                    out.push(' ');
                }
            }
            out.push(' ');
            out.push('|');
            for &b in chunk {
                let c = if (0x20..0x7f).contains(&b) { b as char } else { '.' };
                out.push(c);
            }
            out.push('|');
            out.push('\n');
        }
        out
    }
}
