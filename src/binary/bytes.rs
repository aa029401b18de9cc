// Wed Jan 28 2026 - Alex

use super::error::BinaryError;

pub struct ByteUtils;

impl ByteUtils {
    pub fn is_empty(data: Option<&[u8]>) -> bool {
        data.map_or(true, |d| d.is_empty())
    }

    pub fn is_not_empty(data: Option<&[u8]>) -> bool {
        !Self::is_empty(data)
    }

    pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
        let total = parts.iter().map(|p| p.len()).sum();
        let mut out = Vec::with_capacity(total);
        for part in parts {
            out.extend_from_slice(part);
        }
        out
    }

    /// First occurrence of `needle` as a contiguous subslice. An empty
    /// needle matches at 0.
    pub fn index_of_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > haystack.len() {
            return None;
        }
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    pub fn contains_slice(haystack: &[u8], needle: &[u8]) -> bool {
        Self::index_of_slice(haystack, needle).is_some()
    }

    pub fn starts_with(data: &[u8], prefix: &[u8]) -> bool {
        data.starts_with(prefix)
    }

    pub fn ends_with(data: &[u8], suffix: &[u8]) -> bool {
        data.ends_with(suffix)
    }

    pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>, BinaryError> {
        if a.len() != b.len() {
            return Err(BinaryError::LengthMismatch { left: a.len(), right: b.len() });
        }
        Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
    }

    pub fn fill(data: &mut [u8], value: u8) {
        for slot in data.iter_mut() {
            *slot = value;
        }
    }

    pub fn count_value(data: &[u8], value: u8) -> usize {
        data.iter().filter(|&&b| b == value).count()
    }

    pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
        a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
    }
}
