// Tue Jan 27 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinaryError {
    #[error("Hex input has odd length: {0}")]
    OddHexLength(usize),
    #[error("Invalid hex digit '{ch}' at offset {offset}")]
    InvalidHexDigit { ch: char, offset: usize },
    #[error("Buffer length {len} is not a multiple of {unit}")]
    MisalignedBuffer { len: usize, unit: usize },
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
