// Fri Jan 23 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("Expected exactly one element, found {0}")]
    NotSingleton(usize),
    #[error("Invalid range: {start}..{end}")]
    InvalidRange { start: usize, end: usize },
}
