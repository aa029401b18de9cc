// Sun Jan 25 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Minimum abbreviation width is 4, got {0}")]
    AbbreviateWidth(usize),
    #[error("Invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("Unknown charset: {0}")]
    UnknownCharset(String),
    #[error("Char U+{0:04X} is not representable in Latin-1")]
    UnrepresentableChar(u32),
    #[error("Invalid {charset} sequence at byte offset {offset}")]
    InvalidEncoding { charset: &'static str, offset: usize },
}
