// Sun Jan 25 2026 - Alex

pub mod case;
pub mod chars;
pub mod charset;
pub mod error;
pub mod string;

pub use case::CaseUtils;
pub use chars::CharUtils;
pub use charset::{Charset, CharsetUtils};
pub use error::TextError;
pub use string::StringUtils;
