// Fri Jan 23 2026 - Alex

#![allow(dead_code)]

pub mod binary;
pub mod collect;
pub mod logging;
pub mod random;
pub mod text;

pub use binary::{ByteUtils, EndianUtils, HexUtils};
pub use collect::{ArrayUtils, CollectionUtils, IterUtils, MapUtils, SetUtils};
pub use logging::LoggingUtils;
pub use random::RandomUtils;
pub use text::{CaseUtils, CharUtils, CharsetUtils, StringUtils};
