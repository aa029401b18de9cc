// Tue Jan 27 2026 - Alex

pub mod bytes;
pub mod endian;
pub mod error;
pub mod hex;

pub use bytes::ByteUtils;
pub use endian::EndianUtils;
pub use error::BinaryError;
pub use hex::HexUtils;
