// Fri Jan 23 2026 - Alex

pub mod array;
pub mod collection;
pub mod error;
pub mod iter;
pub mod map;
pub mod set;

pub use array::ArrayUtils;
pub use collection::CollectionUtils;
pub use error::CollectionError;
pub use iter::{FlatMapLazy, IterUtils};
pub use map::MapUtils;
pub use set::{SetUtils, SetView};
