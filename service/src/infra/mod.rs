//! Infrastructure layer.

pub mod source;
pub mod storage;

pub use self::{source::Source, storage::Storage};
