//! [`Source`] of [`Listing`]s.

#[cfg(test)]
pub(crate) mod fake;
pub mod memory;
#[cfg(feature = "mock-data")]
pub mod mock;

use derive_more::{Display, Error as StdError};

#[cfg(doc)]
use crate::domain::Listing;

pub use self::memory::Memory;

/// Source of [`Listing`]s operation.
pub use common::Handler as Source;

/// [`Source`] error.
#[derive(Clone, Debug, Display, StdError)]
pub enum Error {
    /// [`Source`] failed to provide [`Listing`]s.
    #[display("Listing source is unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),
}
