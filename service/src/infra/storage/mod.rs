//! Key-value [`Storage`] of session data.

#[cfg(test)]
pub(crate) mod fake;
pub mod file;
pub mod memory;

use std::io;

use derive_more::{AsRef, Display, Error as StdError, From};

pub use self::{file::File, memory::Memory};

/// Key-value storage operation.
pub use common::Handler as Storage;

/// Key of a value in a [`Storage`].
#[derive(AsRef, Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[as_ref(forward)]
pub struct Key(&'static str);

impl Key {
    /// [`Key`] of the JSON array of liked listing IDs.
    pub const LIKED: Self = Self("liked_properties");

    /// [`Key`] of the access token.
    pub const ACCESS_TOKEN: Self = Self("auth_token");

    /// [`Key`] of the refresh token.
    pub const REFRESH_TOKEN: Self = Self("refresh_token");

    /// Returns this [`Key`] as a string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

/// Entry to be [`Insert`]ed into a [`Storage`].
///
/// [`Insert`]: common::operations::Insert
#[derive(Clone, Debug)]
pub struct Entry {
    /// [`Key`] of this [`Entry`].
    pub key: Key,

    /// Value of this [`Entry`].
    pub value: String,
}

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// I/O error of a [`File`] storage.
    #[display("Storage I/O failed: {_0}")]
    Io(io::Error),
}
