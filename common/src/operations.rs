//! Operation markers dispatched through a [`Handler`].
//!
//! [`Handler`]: crate::Handler

use std::marker::PhantomData;

/// Stores a value, overwriting any previous one under the same key.
#[derive(Clone, Copy, Debug)]
pub struct Insert<T>(pub T);

/// Removes a value. Removing a missing value is not an error.
#[derive(Clone, Copy, Debug)]
pub struct Delete<T>(pub T);

/// Reads a value.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Reads a `W` with the help of a `B` (a key, a request, etc).
///
/// `W` only tags the expected output, so a single handler may serve
/// several [`Select`]s by the same `B`.
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Tag of the selected output.
    _what: PhantomData<W>,

    /// Input of the selection.
    by: B,
}

impl<W, B> By<W, B> {
    /// Wraps the provided `by` input.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Borrows the wrapped input.
    #[must_use]
    pub fn inner(&self) -> &B {
        &self.by
    }

    /// Unwraps the input.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
