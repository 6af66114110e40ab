//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Every seam of the search core is expressed as a [`Handler`] of some
/// operation: session commands and queries, record sources and key-value
/// storages alike.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
