//! [`Storage`] fakes.

use std::io;

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use crate::infra::{
    storage::{self, Entry, Key},
    Storage,
};

/// [`Storage`] failing every operation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Broken;

impl Broken {
    /// Returns the error every operation fails with.
    fn error() -> Traced<storage::Error> {
        tracerr::new!(storage::Error::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}

impl Storage<Select<By<Option<String>, Key>>> for Broken {
    type Ok = Option<String>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<Option<String>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        Err(Self::error())
    }
}

impl Storage<Insert<Entry>> for Broken {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(&self, _: Insert<Entry>) -> Result<Self::Ok, Self::Err> {
        Err(Self::error())
    }
}

impl Storage<Delete<Key>> for Broken {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(&self, _: Delete<Key>) -> Result<Self::Ok, Self::Err> {
        Err(Self::error())
    }
}
