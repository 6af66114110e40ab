//! File-backed [`Storage`] implementation.

use std::{
    io,
    path::{Path, PathBuf},
};

use common::operations::{By, Delete, Insert, Select};
use tokio::fs;
use tracerr::Traced;
use tracing as log;

use crate::infra::{
    storage::{self, Entry, Key},
    Storage,
};

/// [`Storage`] keeping every value in a separate file named after its
/// [`Key`] inside a directory.
///
/// The directory is created on the first write.
#[derive(Clone, Debug)]
pub struct File {
    /// Directory the values are stored in.
    dir: PathBuf,
}

impl File {
    /// Creates a new [`File`] storage in the provided directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory of this [`File`] storage.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the file storing the value of the provided
    /// [`Key`].
    fn path(&self, key: Key) -> PathBuf {
        self.dir.join(key.as_str())
    }
}

impl Storage<Select<By<Option<String>, Key>>> for File {
    type Ok = Option<String>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<String>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        match fs::read_to_string(self.path(by.into_inner())).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(tracerr::new!(storage::Error::from(e))),
        }
    }
}

impl Storage<Insert<Entry>> for File {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert(entry): Insert<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?;
        let path = self.path(entry.key);
        log::trace!("writing `{}`", path.display());
        fs::write(path, entry.value)
            .await
            .map_err(tracerr::from_and_wrap!(=> storage::Error))
    }
}

impl Storage<Delete<Key>> for File {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(key): Delete<Key>,
    ) -> Result<Self::Ok, Self::Err> {
        match fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(tracerr::new!(storage::Error::from(e))),
        }
    }
}
