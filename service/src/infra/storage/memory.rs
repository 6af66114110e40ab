//! In-memory [`Storage`] implementation.

use std::{collections::HashMap, sync::Arc};

use common::operations::{By, Delete, Insert, Select};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::infra::{
    storage::{self, Entry, Key},
    Storage,
};

/// Ephemeral [`Storage`] keeping values in memory.
///
/// Clones share the same values.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<RwLock<HashMap<Key, String>>>);

impl Memory {
    /// Creates a new empty [`Memory`] storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage<Select<By<Option<String>, Key>>> for Memory {
    type Ok = Option<String>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<String>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.read().await.get(by.inner()).cloned())
    }
}

impl Storage<Insert<Entry>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert(entry): Insert<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.0.write().await.insert(entry.key, entry.value));
        Ok(())
    }
}

impl Storage<Delete<Key>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(key): Delete<Key>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.0.write().await.remove(&key));
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Delete, Insert, Select};

    use crate::infra::{
        storage::{Entry, Key},
        Storage as _,
    };

    use super::Memory;

    #[tokio::test]
    async fn sets_gets_and_clears() {
        let storage = Memory::new();
        let get = || storage.execute(Select(By::new(Key::LIKED)));

        assert_eq!(get().await.unwrap(), None);

        storage
            .execute(Insert(Entry {
                key: Key::LIKED,
                value: r#"["property-1"]"#.into(),
            }))
            .await
            .unwrap();
        assert_eq!(get().await.unwrap().as_deref(), Some(r#"["property-1"]"#));

        storage.execute(Delete(Key::LIKED)).await.unwrap();
        assert_eq!(get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_values() {
        let storage = Memory::new();
        let clone = storage.clone();

        clone
            .execute(Insert(Entry {
                key: Key::ACCESS_TOKEN,
                value: "secret".into(),
            }))
            .await
            .unwrap();

        assert_eq!(
            storage
                .execute(Select(By::new(Key::ACCESS_TOKEN)))
                .await
                .unwrap()
                .as_deref(),
            Some("secret"),
        );
    }
}
