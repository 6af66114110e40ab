//! [`Command`] for restoring the liked [`Listing`]s.

use std::{collections::BTreeSet, convert::Infallible};

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::{domain::Listing, State};
use crate::{
    domain::listing,
    infra::{
        storage::{self, Key},
        Storage,
    },
    Session,
};

use super::Command;

/// [`Command`] for replacing the [`State::liked`] set with the one persisted
/// in the [`Storage`].
///
/// Unreadable or corrupted data is logged and treated as no liked
/// [`Listing`]s.
///
/// Returns the number of restored IDs.
#[derive(Clone, Copy, Debug)]
pub struct RestoreLiked;

impl<Src, Store> Command<RestoreLiked> for Session<Src, Store>
where
    Store: Storage<
        Select<By<Option<String>, Key>>,
        Ok = Option<String>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = usize;
    type Err = Infallible;

    async fn execute(&self, _: RestoreLiked) -> Result<Self::Ok, Self::Err> {
        let liked = match self.storage().execute(Select(By::new(Key::LIKED))).await
        {
            Ok(Some(json)) => {
                serde_json::from_str::<BTreeSet<listing::Id>>(&json)
                    .unwrap_or_else(|e| {
                        log::warn!("Ignoring corrupted liked `Listing`s: {e}");
                        BTreeSet::new()
                    })
            }
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                log::warn!("Failed to read liked `Listing`s: {e}");
                BTreeSet::new()
            }
        };

        let count = liked.len();
        log::debug!(count, "restored liked listings");
        self.modify(|state| state.liked = liked);

        Ok(count)
    }
}
