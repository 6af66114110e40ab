//! [`Command`] for liking or unliking a [`Listing`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::{domain::Listing, State};
use crate::{
    domain::listing,
    infra::{
        storage::{self, Entry, Key},
        Storage,
    },
    Session,
};

use super::Command;

/// [`Command`] for liking a [`Listing`] if it's not liked yet, or unliking
/// it otherwise.
///
/// Touches only the [`State::liked`] set, which is persisted into the
/// [`Storage`] as a JSON array of IDs. The in-memory change is kept even if
/// persisting fails.
///
/// Returns whether the [`Listing`] is liked now.
#[derive(Clone, Debug, From)]
pub struct ToggleLike(pub listing::Id);

impl<Src, Store> Command<ToggleLike> for Session<Src, Store>
where
    Store: Storage<Insert<Entry>, Err = Traced<storage::Error>>,
{
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        ToggleLike(id): ToggleLike,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let mut liked = false;
        self.modify(|state| {
            liked = !state.liked.remove(&id) && state.liked.insert(id.clone());
        });
        log::debug!(%id, liked, "toggled like");

        let value = serde_json::to_string(&self.state().liked)
            .map_err(tracerr::from_and_wrap!(=> E))?;
        self.storage()
            .execute(Insert(Entry {
                key: Key::LIKED,
                value,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(liked)
    }
}

/// Error of [`ToggleLike`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Failed to encode the liked IDs.
    #[display("Failed to encode liked `Listing` IDs: {_0}")]
    Encode(serde_json::Error),

    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    Storage(storage::Error),
}
