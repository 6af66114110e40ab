//! [`Command`] for storing authentication [`Tokens`].

use common::operations::{Delete, Insert};
use derive_more::From;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::auth::Tokens,
    infra::{
        storage::{self, Entry, Key},
        Storage,
    },
    Session,
};

use super::Command;

/// [`Command`] for storing authentication [`Tokens`] in the [`Storage`].
///
/// A previously stored refresh token is removed if the new [`Tokens`] have
/// none.
#[derive(Clone, Debug, From)]
pub struct StoreTokens(pub Tokens);

impl<Src, Store> Command<StoreTokens> for Session<Src, Store>
where
    Store: Storage<Insert<Entry>, Err = Traced<storage::Error>>
        + Storage<Delete<Key>, Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        StoreTokens(tokens): StoreTokens,
    ) -> Result<Self::Ok, Self::Err> {
        let Tokens { access, refresh } = tokens;
        log::debug!(refresh = refresh.is_some(), "storing tokens");

        self.storage()
            .execute(Insert(Entry {
                key: Key::ACCESS_TOKEN,
                value: access.expose().to_owned(),
            }))
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        match refresh {
            Some(refresh) => self
                .storage()
                .execute(Insert(Entry {
                    key: Key::REFRESH_TOKEN,
                    value: refresh.expose().to_owned(),
                }))
                .await
                .map_err(tracerr::wrap!())
                .map(drop),
            None => self
                .storage()
                .execute(Delete(Key::REFRESH_TOKEN))
                .await
                .map_err(tracerr::wrap!())
                .map(drop),
        }
    }
}

/// Error of [`StoreTokens`] [`Command`] execution.
pub type ExecutionError = storage::Error;
