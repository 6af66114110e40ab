//! [`Query`] of the stored authentication [`Tokens`].

use std::convert::Infallible;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::auth::{AccessToken, RefreshToken, Tokens},
    infra::{
        storage::{self, Key},
        Storage,
    },
    Session,
};

use super::Query;

/// Queries the authentication [`Tokens`] stored in the [`Storage`].
///
/// [`None`] is returned if no [`AccessToken`] is stored, or the [`Storage`]
/// fails to read it.
#[derive(Clone, Copy, Debug)]
pub struct StoredTokens;

impl<Src, Store> Query<StoredTokens> for Session<Src, Store>
where
    Store: Storage<
        Select<By<Option<String>, Key>>,
        Ok = Option<String>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Option<Tokens>;
    type Err = Infallible;

    async fn execute(&self, _: StoredTokens) -> Result<Self::Ok, Self::Err> {
        let read = |key: Key| async move {
            self.storage()
                .execute(Select(By::new(key)))
                .await
                .unwrap_or_else(|e| {
                    log::warn!("Failed to read `{key}`: {e}");
                    None
                })
        };

        let Some(access) = read(Key::ACCESS_TOKEN).await else {
            return Ok(None);
        };
        let refresh = read(Key::REFRESH_TOKEN).await;

        Ok(Some(Tokens {
            access: AccessToken::new(access),
            refresh: refresh.map(RefreshToken::new),
        }))
    }
}
