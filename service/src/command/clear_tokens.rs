//! [`Command`] for clearing authentication tokens.

use common::operations::Delete;
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{
        storage::{self, Key},
        Storage,
    },
    Session,
};

use super::Command;

/// [`Command`] for removing both the access and the refresh tokens from the
/// [`Storage`].
#[derive(Clone, Copy, Debug)]
pub struct ClearTokens;

impl<Src, Store> Command<ClearTokens> for Session<Src, Store>
where
    Store: Storage<Delete<Key>, Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: ClearTokens) -> Result<Self::Ok, Self::Err> {
        log::debug!("clearing tokens");

        for key in [Key::ACCESS_TOKEN, Key::REFRESH_TOKEN] {
            self.storage()
                .execute(Delete(key))
                .await
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        Ok(())
    }
}

/// Error of [`ClearTokens`] [`Command`] execution.
pub type ExecutionError = storage::Error;
