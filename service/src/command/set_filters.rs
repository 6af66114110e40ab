//! [`Command`] for replacing the search [`Criteria`].

use std::convert::Infallible;

use common::pagination;
use derive_more::From;
use tracing as log;

#[cfg(doc)]
use crate::State;
use crate::{read::listing::Criteria, Session};

use super::Command;

/// [`Command`] for replacing the search [`Criteria`] as a whole.
///
/// Resets the [`State::page`] to the first one and re-applies the new
/// [`Criteria`] to the already fetched listings without entering the
/// [`State::loading`].
#[derive(Clone, Debug, From)]
pub struct SetFilters(pub Criteria);

impl<Src, Store> Command<SetFilters> for Session<Src, Store> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        SetFilters(criteria): SetFilters,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!(active = criteria.active_count(), "setting filters");

        self.modify(|state| {
            state.criteria = criteria;
            state.page = pagination::Number::FIRST;
            state.recompute();
        });

        Ok(())
    }
}
