//! [`Command`] for performing a new search.

use common::{
    operations::{By, Select},
    pagination,
};
use tracerr::Traced;

#[cfg(doc)]
use crate::{
    domain::Listing,
    read::listing::{list::Trigger, Criteria},
    State,
};
use crate::{
    infra::{source, Source},
    read::listing::list,
    Session,
};

use super::{Command, Outcome};

/// [`Command`] for requesting [`Listing`]s matching the current
/// [`Criteria`] from the [`Source`].
///
/// Resets the [`State::page`] to the first one. On failure, the
/// [`State::error`] is set and the previous [`State::results`] are kept.
#[derive(Clone, Copy, Debug)]
pub struct PerformSearch;

impl<Src, Store> Command<PerformSearch> for Session<Src, Store>
where
    Src: Source<
        Select<By<list::Candidates, list::Request>>,
        Ok = list::Candidates,
        Err = Traced<source::Error>,
    >,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: PerformSearch) -> Result<Self::Ok, Self::Err> {
        self.fetch(list::Trigger::Search, |state| {
            state.page = pagination::Number::FIRST;
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

/// Error of [`PerformSearch`] [`Command`] execution.
pub type ExecutionError = source::Error;
