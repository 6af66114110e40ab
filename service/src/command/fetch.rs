//! Fetching of [`Listing`]s from a [`Source`].

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Listing;
use crate::{
    infra::{source, Source},
    read::listing::list,
    Session, State,
};

/// Outcome of a [`Command`] requesting [`Listing`]s from a [`Source`].
///
/// [`Command`]: super::Command
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Response was applied to the [`State`].
    Applied,

    /// Response was discarded, because a newer request was issued before
    /// it arrived.
    Superseded,
}

impl<Src, Store> Session<Src, Store>
where
    Src: Source<
        Select<By<list::Candidates, list::Request>>,
        Ok = list::Candidates,
        Err = Traced<source::Error>,
    >,
{
    /// Applies the provided `change` to the [`State`], then requests the
    /// [`Listing`]s of the resulting page from the [`Source`].
    ///
    /// [`State::loading`] is set until the response of the latest request
    /// arrives. Responses to superseded requests leave the [`State`]
    /// untouched.
    pub(super) async fn fetch(
        &self,
        trigger: list::Trigger,
        change: impl FnOnce(&mut State),
    ) -> Result<Outcome, Traced<source::Error>> {
        let mut generation = 0;
        self.modify(|state| {
            change(state);
            state.generation += 1;
            state.loading = true;
            generation = state.generation;
        });
        let request = self.state().request(trigger);
        log::debug!(
            generation,
            %trigger,
            page = %request.selector.arguments.number,
            "requesting listings",
        );

        let response = self
            .source()
            .execute(Select(By::new(request)))
            .await
            .map_err(tracerr::wrap!());

        let applied = match response {
            Ok(candidates) => self.modify_if_latest(generation, |state| {
                state.catalog = candidates;
                state.recompute();
                state.error = None;
                state.loading = false;
            }),
            Err(e) => {
                let message = e.to_string();
                if self.modify_if_latest(generation, |state| {
                    state.error = Some(message);
                    state.loading = false;
                }) {
                    log::warn!("Listing source failed: {e}");
                    return Err(e);
                }
                false
            }
        };

        if applied {
            Ok(Outcome::Applied)
        } else {
            log::debug!(generation, "discarding superseded response");
            Ok(Outcome::Superseded)
        }
    }
}
