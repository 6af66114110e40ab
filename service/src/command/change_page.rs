//! [`Command`] for changing the shown page.

use common::{
    operations::{By, Select},
    pagination,
};
use derive_more::From;
use tracerr::Traced;

#[cfg(doc)]
use crate::{domain::Listing, read::listing::list::Trigger, State};
use crate::{
    infra::{source, Source},
    read::listing::list,
    Session,
};

use super::{Command, Outcome};

/// [`Command`] for showing another page of the current search, requesting
/// its [`Listing`]s from the [`Source`].
///
/// Pages past the last one show no [`Listing`]s.
#[derive(Clone, Copy, Debug, From)]
pub struct ChangePage(pub pagination::Number);

impl<Src, Store> Command<ChangePage> for Session<Src, Store>
where
    Src: Source<
        Select<By<list::Candidates, list::Request>>,
        Ok = list::Candidates,
        Err = Traced<source::Error>,
    >,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        ChangePage(number): ChangePage,
    ) -> Result<Self::Ok, Self::Err> {
        self.fetch(list::Trigger::PageChange, |state| state.page = number)
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`ChangePage`] [`Command`] execution.
pub type ExecutionError = source::Error;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::pagination::Number;
    use tokio::time::{self, Instant};

    use crate::{
        command::{Outcome, PerformSearch},
        infra::{source, storage},
        read::listing::fixture,
        Config, Session,
    };

    use super::{ChangePage, Command as _};

    fn page(n: usize) -> ChangePage {
        ChangePage(Number::new(n).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn windows_the_results() {
        let session = Session::new(
            Config::default(),
            source::Memory::new(
                fixture::listings(25),
                source::memory::Config::default(),
            ),
            storage::Memory::new(),
        );
        _ = session.execute(PerformSearch).await.unwrap();

        let ids = || {
            session
                .state()
                .page()
                .items
                .iter()
                .map(|l| l.id.to_string())
                .collect::<Vec<_>>()
        };

        let started = Instant::now();
        assert_eq!(session.execute(page(2)).await.unwrap(), Outcome::Applied);
        assert!(started.elapsed() >= Duration::from_millis(300));
        assert!(!session.state().loading);
        assert_eq!(ids().len(), 12);
        assert_eq!(ids()[0], "property-13");

        _ = session.execute(page(3)).await.unwrap();
        assert_eq!(ids(), ["property-25"]);
        let current = session.state().page();
        assert_eq!(current.total, 25);
        assert_eq!(current.total_pages(), 3);
        assert_eq!(current.shown(), Some(25..=25));
        assert!(!current.has_next());

        _ = session.execute(page(4)).await.unwrap();
        let past_end = session.state().page();
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 25);
        assert_eq!(past_end.shown(), None);

        _ = session.execute(page(usize::MAX)).await.unwrap();
        let far_past_end = session.state().page();
        assert!(far_past_end.items.is_empty());
        assert_eq!(far_past_end.total, 25);
        assert_eq!(far_past_end.shown(), None);
        assert!(!far_past_end.has_next());
    }

    #[tokio::test(start_paused = true)]
    async fn sets_loading_until_response() {
        let session = Session::new(
            Config::default(),
            source::fake::Flaky::new(fixture::listings(30)),
            storage::Memory::new(),
        );

        let (outcome, ()) = tokio::join!(session.execute(page(2)), async {
            time::sleep(Duration::from_millis(299)).await;
            let state = session.state();
            assert!(state.loading);
            assert_eq!(state.page, Number::new(2).unwrap());
        });

        assert_eq!(outcome.unwrap(), Outcome::Applied);
        assert!(!session.state().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_requested_page_on_failure() {
        let session = Session::new(
            Config::default(),
            source::fake::Flaky::new(fixture::listings(30)),
            storage::Memory::new(),
        );
        _ = session.execute(PerformSearch).await.unwrap();
        session.source().fail(true);

        assert!(session.execute(page(2)).await.is_err());

        let state = session.state();
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert_eq!(state.page, Number::new(2).unwrap());
        assert_eq!(state.page().items[0].id.to_string(), "property-13");
    }
}
