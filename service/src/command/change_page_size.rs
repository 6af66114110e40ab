//! [`Command`] for changing the number of listings on a page.

use std::convert::Infallible;

use common::pagination;
use derive_more::From;
use tracing as log;

#[cfg(doc)]
use crate::State;
use crate::{read::listing::list::PageSize, Session};

use super::Command;

/// [`Command`] for changing the [`PageSize`].
///
/// Resets the [`State::page`] to the first one. The already fetched
/// listings are re-windowed without entering the [`State::loading`].
#[derive(Clone, Copy, Debug, From)]
pub struct ChangePageSize(pub PageSize);

impl<Src, Store> Command<ChangePageSize> for Session<Src, Store> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        ChangePageSize(size): ChangePageSize,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!(%size, "changing page size");

        self.modify(|state| {
            state.page_size = size;
            state.page = pagination::Number::FIRST;
        });

        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::pagination::Number;

    use crate::{
        command::{ChangePage, PerformSearch},
        infra::{source, storage},
        read::listing::{fixture, list::PageSize},
        Config, Session,
    };

    use super::{ChangePageSize, Command as _};

    #[tokio::test(start_paused = true)]
    async fn resets_page_and_rewindows() {
        let session = Session::new(
            Config::default(),
            source::Memory::new(
                fixture::listings(100),
                source::memory::Config::default(),
            ),
            storage::Memory::new(),
        );
        _ = session.execute(PerformSearch).await.unwrap();
        _ = session.execute(ChangePage(Number::new(4).unwrap())).await.unwrap();

        session
            .execute(ChangePageSize(PageSize::new(48).unwrap()))
            .await
            .unwrap();

        let state = session.state();
        assert!(!state.loading);
        assert_eq!(state.page, Number::FIRST);
        let page = state.page();
        assert_eq!(page.items.len(), 48);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.shown(), Some(1..=48));
    }
}
