//! Service contains the listing search logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use std::{collections::BTreeSet, sync::Arc};

use common::pagination;
use tokio::sync::watch;
use tracerr::Traced;
use tracing as log;

use self::{
    domain::{listing, Listing},
    read::listing::{list, Criteria},
};
#[cfg(doc)]
use self::infra::{Source, Storage};

pub use self::{command::Command, query::Query};

/// [`Session`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`list::PageSize`] a [`Session`] starts with.
    pub page_size: list::PageSize,
}

/// State of a [`Session`].
#[derive(Clone, Debug)]
pub struct State {
    /// Current search [`Criteria`].
    pub criteria: Criteria,

    /// Currently shown page.
    pub page: pagination::Number,

    /// Number of [`Listing`]s on a page.
    pub page_size: list::PageSize,

    /// IDs of the liked [`Listing`]s.
    ///
    /// Independent of the [`Listing`]s matching the [`Criteria`].
    pub liked: BTreeSet<listing::Id>,

    /// Indicator whether a [`Source`] request is in flight.
    pub loading: bool,

    /// Message of the last [`Source`] failure, if any.
    pub error: Option<String>,

    /// [`Listing`]s returned by the last successful [`Source`] request.
    pub catalog: Vec<Arc<Listing>>,

    /// [`Listing`]s of the [`State::catalog`] matching the
    /// [`State::criteria`], in the requested order.
    pub results: Vec<Arc<Listing>>,

    /// Number of the latest issued [`Source`] request.
    generation: u64,
}

impl State {
    /// Creates a new empty [`State`] according to the provided [`Config`].
    fn new(config: Config) -> Self {
        Self {
            criteria: Criteria::default(),
            page: pagination::Number::FIRST,
            page_size: config.page_size,
            liked: BTreeSet::new(),
            loading: false,
            error: None,
            catalog: Vec::new(),
            results: Vec::new(),
            generation: 0,
        }
    }

    /// Returns [`list::Arguments`] of the currently shown page.
    #[must_use]
    pub fn arguments(&self) -> list::Arguments {
        list::Arguments {
            number: self.page,
            size: self.page_size.get(),
        }
    }

    /// Returns the currently shown [`list::Page`] of the
    /// [`State::results`].
    #[must_use]
    pub fn page(&self) -> list::Page {
        list::Page::new(&self.results, self.arguments())
    }

    /// Indicates whether a [`Listing`] with the provided ID is liked.
    #[must_use]
    pub fn is_liked(&self, id: &listing::Id) -> bool {
        self.liked.contains(id)
    }

    /// Builds a [`list::Request`] for the currently shown page.
    fn request(&self, trigger: list::Trigger) -> list::Request {
        list::Request {
            selector: list::Selector {
                arguments: self.arguments(),
                filter: self.criteria.clone(),
            },
            trigger,
        }
    }

    /// Re-applies the [`State::criteria`] to the [`State::catalog`].
    fn recompute(&mut self) {
        self.results = read::listing::search(&self.catalog, &self.criteria);
        log::trace!(
            "{} of {} listings match",
            self.results.len(),
            self.catalog.len(),
        );
    }
}

/// Listing search session of a single user.
///
/// Mutated only by its [`Command`]s. Every mutation is broadcast to the
/// [`Session::subscribe()`]rs.
#[derive(Debug)]
pub struct Session<Src, Store> {
    /// Configuration of this [`Session`].
    config: Config,

    /// [`Source`] of the [`Listing`]s.
    source: Src,

    /// [`Storage`] of the liked [`Listing`]s and authentication tokens.
    storage: Store,

    /// [`State`] of this [`Session`].
    state: watch::Sender<State>,
}

impl<Src, Store> Session<Src, Store> {
    /// Creates a new [`Session`] with the provided parameters and an empty
    /// [`State`].
    #[must_use]
    pub fn new(config: Config, source: Src, storage: Store) -> Self {
        let (state, _) = watch::channel(State::new(config));
        Self {
            config,
            source,
            storage,
            state,
        }
    }

    /// Opens a new [`Session`] with the provided parameters.
    ///
    /// Restores the liked [`Listing`]s from the [`Storage`] and performs an
    /// initial search. A failed initial search is recorded in
    /// [`State::error`].
    pub async fn open(config: Config, source: Src, storage: Store) -> Self
    where
        Self: Command<command::RestoreLiked>
            + Command<
                command::PerformSearch,
                Ok = command::Outcome,
                Err = Traced<command::perform_search::ExecutionError>,
            >,
    {
        let this = Self::new(config, source, storage);

        _ = this.execute(command::RestoreLiked).await;
        if let Err(e) = this.execute(command::PerformSearch).await {
            log::error!("Initial search failed: {e}");
        }

        this
    }

    /// Returns [`Config`] of this [`Session`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Source`] of this [`Session`].
    #[must_use]
    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Returns [`Storage`] of this [`Session`].
    #[must_use]
    pub fn storage(&self) -> &Store {
        &self.storage
    }

    /// Returns the current [`State`] of this [`Session`].
    ///
    /// The returned reference blocks [`Command`]s while held, so it should
    /// be dropped quickly.
    #[must_use]
    pub fn state(&self) -> watch::Ref<'_, State> {
        self.state.borrow()
    }

    /// Subscribes to the [`State`] changes of this [`Session`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<State> {
        self.state.subscribe()
    }

    /// Applies the provided `change` to the [`State`] of this [`Session`]
    /// and notifies the subscribers.
    fn modify(&self, change: impl FnOnce(&mut State)) {
        self.state.send_modify(change);
    }

    /// Applies the provided `change` to the [`State`] of this [`Session`]
    /// only if no [`Source`] request was issued after the `generation` one.
    ///
    /// Returns whether the `change` was applied.
    fn modify_if_latest(
        &self,
        generation: u64,
        change: impl FnOnce(&mut State),
    ) -> bool {
        self.state.send_if_modified(|state| {
            let latest = state.generation == generation;
            if latest {
                change(state);
            }
            latest
        })
    }
}

#[cfg(test)]
mod spec {
    use std::{collections::BTreeSet, time::Duration};

    use common::{operations::Insert, pagination::Number};

    use crate::{
        command::{PerformSearch, SetFilters},
        domain::listing,
        infra::{source, storage, Storage as _},
        read::listing::{fixture, list::PageSize, Criteria},
    };

    use super::{Config, Session};

    fn source(count: usize) -> source::Memory {
        source::Memory::new(fixture::listings(count), source::memory::Config {
            search_latency: Duration::from_millis(500),
            page_latency: Duration::from_millis(300),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn opens_with_initial_search_and_restored_likes() {
        let storage = storage::Memory::new();
        storage
            .execute(Insert(storage::Entry {
                key: storage::Key::LIKED,
                value: r#"["property-2"]"#.into(),
            }))
            .await
            .unwrap();

        let session =
            Session::open(Config::default(), source(30), storage).await;
        let state = session.state();

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.catalog.len(), 30);
        assert_eq!(state.results.len(), 30);
        assert_eq!(state.page, Number::FIRST);
        assert_eq!(state.page_size, PageSize::default());
        assert_eq!(
            state.liked,
            BTreeSet::from([listing::Id::new("property-2").unwrap()]),
        );
    }

    #[tokio::test(start_paused = true)]
    async fn opens_with_configured_page_size() {
        let config = Config {
            page_size: PageSize::new(24).unwrap(),
        };

        let session =
            Session::open(config, source(30), storage::Memory::new()).await;

        assert_eq!(session.state().page().items.len(), 24);
    }

    #[tokio::test(start_paused = true)]
    async fn broadcasts_changes() {
        let session = Session::new(
            Config::default(),
            source(5),
            storage::Memory::new(),
        );
        let mut changes = session.subscribe();

        session
            .execute(SetFilters(Criteria {
                location: "Karen".into(),
                ..Criteria::default()
            }))
            .await
            .unwrap();

        assert!(changes.has_changed().unwrap());
        assert_eq!(changes.borrow_and_update().criteria.location, "Karen");

        _ = session.execute(PerformSearch).await.unwrap();

        assert!(changes.has_changed().unwrap());
    }
}
