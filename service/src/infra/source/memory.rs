//! In-memory [`Source`] implementation.

use std::{sync::Arc, time::Duration};

use common::operations::{By, Select};
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Listing,
    infra::{source, Source},
    read::listing::list::{self, Trigger},
};

/// [`Memory`] source configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Simulated latency of a [`Trigger::Search`] request.
    #[default(Duration::from_millis(500))]
    pub search_latency: Duration,

    /// Simulated latency of a [`Trigger::PageChange`] request.
    #[default(Duration::from_millis(300))]
    pub page_latency: Duration,
}

/// [`Source`] serving a fixed set of [`Listing`]s after a simulated latency.
///
/// The whole set is returned for every request, leaving filtering and
/// ordering to the caller.
#[derive(Clone, Debug)]
pub struct Memory {
    /// [`Listing`]s served by this [`Memory`] source.
    listings: Arc<[Arc<Listing>]>,

    /// [`Config`] of this [`Memory`] source.
    config: Config,
}

impl Memory {
    /// Creates a new [`Memory`] source serving the provided [`Listing`]s in
    /// the provided order.
    #[must_use]
    pub fn new(
        listings: impl IntoIterator<Item = Listing>,
        config: Config,
    ) -> Self {
        Self {
            listings: listings.into_iter().map(Arc::new).collect(),
            config,
        }
    }

    /// Returns the number of [`Listing`]s served by this [`Memory`] source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Indicates whether this [`Memory`] source serves no [`Listing`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Returns the simulated latency of a request caused by the provided
    /// [`Trigger`].
    fn latency(&self, trigger: Trigger) -> Duration {
        match trigger {
            Trigger::Search => self.config.search_latency,
            Trigger::PageChange => self.config.page_latency,
        }
    }
}

impl Source<Select<By<list::Candidates, list::Request>>> for Memory {
    type Ok = list::Candidates;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Candidates, list::Request>>,
    ) -> Result<Self::Ok, Self::Err> {
        let list::Request { selector, trigger } = by.into_inner();
        let latency = self.latency(trigger);
        log::debug!(
            %trigger,
            page = %selector.arguments.number,
            ?latency,
            "serving {} listings",
            self.listings.len(),
        );

        tokio::time::sleep(latency).await;

        Ok(self.listings.to_vec())
    }
}
