//! [`Source`] fakes.

use std::sync::atomic::{AtomicBool, Ordering};

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Listing,
    infra::{
        source::{self, memory, Memory},
        Source,
    },
    read::listing::list,
};

/// [`Memory`] source failing requests on demand.
///
/// Whether a request fails is decided when it's issued, while the failure
/// is reported after the usual latency.
#[derive(Debug)]
pub(crate) struct Flaky {
    /// Underlying [`Memory`] source.
    inner: Memory,

    /// Indicator whether new requests should fail.
    failing: AtomicBool,
}

impl Flaky {
    /// Creates a new [`Flaky`] source serving the provided [`Listing`]s with
    /// the default latencies.
    pub(crate) fn new(listings: Vec<Listing>) -> Self {
        Self {
            inner: Memory::new(listings, memory::Config::default()),
            failing: AtomicBool::new(false),
        }
    }

    /// Makes new requests fail or succeed.
    pub(crate) fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Source<Select<By<list::Candidates, list::Request>>> for Flaky {
    type Ok = list::Candidates;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        op: Select<By<list::Candidates, list::Request>>,
    ) -> Result<Self::Ok, Self::Err> {
        let failing = self.failing.load(Ordering::SeqCst);
        let candidates =
            self.inner.execute(op).await.map_err(tracerr::wrap!())?;
        if failing {
            return Err(tracerr::new!(source::Error::Unavailable(
                "connection reset".into(),
            )));
        }
        Ok(candidates)
    }
}
