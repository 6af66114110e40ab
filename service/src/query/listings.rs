//! [`Query`] of the shown page of [`Listing`]s.

use std::convert::Infallible;

#[cfg(doc)]
use crate::{domain::Listing, read::listing::Criteria};
use crate::{read::listing::list, Session};

use super::Query;

/// Queries the currently shown [`list::Page`] of [`Listing`]s matching the
/// current [`Criteria`].
///
/// [`list::Page::total`] is the number of all the matching [`Listing`]s.
#[derive(Clone, Copy, Debug)]
pub struct Listings;

impl<Src, Store> Query<Listings> for Session<Src, Store> {
    type Ok = list::Page;
    type Err = Infallible;

    async fn execute(&self, _: Listings) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().page())
    }
}
