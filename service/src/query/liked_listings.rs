//! [`Query`] of the liked [`Listing`]s.

use std::{convert::Infallible, sync::Arc};

#[cfg(doc)]
use crate::State;
use crate::{domain::Listing, Session};

use super::Query;

/// Queries the liked [`Listing`]s present in the [`State::catalog`], in
/// the catalog order.
///
/// Liked [`Listing`]s are included regardless of the current search
/// criteria.
#[derive(Clone, Copy, Debug)]
pub struct LikedListings;

impl<Src, Store> Query<LikedListings> for Session<Src, Store> {
    type Ok = Vec<Arc<Listing>>;
    type Err = Infallible;

    async fn execute(&self, _: LikedListings) -> Result<Self::Ok, Self::Err> {
        let state = self.state();
        Ok(state
            .catalog
            .iter()
            .filter(|l| state.is_liked(&l.id))
            .cloned()
            .collect())
    }
}
