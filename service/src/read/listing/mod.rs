//! [`Listing`]-related read definitions.

pub mod criteria;
pub mod predicate;
pub mod sort;

use std::borrow::Borrow;

use crate::domain::Listing;

pub use self::{
    criteria::{Criteria, Furnished, SortKey, ANY_TYPE},
    predicate::matches,
};

/// Selects the [`Listing`]s matching the provided [`Criteria`] and orders
/// them by [`Criteria::sort_by`].
///
/// [`SortKey::Relevance`] preserves the order of the provided `listings`.
#[must_use]
pub fn search<L>(listings: &[L], criteria: &Criteria) -> Vec<L>
where
    L: Borrow<Listing> + Clone,
{
    let mut found = listings
        .iter()
        .filter(|l| matches((*l).borrow(), criteria))
        .cloned()
        .collect::<Vec<_>>();
    sort::sort(&mut found, criteria.sort_by);
    found
}

pub mod list {
    //! [`Listing`] list definitions.

    use std::{num::NonZeroUsize, sync::Arc};

    use common::{define_kind, define_pagination};
    use derive_more::{Display, Error};
    use serde::{Deserialize, Serialize};

    use crate::domain::Listing;

    use super::Criteria;

    define_pagination!(Node, Criteria);

    /// Node in a [`Page`].
    pub type Node = Arc<Listing>;

    /// [`Listing`]s returned by a listing source for a [`Request`].
    ///
    /// The source is free to return a superset of the matching
    /// [`Listing`]s, so the [`Criteria`] are always re-applied locally.
    pub type Candidates = Vec<Arc<Listing>>;

    /// Request for the [`Listing`]s matching the [`Selector`].
    #[derive(Clone, Debug)]
    pub struct Request {
        /// [`Selector`] of the requested [`Page`].
        pub selector: Selector,

        /// [`Trigger`] of this [`Request`].
        pub trigger: Trigger,
    }

    define_kind! {
        #[case = "kebab-case"]
        #[doc = "User action leading to a [`Request`]."]
        enum Trigger {
            #[doc = "A new search was requested."]
            Search,

            #[doc = "Another page of the current search was requested."]
            PageChange,
        }
    }

    /// Number of [`Listing`]s shown on a single [`Page`].
    #[derive(
        Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
    )]
    #[serde(into = "usize", try_from = "usize")]
    pub struct PageSize(NonZeroUsize);

    impl PageSize {
        /// Allowed [`PageSize`]s.
        pub const CHOICES: [usize; 3] = [12, 24, 48];

        /// Creates a new [`PageSize`] if the provided `size` is one of the
        /// [`PageSize::CHOICES`].
        #[must_use]
        pub fn new(size: usize) -> Option<Self> {
            NonZeroUsize::new(size)
                .filter(|_| Self::CHOICES.contains(&size))
                .map(Self)
        }

        /// Returns this [`PageSize`] as a [`NonZeroUsize`].
        #[must_use]
        pub fn get(self) -> NonZeroUsize {
            self.0
        }
    }

    impl Default for PageSize {
        fn default() -> Self {
            Self(NonZeroUsize::MIN.saturating_add(Self::CHOICES[0] - 1))
        }
    }

    impl From<PageSize> for usize {
        fn from(size: PageSize) -> Self {
            size.0.get()
        }
    }

    impl TryFrom<usize> for PageSize {
        type Error = UnsupportedPageSize;

        fn try_from(size: usize) -> Result<Self, Self::Error> {
            Self::new(size).ok_or(UnsupportedPageSize(size))
        }
    }

    /// Error of creating a [`PageSize`] not being one of the
    /// [`PageSize::CHOICES`].
    #[derive(Clone, Copy, Debug, Display, Error)]
    #[display("page size must be one of 12, 24 or 48, but got {_0}")]
    pub struct UnsupportedPageSize(#[error(not(source))] pub usize);
}
