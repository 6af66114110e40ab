//! [`Query`] definition.

pub mod liked_listings;
pub mod listings;
pub mod tokens;

/// [`Query`] of the [`Session`].
///
/// [`Session`]: crate::Session
pub use common::Handler as Query;

pub use self::{
    liked_listings::LikedListings, listings::Listings, tokens::StoredTokens,
};
