//! Domain definitions.

pub mod auth;
pub mod listing;

pub use self::listing::Listing;
