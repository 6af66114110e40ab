//! [`Command`] definition.

mod fetch;
pub mod change_page;
pub mod change_page_size;
pub mod clear_tokens;
pub mod perform_search;
pub mod restore_liked;
pub mod set_filters;
pub mod store_tokens;
pub mod toggle_like;

/// [`Command`] of the [`Session`].
///
/// [`Session`]: crate::Session
pub use common::Handler as Command;

pub use self::{
    change_page::ChangePage, change_page_size::ChangePageSize,
    clear_tokens::ClearTokens, fetch::Outcome, perform_search::PerformSearch,
    restore_liked::RestoreLiked, set_filters::SetFilters,
    store_tokens::StoreTokens, toggle_like::ToggleLike,
};
