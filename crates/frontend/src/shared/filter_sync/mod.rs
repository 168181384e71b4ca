//! Синхронизация фильтров списков со строкой запроса.

pub mod browser;
pub mod hook;
pub mod listing;
pub mod machine;

pub use hook::{use_filter_sync, FilterSyncHandle};
pub use listing::{use_paginated_listing, ListingHandle, ListingState};
pub use machine::{
    DebounceTimer, FilterSync, Navigator, SyncPhase, SyncTicket, VisitOptions, VisitRequest,
    DEFAULT_DEBOUNCE,
};
