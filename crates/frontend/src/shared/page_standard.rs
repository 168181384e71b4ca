//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_store--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records - table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Card of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";
