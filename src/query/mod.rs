//! The list query core: search, filter, sort, paginate, and query-string sync.
//!
//! Everything in this module is synchronous and free of I/O. The view controller
//! in [`crate::app`] owns the single [`QueryState`] and calls into these functions
//! after every change.
//!
//! ```text
//! QueryState ──filter_and_sort──▶ matched ──paginate──▶ Page
//!     ▲  │
//!  decode encode
//!     │  ▼
//!  ?search=..&category=..&sort=..&page=..
//! ```
//!
//! # Modules
//!
//! - [`state`]: `QueryState`, `SortKey`, `CategoryFilter`
//! - [`engine`]: Filtering, stable sorting, categories, related posts
//! - [`pagination`]: Fixed-size page slicing with clamping
//! - [`url`]: Query-string encode/decode

pub mod engine;
pub mod pagination;
pub mod state;
pub mod url;

pub use engine::{categories, filter_and_sort, find, match_ranges, related, RELATED_LIMIT};
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use state::{CategoryFilter, QueryState, SortKey, ALL_CATEGORIES};
pub use self::url::{decode, encode};
