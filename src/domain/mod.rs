//! Domain layer for folio.
//!
//! Core types shared by every other layer, independent of storage formats,
//! rendering, or the command-line shell.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The `ContentRecord` blog post model

pub mod error;
pub mod record;

pub use error::{FolioError, Result};
pub use record::ContentRecord;
