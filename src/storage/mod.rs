//! Storage layer: the read-only record store and the reader's interaction store.
//!
//! # Modules
//!
//! - `records`: Post collection loaded from JSON or the bundled sample
//! - `backend`: Interaction store trait
//! - `json`: JSON file interaction store with atomic writes
//! - `models`: Like and bookmark records

pub mod backend;
pub mod json;
pub mod models;
pub mod records;

pub use backend::InteractionStore;
pub use json::JsonInteractionStore;
pub use models::{InteractionKind, Interactions};
pub use records::RecordStore;
