//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the runtime (the CLI in `main.rs`) and the
//! query/storage layers. Data flows in one direction:
//!
//! ```text
//! Reader input / URL → Event → handle_event → QueryState mutation → Actions
//!                                                   ↓
//!                                   derived view → ListViewModel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: The [`ListView`] controller and view model computation
//!
//! # Example
//!
//! ```rust
//! use folio::app::{handle_event, Event, ListView};
//! use folio::query::SortKey;
//! use folio::storage::RecordStore;
//!
//! let mut view = ListView::new(RecordStore::sample()?, Default::default());
//! handle_event(&mut view, &Event::SetSort(SortKey::Liked))?;
//! assert_eq!(view.compute_viewmodel().cards[0].id, 3);
//! # Ok::<(), folio::FolioError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::{Action, Notification};
pub use handler::{handle_event, Event};
pub use state::{DerivedView, ListView, ViewSettings, LIST_PATH};
