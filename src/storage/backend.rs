//! Interaction storage abstraction.
//!
//! The [`InteractionStore`] trait is the only write path in folio. It is kept
//! minimal: load everything once, then record individual toggles.

use crate::domain::error::Result;
use crate::storage::models::{InteractionKind, Interactions};

/// Persistent store for a reader's likes and bookmarks.
///
/// # Implementations
///
/// - [`JsonInteractionStore`](crate::storage::JsonInteractionStore): JSON file
///   with atomic writes (default)
///
/// # Examples
///
/// ```no_run
/// use folio::storage::{InteractionKind, InteractionStore, JsonInteractionStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonInteractionStore::new(PathBuf::from("/tmp/interactions.json"))?;
/// store.set_marked(InteractionKind::Bookmark, 4, true)?;
/// assert!(store.load()?.bookmarked.contains(&4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait InteractionStore {
    /// Returns a snapshot of every stored like and bookmark.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read.
    fn load(&self) -> Result<Interactions>;

    /// Marks or unmarks post `id` for `kind`.
    ///
    /// Setting a value that is already stored is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn set_marked(&mut self, kind: InteractionKind, id: u64, marked: bool) -> Result<()>;
}
