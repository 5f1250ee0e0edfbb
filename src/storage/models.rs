//! Storage record models for the interaction store.
//!
//! These types are separate from the content model: posts are read-only input,
//! while likes and bookmarks are the reader's own state and the only thing folio
//! ever writes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which per-post toggle an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// The reader liked the post.
    Like,
    /// The reader bookmarked the post.
    Bookmark,
}

/// Liked and bookmarked post ids for one reader profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactions {
    /// Ids of posts the reader liked.
    #[serde(default)]
    pub liked: BTreeSet<u64>,

    /// Ids of posts the reader bookmarked.
    #[serde(default)]
    pub bookmarked: BTreeSet<u64>,
}

impl Interactions {
    fn set_for(&mut self, kind: InteractionKind) -> &mut BTreeSet<u64> {
        match kind {
            InteractionKind::Like => &mut self.liked,
            InteractionKind::Bookmark => &mut self.bookmarked,
        }
    }

    /// Returns whether `id` is marked for `kind`.
    #[must_use]
    pub fn contains(&self, kind: InteractionKind, id: u64) -> bool {
        match kind {
            InteractionKind::Like => self.liked.contains(&id),
            InteractionKind::Bookmark => self.bookmarked.contains(&id),
        }
    }

    /// Flips the mark for `id` and returns the new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::storage::{InteractionKind, Interactions};
    ///
    /// let mut interactions = Interactions::default();
    /// assert!(interactions.toggle(InteractionKind::Like, 3));
    /// assert!(!interactions.toggle(InteractionKind::Like, 3));
    /// assert!(interactions.liked.is_empty());
    /// ```
    pub fn toggle(&mut self, kind: InteractionKind, id: u64) -> bool {
        let set = self.set_for(kind);
        if set.remove(&id) {
            false
        } else {
            set.insert(id);
            true
        }
    }

    /// Sets the mark for `id` explicitly.
    pub fn set(&mut self, kind: InteractionKind, id: u64, marked: bool) {
        let set = self.set_for(kind);
        if marked {
            set.insert(id);
        } else {
            set.remove(&id);
        }
    }
}
