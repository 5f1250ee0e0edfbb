//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never touches the address bar, the interaction store, or
//! the terminal directly. It returns a `Vec<Action>` and the runtime (the CLI in
//! `main.rs`, or any other front end) executes them in order.
//!
//! # Example
//!
//! ```rust
//! use folio::app::{Action, Notification};
//!
//! let actions = vec![
//!     Action::ReplaceUrl("/blog?sort=popular".to_string()),
//!     Action::Notify(Notification::link_copied()),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::storage::InteractionKind;

/// Commands the runtime executes after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the current history entry with this URL.
    ///
    /// Never pushes a new entry, so typing a search does not fill the back
    /// button with one entry per keystroke.
    ReplaceUrl(String),

    /// Shows a short notification to the reader.
    Notify(Notification),

    /// Persists a like or bookmark change to the interaction store.
    PersistInteraction {
        /// Like or bookmark.
        kind: InteractionKind,
        /// Post id.
        id: u64,
        /// New value.
        marked: bool,
    },

    /// Offers a post for sharing.
    ///
    /// Runtimes with a native share sheet pass all three fields to it; others
    /// copy `url` to the clipboard. The handler follows it with
    /// [`Notification::link_copied`].
    ShareLink {
        /// Post title.
        title: String,
        /// Post excerpt.
        text: String,
        /// Absolute link to the post.
        url: String,
    },
}

/// A title plus one line of detail, shown as a transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Message for a like toggle.
    #[must_use]
    pub fn for_like(liked: bool) -> Self {
        if liked {
            Self::new("Post liked!", "Added to your liked posts")
        } else {
            Self::new("Like removed", "Removed from liked posts")
        }
    }

    /// Message for a bookmark toggle.
    #[must_use]
    pub fn for_bookmark(bookmarked: bool) -> Self {
        if bookmarked {
            Self::new("Post bookmarked!", "Added to your bookmarks")
        } else {
            Self::new("Bookmark removed", "Removed from bookmarks")
        }
    }

    /// Message after a link was copied to the clipboard.
    #[must_use]
    pub fn link_copied() -> Self {
        Self::new("Link copied!", "Blog link copied to clipboard")
    }
}
