//! View model types representing renderable listing state.
//!
//! View models are computed by [`ListView::compute_viewmodel`] and
//! [`ListView::compute_detail`] and consumed by the renderer. They hold
//! display-ready data only: formatted dates, pre-computed highlight ranges, and
//! the reader's like/bookmark flags already resolved per card.
//!
//! [`ListView::compute_viewmodel`]: crate::app::ListView::compute_viewmodel
//! [`ListView::compute_detail`]: crate::app::ListView::compute_detail
//!
//! # Example
//!
//! ```rust
//! use folio::ui::viewmodel::{EmptyState, FilterBarInfo, HeaderInfo, ListViewModel};
//!
//! let vm = ListViewModel {
//!     header: HeaderInfo {
//!         title: "Tech Blog".to_string(),
//!         result_count: "0 posts found".to_string(),
//!     },
//!     filter_bar: FilterBarInfo {
//!         search: "kubernetes".to_string(),
//!         category: "All".to_string(),
//!         sort_label: "Newest First",
//!         categories: vec!["All".to_string()],
//!     },
//!     cards: vec![],
//!     pager: None,
//!     empty_state: Some(EmptyState {
//!         message: "No blogs found".to_string(),
//!         subtitle: "Try adjusting your search terms".to_string(),
//!     }),
//!     url: "/blog?search=kubernetes".to_string(),
//! };
//! assert!(vm.cards.is_empty());
//! ```

/// Complete view model for one page of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Title and result count.
    pub header: HeaderInfo,

    /// Current search, category, and sort as shown in the controls.
    pub filter_bar: FilterBarInfo,

    /// Cards for the current page, in sort order.
    pub cards: Vec<PostCard>,

    /// Page controls; `None` when everything fits on one page.
    pub pager: Option<PagerInfo>,

    /// Shown instead of cards when nothing matched.
    pub empty_state: Option<EmptyState>,

    /// Canonical listing URL for this state.
    pub url: String,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Page title.
    pub title: String,

    /// e.g. `"6 posts found"`.
    pub result_count: String,
}

/// The search box, category picker, and sort picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Current search text.
    pub search: String,

    /// Selected category value, `"All"` when unfiltered.
    pub category: String,

    /// Human label of the sort order, e.g. `"Most Popular"`.
    pub sort_label: &'static str,

    /// Picker options, `"All"` first.
    pub categories: Vec<String>,
}

/// Display information for a single post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: u64,
    pub title: String,

    /// Character ranges of the title matching the search term.
    ///
    /// Each tuple is `(start, end)` in char indices, end exclusive.
    pub title_highlights: Vec<(usize, usize)>,

    pub excerpt: String,
    pub category: String,
    pub author: String,

    /// Publication date, e.g. `"Dec 15, 2024"`.
    pub date: String,

    pub read_time: String,
    pub views: u64,
    pub likes: u64,

    /// Leading tags, already cut to the card limit.
    pub tags: Vec<String>,

    pub featured: bool,

    /// Whether the reader has liked this post.
    pub liked: bool,

    /// Whether the reader has bookmarked this post.
    pub bookmarked: bool,
}

/// Page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// Current page, 1-based.
    pub current: u32,

    /// Every page number, `1..=total_pages`.
    pub pages: Vec<u32>,

    pub has_previous: bool,
    pub has_next: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No blogs found").
    pub message: String,

    /// Hint shown below the message.
    pub subtitle: String,
}

/// View model for a single post with its related posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetailViewModel {
    /// The post itself, with all tags.
    pub post: PostCard,

    /// Markdown body, unrendered.
    pub body: String,

    /// e.g. `"12 comments"`.
    pub comment_count: String,

    /// Up to three published posts from the same category.
    pub related: Vec<PostCard>,

    /// Absolute link for sharing.
    pub share_url: String,
}
