//! Query state: the search, category, sort, and page selections of one list view.
//!
//! [`QueryState`] keeps its fields private so the transition rules hold by
//! construction: changing the search term, category, or sort key always sends the
//! view back to page 1, and the page number can never drop below 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Ordering applied to the matched records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent publication date first.
    #[default]
    Newest,
    /// Oldest publication date first.
    Oldest,
    /// Highest view count first.
    Popular,
    /// Highest like count first.
    Liked,
}

impl SortKey {
    /// Every sort key, in the order the sort picker lists them.
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::Popular, Self::Liked];

    /// Parses a sort key, falling back to [`SortKey::Newest`] for anything unknown.
    ///
    /// Matching is exact and lowercase, as the query-string schema defines it.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::query::SortKey;
    ///
    /// assert_eq!(SortKey::parse_or_default("popular"), SortKey::Popular);
    /// assert_eq!(SortKey::parse_or_default("trending"), SortKey::Newest);
    /// ```
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "oldest" => Self::Oldest,
            "popular" => Self::Popular,
            "liked" => Self::Liked,
            "newest" => Self::Newest,
            other => {
                tracing::debug!(sort = %other, "unknown sort key, using newest");
                Self::Newest
            }
        }
    }

    /// The query-string spelling of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
            Self::Liked => "liked",
        }
    }

    /// Human-readable label for the sort picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Popular => "Most Popular",
            Self::Liked => "Most Liked",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection: everything, or one exact category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No filtering by category.
    #[default]
    All,
    /// Only records whose category equals this string exactly.
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a picker or query-string value.
    ///
    /// Both `"All"` and the empty string select [`CategoryFilter::All`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The value shown in the picker and written to the query string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Returns `true` if a record in `category` passes this filter.
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Returns `true` for the sentinel.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// The mutable selections driving one list view.
///
/// # Example
///
/// ```
/// use folio::query::{QueryState, SortKey};
///
/// let mut state = QueryState::default();
/// state.set_page(3, 4);
/// assert_eq!(state.page(), 3);
///
/// state.set_sort(SortKey::Popular);
/// assert_eq!(state.page(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    search_term: String,
    category: CategoryFilter,
    sort_key: SortKey,
    page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            sort_key: SortKey::Newest,
            page: 1,
        }
    }
}

impl QueryState {
    /// Assembles a state from already-validated parts.
    ///
    /// A `page` of zero is raised to 1.
    #[must_use]
    pub fn from_parts(
        search_term: impl Into<String>,
        category: CategoryFilter,
        sort_key: SortKey,
        page: u32,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            category,
            sort_key,
            page: page.max(1),
        }
    }

    /// Current search text, verbatim as typed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current category filter.
    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Current sort key.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Requested page, 1-based.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns `true` when every field holds its default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Replaces the search text and returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Replaces the category filter and returns to page 1.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Replaces the sort key and returns to page 1.
    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.page = 1;
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    ///
    /// With no pages at all the state rests on page 1.
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Restores search, category, and sort to their defaults ("Clear Filters").
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }
}
