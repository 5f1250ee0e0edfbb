//! List view state and view model computation.
//!
//! [`ListView`] owns everything one blog listing needs: the read-only record
//! store, the single [`QueryState`], the reader's likes and bookmarks, and the
//! presentation settings. The derived view (matched records, page count, current
//! slice) is never stored; it is recomputed from a state snapshot whenever it is
//! asked for.
//!
//! # Example
//!
//! ```rust
//! use folio::app::ListView;
//! use folio::storage::RecordStore;
//! use folio::query::SortKey;
//!
//! let mut view = ListView::new(RecordStore::sample()?, Default::default());
//! view.query.set_sort(SortKey::Popular);
//! view.reclamp();
//!
//! let derived = view.derived();
//! assert_eq!(derived.page_slice()[0].id, 3);
//! assert_eq!(view.current_url(), "/blog?sort=popular");
//! # Ok::<(), folio::FolioError>(())
//! ```

use crate::domain::error::{FolioError, Result};
use crate::domain::ContentRecord;
use crate::query::{self, QueryState, DEFAULT_PAGE_SIZE};
use crate::storage::{InteractionKind, Interactions, RecordStore};
use crate::ui::helpers::format_count;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FilterBarInfo, HeaderInfo, ListViewModel, PagerInfo, PostCard, PostDetailViewModel,
};
use std::num::NonZeroUsize;
use std::ops::Range;
use url::Url;

/// Path of the listing page; query strings are appended to it.
pub const LIST_PATH: &str = "/blog";

/// Number of tags shown on a listing card.
const CARD_TAG_LIMIT: usize = 3;

/// Presentation settings that do not change during a session.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    /// Posts per page.
    pub page_size: NonZeroUsize,
    /// Origin used to build absolute share links, e.g. `https://example.dev`.
    pub site_origin: Url,
    /// Colour scheme for the text renderer.
    pub theme: Theme,
    /// Emit ANSI colours; off for `--no-color` or piped output.
    pub color: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            site_origin: Url::parse(crate::DEFAULT_SITE_ORIGIN)
                .expect("Built-in site origin should always parse"),
            theme: Theme::default(),
            color: true,
        }
    }
}

/// The filtered, sorted, paginated result for one state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    /// Every record passing the filter, in sort order.
    pub matched: Vec<&'a ContentRecord>,
    /// `ceil(matched.len() / page_size)`.
    pub total_pages: u32,
    /// Page shown after clamping; `None` when nothing matched.
    pub current_page: Option<u32>,
    slice: Range<usize>,
}

impl<'a> DerivedView<'a> {
    /// Records on the current page.
    #[must_use]
    pub fn page_slice(&self) -> &[&'a ContentRecord] {
        &self.matched[self.slice.clone()]
    }

    /// Returns `true` when nothing matched the query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// State container for one blog listing session.
#[derive(Debug, Clone)]
pub struct ListView {
    /// Read-only post collection.
    pub store: RecordStore,

    /// Current search, category, sort, and page.
    ///
    /// Mutated only by the event handler. Call [`ListView::reclamp`] after
    /// changing it directly so the page stays in range.
    pub query: QueryState,

    /// The reader's likes and bookmarks, loaded from the interaction store.
    pub interactions: Interactions,

    /// Presentation settings.
    pub settings: ViewSettings,
}

impl ListView {
    /// Creates a view on the default query with no interactions.
    #[must_use]
    pub fn new(store: RecordStore, settings: ViewSettings) -> Self {
        Self {
            store,
            query: QueryState::default(),
            interactions: Interactions::default(),
            settings,
        }
    }

    /// Recomputes the derived view from the current state.
    #[must_use]
    pub fn derived(&self) -> DerivedView<'_> {
        let _span = tracing::debug_span!("derive_view",
            page = self.query.page(),
            page_size = self.settings.page_size.get()
        ).entered();

        let matched = query::filter_and_sort(self.store.records(), &self.query);
        let page = query::paginate(&matched, self.query.page(), self.settings.page_size);

        let total_pages = page.total_pages;
        let current_page = page.current_page;
        let slice = current_page.map_or(0..0, |current| {
            let size = self.settings.page_size.get();
            let start = (current as usize - 1) * size;
            start..(start + page.slice.len())
        });

        DerivedView {
            matched,
            total_pages,
            current_page,
            slice,
        }
    }

    /// Pulls `query.page` back into `[1, total_pages]` for the current filters.
    ///
    /// Returns `true` if the page changed.
    pub fn reclamp(&mut self) -> bool {
        let total_pages = self.derived().total_pages;
        let before = self.query.page();
        self.query.set_page(before, total_pages);

        let changed = before != self.query.page();
        if changed {
            tracing::debug!(from = before, to = self.query.page(), total_pages, "page clamped");
        }
        changed
    }

    /// The listing URL for the current state, e.g. `/blog?search=docker`.
    #[must_use]
    pub fn current_url(&self) -> String {
        format!("{LIST_PATH}{}", query::encode(&self.query))
    }

    /// Absolute link to post `id` under the configured origin.
    ///
    /// Only the origin takes part; [`Config::site_origin`](crate::Config::site_origin)
    /// rejects origins that carry a path.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidUrl`] if the origin cannot be joined.
    pub fn share_url(&self, id: u64) -> Result<Url> {
        self.settings
            .site_origin
            .join(&format!("{LIST_PATH}/{id}"))
            .map_err(|e| FolioError::InvalidUrl(format!("{}: {e}", self.settings.site_origin)))
    }

    /// Looks up a post, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::RecordNotFound`] for unknown ids.
    pub fn post(&self, id: u64) -> Result<&ContentRecord> {
        self.store.get(id).ok_or(FolioError::RecordNotFound { id })
    }

    /// Computes the listing view model for the current state.
    ///
    /// The pager is only present when there is more than one page, and the empty
    /// state only when nothing matched.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ListViewModel {
        let derived = self.derived();

        let cards = derived
            .page_slice()
            .iter()
            .map(|record| self.compute_card(record, CARD_TAG_LIMIT))
            .collect();

        let pager = derived
            .current_page
            .filter(|_| derived.total_pages > 1)
            .map(|current| PagerInfo {
                current,
                pages: (1..=derived.total_pages).collect(),
                has_previous: current > 1,
                has_next: current < derived.total_pages,
            });

        let empty_state = derived.is_empty().then(|| EmptyState {
            message: "No blogs found".to_string(),
            subtitle: "Try adjusting your search terms or filters to find what you're looking for."
                .to_string(),
        });

        ListViewModel {
            header: self.compute_header(derived.matched.len()),
            filter_bar: self.compute_filter_bar(),
            cards,
            pager,
            empty_state,
            url: self.current_url(),
        }
    }

    /// Computes the detail view model for post `id`, with related posts.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown ids or if the share link cannot be built.
    pub fn compute_detail(&self, id: u64) -> Result<PostDetailViewModel> {
        let record = self.post(id)?;
        let related = query::related(self.store.records(), id, query::RELATED_LIMIT)
            .into_iter()
            .map(|r| self.compute_card(r, 0))
            .collect();

        let noun = if record.comments == 1 { "comment" } else { "comments" };
        Ok(PostDetailViewModel {
            post: self.compute_card(record, usize::MAX),
            body: record.content.clone(),
            comment_count: format!("{} {noun}", format_count(record.comments)),
            related,
            share_url: self.share_url(id)?.to_string(),
        })
    }

    fn compute_card(&self, record: &ContentRecord, tag_limit: usize) -> PostCard {
        PostCard {
            id: record.id,
            title: record.title.clone(),
            title_highlights: query::match_ranges(&record.title, self.query.search_term()),
            excerpt: record.excerpt.clone(),
            category: record.category.clone(),
            author: record.author.clone(),
            date: record.display_date(),
            read_time: record.read_time.clone(),
            views: record.view_count,
            likes: record.like_count,
            tags: record.tags.iter().take(tag_limit).cloned().collect(),
            featured: record.featured,
            liked: self.interactions.contains(InteractionKind::Like, record.id),
            bookmarked: self.interactions.contains(InteractionKind::Bookmark, record.id),
        }
    }

    fn compute_header(&self, matched: usize) -> HeaderInfo {
        let noun = if matched == 1 { "post" } else { "posts" };
        HeaderInfo {
            title: "Tech Blog".to_string(),
            result_count: format!("{matched} {noun} found"),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        FilterBarInfo {
            search: self.query.search_term().to_string(),
            category: self.query.category().as_str().to_string(),
            sort_label: self.query.sort_key().label(),
            categories: query::categories(self.store.records()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{CategoryFilter, SortKey};
    use chrono::NaiveDate;

    fn store_of(n: u64) -> RecordStore {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        RecordStore::new(
            (1..=n)
                .map(|id| {
                    ContentRecord::new(id, format!("Post {id}"), "General", day + chrono::Days::new(id))
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn derived_view_slices_current_page() {
        let mut view = ListView::new(store_of(8), ViewSettings::default());
        view.query.set_page(2, 2);

        let derived = view.derived();
        assert_eq!(derived.total_pages, 2);
        assert_eq!(derived.current_page, Some(2));
        let ids: Vec<u64> = derived.page_slice().iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn reclamp_pulls_page_into_range() {
        let mut view = ListView::new(store_of(8), ViewSettings::default());
        view.query = crate::query::decode("page=5");

        assert!(view.reclamp());
        assert_eq!(view.query.page(), 2);
        assert!(!view.reclamp());
    }

    #[test]
    fn empty_result_has_empty_state_and_no_pager() {
        let mut view = ListView::new(store_of(3), ViewSettings::default());
        view.query.set_category(CategoryFilter::from_value("Nope"));

        let vm = view.compute_viewmodel();
        assert!(vm.cards.is_empty());
        assert!(vm.pager.is_none());
        assert_eq!(vm.header.result_count, "0 posts found");
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("No blogs found"));
    }

    #[test]
    fn pager_only_with_multiple_pages() {
        let view = ListView::new(store_of(6), ViewSettings::default());
        assert!(view.compute_viewmodel().pager.is_none());

        let view = ListView::new(store_of(7), ViewSettings::default());
        let pager = view.compute_viewmodel().pager.unwrap();
        assert_eq!(pager.pages, [1, 2]);
        assert!(!pager.has_previous);
        assert!(pager.has_next);
    }

    #[test]
    fn url_reflects_state() {
        let mut view = ListView::new(store_of(1), ViewSettings::default());
        assert_eq!(view.current_url(), "/blog");
        view.query.set_sort(SortKey::Oldest);
        assert_eq!(view.current_url(), "/blog?sort=oldest");
    }

    #[test]
    fn share_url_joins_origin() {
        let mut settings = ViewSettings::default();
        settings.site_origin = Url::parse("https://ashish.dev").unwrap();
        let view = ListView::new(store_of(1), settings);
        assert_eq!(view.share_url(1).unwrap().as_str(), "https://ashish.dev/blog/1");
    }

    #[test]
    fn detail_carries_body_and_comment_count() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let mut post = ContentRecord::new(1, "Microservices", "Backend", day)
            .with_content("## Introduction\n\nServices talk over HTTP.");
        post.comments = 1;
        let view = ListView::new(RecordStore::new(vec![post]).unwrap(), ViewSettings::default());

        let detail = view.compute_detail(1).unwrap();
        assert_eq!(detail.body, "## Introduction\n\nServices talk over HTTP.");
        assert_eq!(detail.comment_count, "1 comment");
    }

    #[test]
    fn detail_for_unknown_post_fails() {
        let view = ListView::new(store_of(2), ViewSettings::default());
        assert!(matches!(
            view.compute_detail(42),
            Err(FolioError::RecordNotFound { id: 42 })
        ));
    }
}
