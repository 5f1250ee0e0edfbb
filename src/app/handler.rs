//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single place where the list view's state changes. It
//! applies one event, keeps the page in range, and returns the side effects the
//! runtime must perform.
//!
//! # Event Types
//!
//! - **Query**: `SetSearch`, `SetCategory`, `SetSort`, `ClearFilters`
//! - **Paging**: `GoToPage`, `NextPage`, `PreviousPage`
//! - **Navigation**: `Navigate` (initial load or an externally edited URL)
//! - **Post actions**: `ToggleLike`, `ToggleBookmark`, `Share`
//!
//! # URL Synchronization
//!
//! After every query or paging event the new URL is emitted as
//! [`Action::ReplaceUrl`], but only if it actually changed. The reverse direction
//! (URL to state) happens only on `Navigate`.
//!
//! # Example
//!
//! ```rust
//! use folio::app::{handle_event, Action, Event, ListView};
//! use folio::storage::RecordStore;
//!
//! let mut view = ListView::new(RecordStore::sample()?, Default::default());
//! let (render, actions) = handle_event(&mut view, &Event::SetSearch("docker".into()))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ReplaceUrl("/blog?search=docker".into())]);
//! # Ok::<(), folio::FolioError>(())
//! ```

use crate::app::{Action, ListView, Notification};
use crate::domain::error::Result;
use crate::query::{self, CategoryFilter, SortKey};
use crate::storage::InteractionKind;

/// Events triggered by reader input or navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search text.
    SetSearch(String),
    /// Selects a category; `"All"` clears the category filter.
    SetCategory(String),
    /// Selects a sort order.
    SetSort(SortKey),
    /// Jumps to a page; out-of-range pages clamp.
    GoToPage(u32),
    /// Moves one page forward if possible.
    NextPage,
    /// Moves one page back if possible.
    PreviousPage,
    /// Resets search, category, and sort ("Clear Filters").
    ClearFilters,
    /// Loads state from a query string, e.g. `?search=docker&page=2`.
    Navigate(String),
    /// Flips the reader's like on a post.
    ToggleLike(u64),
    /// Flips the reader's bookmark on a post.
    ToggleBookmark(u64),
    /// Shares a post.
    Share(u64),
}

/// Processes an event, mutates the view, and returns `(needs_render, actions)`.
///
/// # Errors
///
/// Returns [`FolioError::RecordNotFound`](crate::FolioError::RecordNotFound) when
/// a post event names an unknown id, and
/// [`FolioError::InvalidUrl`](crate::FolioError::InvalidUrl) if a share link
/// cannot be built. Query and paging events never fail.
pub fn handle_event(view: &mut ListView, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let url_before = view.current_url();

    match event {
        Event::SetSearch(term) => {
            view.query.set_search(term.clone());
            tracing::trace!(query = %term, "search updated");
        }
        Event::SetCategory(category) => {
            view.query.set_category(CategoryFilter::from_value(category));
        }
        Event::SetSort(key) => {
            view.query.set_sort(*key);
        }
        Event::ClearFilters => {
            tracing::debug!("clearing filters");
            view.query.clear_filters();
        }
        Event::GoToPage(page) => {
            let total = view.derived().total_pages;
            view.query.set_page(*page, total);
        }
        Event::NextPage => {
            let total = view.derived().total_pages;
            view.query.set_page(view.query.page().saturating_add(1), total);
        }
        Event::PreviousPage => {
            let total = view.derived().total_pages;
            view.query.set_page(view.query.page().saturating_sub(1), total);
        }
        Event::Navigate(query_string) => {
            view.query = query::decode(query_string);
            view.reclamp();

            let canonical = query::encode(&view.query);
            let given = normalize_query(query_string);
            tracing::debug!(given = %given, canonical = %canonical, "navigated");

            // The address bar already shows `query_string`; rewrite it only when
            // decoding normalized something away.
            let actions = if canonical == given {
                vec![]
            } else {
                vec![Action::ReplaceUrl(view.current_url())]
            };
            return Ok((true, actions));
        }
        Event::ToggleLike(id) => return toggle(view, InteractionKind::Like, *id),
        Event::ToggleBookmark(id) => return toggle(view, InteractionKind::Bookmark, *id),
        Event::Share(id) => {
            let post = view.post(*id)?;
            let url = view.share_url(*id)?;
            tracing::debug!(id, url = %url, "sharing post");
            return Ok((
                false,
                vec![
                    Action::ShareLink {
                        title: post.title.clone(),
                        text: post.excerpt.clone(),
                        url: url.to_string(),
                    },
                    Action::Notify(Notification::link_copied()),
                ],
            ));
        }
    }

    view.reclamp();

    let url_after = view.current_url();
    if url_after == url_before {
        tracing::debug!("query unchanged");
        Ok((true, vec![]))
    } else {
        Ok((true, vec![Action::ReplaceUrl(url_after)]))
    }
}

fn toggle(view: &mut ListView, kind: InteractionKind, id: u64) -> Result<(bool, Vec<Action>)> {
    view.post(id)?;

    let marked = view.interactions.toggle(kind, id);
    tracing::debug!(id, kind = ?kind, marked, "interaction toggled");

    let notification = match kind {
        InteractionKind::Like => Notification::for_like(marked),
        InteractionKind::Bookmark => Notification::for_bookmark(marked),
    };

    Ok((
        true,
        vec![
            Action::PersistInteraction { kind, id, marked },
            Action::Notify(notification),
        ],
    ))
}

/// Canonical form of an incoming query string for comparison with `encode`.
fn normalize_query(query_string: &str) -> String {
    let trimmed = query_string.strip_prefix('?').unwrap_or(query_string);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("?{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewSettings;
    use crate::domain::ContentRecord;
    use crate::storage::RecordStore;
    use crate::FolioError;
    use chrono::NaiveDate;

    fn view_of(n: u64) -> ListView {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = (1..=n)
            .map(|id| {
                let category = if id % 2 == 0 { "Even" } else { "Odd" };
                ContentRecord::new(id, format!("Post {id}"), category, day)
            })
            .collect();
        ListView::new(RecordStore::new(records).unwrap(), ViewSettings::default())
    }

    #[test]
    fn filter_events_reset_page_and_replace_url() {
        let mut view = view_of(20);
        handle_event(&mut view, &Event::GoToPage(3)).unwrap();
        assert_eq!(view.query.page(), 3);

        let (_, actions) = handle_event(&mut view, &Event::SetCategory("Odd".into())).unwrap();
        assert_eq!(view.query.page(), 1);
        assert_eq!(actions, vec![Action::ReplaceUrl("/blog?category=Odd".into())]);
    }

    #[test]
    fn paging_clamps_at_both_ends() {
        let mut view = view_of(8);

        handle_event(&mut view, &Event::PreviousPage).unwrap();
        assert_eq!(view.query.page(), 1);

        handle_event(&mut view, &Event::NextPage).unwrap();
        handle_event(&mut view, &Event::NextPage).unwrap();
        assert_eq!(view.query.page(), 2);

        let (_, actions) = handle_event(&mut view, &Event::GoToPage(9)).unwrap();
        assert_eq!(view.query.page(), 2);
        assert!(actions.is_empty());
    }

    #[test]
    fn navigate_normalizes_out_of_range_page() {
        let mut view = view_of(8);
        let (_, actions) = handle_event(&mut view, &Event::Navigate("?page=5".into())).unwrap();
        assert_eq!(view.query.page(), 2);
        assert_eq!(actions, vec![Action::ReplaceUrl("/blog?page=2".into())]);

        let (_, actions) =
            handle_event(&mut view, &Event::Navigate("search=post&sort=liked".into())).unwrap();
        assert!(actions.is_empty());
        assert_eq!(view.query.search_term(), "post");
    }

    #[test]
    fn clear_filters_returns_to_clean_url() {
        let mut view = view_of(3);
        handle_event(&mut view, &Event::Navigate("?search=post&sort=oldest".into())).unwrap();

        let (_, actions) = handle_event(&mut view, &Event::ClearFilters).unwrap();
        assert!(view.query.is_default());
        assert_eq!(actions, vec![Action::ReplaceUrl("/blog".into())]);
    }

    #[test]
    fn toggling_like_twice_restores_state() {
        let mut view = view_of(3);

        let (_, actions) = handle_event(&mut view, &Event::ToggleLike(2)).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::PersistInteraction { kind: InteractionKind::Like, id: 2, marked: true },
                Action::Notify(Notification::for_like(true)),
            ]
        );

        handle_event(&mut view, &Event::ToggleLike(2)).unwrap();
        assert!(view.interactions.liked.is_empty());
    }

    #[test]
    fn bookmark_unknown_post_fails() {
        let mut view = view_of(3);
        let err = handle_event(&mut view, &Event::ToggleBookmark(99)).unwrap_err();
        assert!(matches!(err, FolioError::RecordNotFound { id: 99 }));
        assert!(view.interactions.bookmarked.is_empty());
    }

    #[test]
    fn share_emits_absolute_link() {
        let mut view = view_of(3);
        let (render, actions) = handle_event(&mut view, &Event::Share(2)).unwrap();
        assert!(!render);
        assert_eq!(
            actions,
            vec![
                Action::ShareLink {
                    title: "Post 2".into(),
                    text: String::new(),
                    url: format!("{}/blog/2", crate::DEFAULT_SITE_ORIGIN),
                },
                Action::Notify(Notification::link_copied()),
            ]
        );
    }
}
