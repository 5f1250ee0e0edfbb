//! Filtering and sorting over the record store.
//!
//! Every function here is pure: it borrows the records, never mutates them, and
//! returns references in the derived order. Calling them on every keystroke is
//! fine.

use super::state::{QueryState, SortKey, ALL_CATEGORIES};
use crate::domain::ContentRecord;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Number of related posts shown under a post on its detail page.
pub const RELATED_LIMIT: usize = 3;

/// Returns the published records matching `state`, in `state.sort_key()` order.
///
/// # Filtering
///
/// A record passes when all three hold:
/// 1. The search term is empty, or occurs (case-insensitively) in the title,
///    the excerpt, or any tag
/// 2. The category filter is `All`, or equals the record's category exactly
/// 3. The record is published
///
/// # Sorting
///
/// The sort is stable, so records with equal keys keep their store order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use folio::ContentRecord;
/// use folio::query::{filter_and_sort, QueryState, SortKey};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 12, d).unwrap();
/// let records = vec![
///     ContentRecord::new(1, "a", "x", day(15)).with_counts(1247, 0),
///     ContentRecord::new(2, "b", "x", day(10)).with_counts(892, 0),
///     ContentRecord::new(3, "c", "x", day(5)).with_counts(2156, 0),
/// ];
///
/// let mut state = QueryState::default();
/// state.set_sort(SortKey::Popular);
/// let ids: Vec<u64> = filter_and_sort(&records, &state).iter().map(|r| r.id).collect();
/// assert_eq!(ids, [3, 1, 2]);
/// ```
#[must_use]
pub fn filter_and_sort<'a>(records: &'a [ContentRecord], state: &QueryState) -> Vec<&'a ContentRecord> {
    let _span = tracing::debug_span!("filter_and_sort",
        total_records = records.len(),
        search_len = state.search_term().len(),
        category = %state.category().as_str(),
        sort = %state.sort_key()
    ).entered();

    let needle = state.search_term().to_lowercase();

    let mut matched: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| {
            record.published
                && state.category().accepts(&record.category)
                && record.mentions(&needle)
        })
        .collect();

    sort_records(&mut matched, state.sort_key());

    tracing::debug!(matched = matched.len(), "records filtered");
    matched
}

/// Stable in-place sort of borrowed records by `key`.
pub fn sort_records(records: &mut [&ContentRecord], key: SortKey) {
    match key {
        SortKey::Newest => records.sort_by_key(|r| Reverse(r.published_at)),
        SortKey::Oldest => records.sort_by_key(|r| r.published_at),
        SortKey::Popular => records.sort_by_key(|r| Reverse(r.view_count)),
        SortKey::Liked => records.sort_by_key(|r| Reverse(r.like_count)),
    }
}

/// Lists the category picker values: `"All"` followed by each distinct category
/// in the order it first appears in the store.
///
/// Drafts contribute their categories too, matching what the listing offers.
#[must_use]
pub fn categories(records: &[ContentRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for record in records {
        if seen.insert(record.category.as_str()) {
            out.push(record.category.clone());
        }
    }
    out
}

/// Looks up a record by id.
#[must_use]
pub fn find(records: &[ContentRecord], id: u64) -> Option<&ContentRecord> {
    records.iter().find(|r| r.id == id)
}

/// Returns up to `limit` published records in the same category as record `id`,
/// excluding that record, in store order.
///
/// An unknown `id` yields an empty list.
#[must_use]
pub fn related(records: &[ContentRecord], id: u64, limit: usize) -> Vec<&ContentRecord> {
    let Some(source) = find(records, id) else {
        tracing::debug!(id, "related lookup for unknown record");
        return vec![];
    };

    records
        .iter()
        .filter(|r| r.published && r.id != id && r.category == source.category)
        .take(limit)
        .collect()
}

/// Finds every case-insensitive occurrence of `term` in `text`.
///
/// Returns `(start, end)` character-index ranges (end exclusive), non-overlapping
/// and in order. An empty term yields no ranges. Used to highlight titles while a
/// search is active.
///
/// # Example
///
/// ```
/// use folio::query::match_ranges;
///
/// assert_eq!(match_ranges("Docker and docker", "DOCKER"), vec![(0, 6), (11, 17)]);
/// ```
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![];
    }

    // Compare char by char so indices stay aligned with `text.chars()`; a char
    // whose lowercase form expands to several chars simply never matches.
    let haystack: Vec<Option<char>> = text
        .chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => Some(single),
                _ => None,
            }
        })
        .collect();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        let window = &haystack[start..start + needle.len()];
        if window.iter().zip(&needle).all(|(h, n)| *h == Some(*n)) {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}
