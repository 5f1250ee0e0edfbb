//! Query-string encoding of [`QueryState`] for shareable, bookmarkable views.
//!
//! Schema:
//!
//! ```text
//! ?search=<string>&category=<string>&sort=newest|oldest|popular|liked&page=<positive integer>
//! ```
//!
//! Every parameter is optional and omitted when it holds its default, so the
//! unfiltered first page encodes to the empty string. Values are
//! `application/x-www-form-urlencoded`, the same encoding browsers use for
//! `URLSearchParams`, which keeps arbitrary search text round-trippable.

use super::state::{CategoryFilter, QueryState, SortKey};
use url::form_urlencoded;

const SEARCH: &str = "search";
const CATEGORY: &str = "category";
const SORT: &str = "sort";
const PAGE: &str = "page";

/// Encodes `state` as a query string, including the leading `?`.
///
/// Returns an empty string for the default state.
///
/// # Example
///
/// ```
/// use folio::query::{encode, QueryState, SortKey};
///
/// let mut state = QueryState::default();
/// state.set_search("docker");
/// state.set_sort(SortKey::Popular);
/// assert_eq!(encode(&state), "?search=docker&sort=popular");
/// assert_eq!(encode(&QueryState::default()), "");
/// ```
#[must_use]
pub fn encode(state: &QueryState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search_term().is_empty() {
        serializer.append_pair(SEARCH, state.search_term());
    }
    if !state.category().is_all() {
        serializer.append_pair(CATEGORY, state.category().as_str());
    }
    if state.sort_key() != SortKey::Newest {
        serializer.append_pair(SORT, state.sort_key().as_str());
    }
    if state.page() != 1 {
        serializer.append_pair(PAGE, &state.page().to_string());
    }

    let query = serializer.finish();
    if query.is_empty() {
        query
    } else {
        format!("?{query}")
    }
}

/// Decodes a query string into a [`QueryState`], never failing.
///
/// - A leading `?` is optional
/// - Unknown parameters are ignored; the first occurrence of a parameter wins
/// - Missing parameters take their defaults
/// - `sort` values outside the schema become `newest`
/// - `page` must be a positive integer; anything else (empty, zero, negative,
///   non-numeric, overflowing) becomes 1
///
/// # Example
///
/// ```
/// use folio::query::{decode, SortKey};
///
/// let state = decode("?search=docker&sort=popular&page=-2");
/// assert_eq!(state.search_term(), "docker");
/// assert_eq!(state.sort_key(), SortKey::Popular);
/// assert_eq!(state.page(), 1);
/// assert!(state.category().is_all());
/// ```
#[must_use]
pub fn decode(query: &str) -> QueryState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search: Option<String> = None;
    let mut category: Option<String> = None;
    let mut sort: Option<String> = None;
    let mut page: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            SEARCH => &mut search,
            CATEGORY => &mut category,
            SORT => &mut sort,
            PAGE => &mut page,
            other => {
                tracing::trace!(param = %other, "ignoring unknown query parameter");
                continue;
            }
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let state = QueryState::from_parts(
        search.unwrap_or_default(),
        category
            .as_deref()
            .map_or(CategoryFilter::All, CategoryFilter::from_value),
        sort.as_deref().map_or(SortKey::Newest, SortKey::parse_or_default),
        page.as_deref().map_or(1, parse_page),
    );

    tracing::debug!(state = ?state, "decoded query string");
    state
}

/// Parses a positive page number, defaulting to 1.
fn parse_page(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => {
            tracing::debug!(page = %value, "invalid page parameter, using 1");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docker_popular_example_round_trips_exactly() {
        let state = decode("?search=docker&sort=popular");
        assert_eq!(
            state,
            QueryState::from_parts("docker", CategoryFilter::All, SortKey::Popular, 1)
        );
        assert_eq!(encode(&state), "?search=docker&sort=popular");
    }

    #[test]
    fn full_state_encodes_in_schema_order() {
        let state = QueryState::from_parts(
            "node js",
            CategoryFilter::from_value("Backend Development"),
            SortKey::Liked,
            3,
        );
        assert_eq!(
            encode(&state),
            "?search=node+js&category=Backend+Development&sort=liked&page=3"
        );
        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn invalid_pages_fall_back_to_one() {
        for raw in ["page=0", "page=-4", "page=abc", "page=", "page=1.5", "page=99999999999"] {
            assert_eq!(decode(raw).page(), 1, "input {raw}");
        }
        assert_eq!(decode("page=%207").page(), 7);
    }

    #[test]
    fn unknown_sort_and_params_are_ignored() {
        let state = decode("sort=trending&utm_source=mail&category=All");
        assert!(state.is_default());
    }

    #[test]
    fn first_occurrence_wins() {
        let state = decode("?search=rust&search=go");
        assert_eq!(state.search_term(), "rust");
    }

    #[test]
    fn reserved_characters_survive() {
        let state = QueryState::from_parts("C++ & C#?=100%", CategoryFilter::All, SortKey::Newest, 1);
        let encoded = encode(&state);
        assert!(!encoded.contains(' '));
        assert_eq!(decode(&encoded), state);
    }

    #[test]
    fn empty_inputs_decode_to_default() {
        assert!(decode("").is_default());
        assert!(decode("?").is_default());
    }
}
