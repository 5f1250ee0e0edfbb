//! Fixed-size pagination over an already filtered and sorted list.

use std::num::NonZeroUsize;

/// Posts per page on the blog listing.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

/// One page of results plus the numbers needed to draw a pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on the current page; empty when there are no pages.
    pub slice: &'a [T],
    /// `ceil(len / page_size)`; zero for an empty input.
    pub total_pages: u32,
    /// The page actually shown after clamping, or `None` when there are no pages.
    pub current_page: Option<u32>,
}

impl<T> Page<'_, T> {
    /// Whether a "Previous" link applies.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page.is_some_and(|page| page > 1)
    }

    /// Whether a "Next" link applies.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page.is_some_and(|page| page < self.total_pages)
    }

    /// Page numbers for the pager links, `1..=total_pages`.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.total_pages
    }
}

/// Slices `matched` into pages of `page_size` and returns page `page`.
///
/// `page` is clamped into `[1, total_pages]`. With an empty input there are no
/// pages: the slice is empty and `current_page` is `None`. The function keeps no
/// state, so identical arguments always give identical output.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use folio::query::paginate;
///
/// let items: Vec<u32> = (0..8).collect();
/// let size = NonZeroUsize::new(6).unwrap();
///
/// let page = paginate(&items, 5, size);
/// assert_eq!(page.total_pages, 2);
/// assert_eq!(page.current_page, Some(2));
/// assert_eq!(page.slice, &[6, 7]);
/// ```
#[must_use]
pub fn paginate<T>(matched: &[T], page: u32, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let total_pages = u32::try_from(matched.len().div_ceil(size)).unwrap_or(u32::MAX);

    if total_pages == 0 {
        return Page {
            slice: &[],
            total_pages: 0,
            current_page: None,
        };
    }

    let current = page.clamp(1, total_pages);
    let start = (current as usize - 1).saturating_mul(size).min(matched.len());
    let end = start.saturating_add(size).min(matched.len());

    Page {
        slice: &matched[start..end],
        total_pages,
        current_page: Some(current),
    }
}
