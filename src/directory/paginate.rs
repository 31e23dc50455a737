//! Page derivation, navigation, and page-number compaction.
//!
//! The requested page lives in a [`PageCursor`] and is never rewritten by
//! clamping. [`paginate`] clamps on read, so when a narrower query shrinks the
//! page count the displayed page moves without the cursor changing. Navigation,
//! in contrast, refuses out-of-range targets as a silent no-op.

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page counts up to this value list every page number.
const MAX_PAGES_TO_SHOW: usize = 7;

/// One page worth of items plus the numbers needed to render navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on the clamped page, at most `page_size` of them.
    pub items: &'a [T],
    /// Requested page forced into `[1, max(1, total_pages)]`.
    pub current: usize,
    /// `ceil(total_count / page_size)`, zero for an empty input.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_count: usize,
}

/// Slices `items` into the page at `page`, clamping the page index.
///
/// A `page_size` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use dirbrowse::directory::paginate;
///
/// let items: Vec<u32> = (1..=12).collect();
/// let page = paginate(&items, 9, 5);
/// assert_eq!(page.current, 3);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.items, &[11, 12]);
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size);
    let current = page.clamp(1, total_pages.max(1));

    let start = ((current - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    Page {
        items: &items[start..end],
        current,
        total_pages,
        total_count,
    }
}

/// The requested page index, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    /// Returns the raw requested page (may exceed the current page count).
    #[must_use]
    pub const fn requested(&self) -> usize {
        self.page
    }

    /// Moves to page `target` if it is in `[1, total_pages]` and differs from
    /// the current request. Returns whether the cursor moved.
    pub fn go_to(&mut self, target: usize, total_pages: usize) -> bool {
        if target >= 1 && target <= total_pages && target != self.page {
            self.page = target;
            true
        } else {
            false
        }
    }

    /// Advances one page unless already at or past `total_pages`.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one page unless already on the first.
    pub fn previous(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Returns to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// An entry in the numbered page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

/// Computes the numbered page links shown between previous and next.
///
/// Up to seven pages are all listed. Beyond that the first and last page are
/// always present, with a window of three pages near the current one and an
/// ellipsis for each gap.
///
/// # Examples
///
/// ```
/// use dirbrowse::directory::{page_links, PageLink::{Ellipsis, Number}};
///
/// assert_eq!(
///     page_links(5, 10),
///     vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)],
/// );
/// ```
#[must_use]
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= MAX_PAGES_TO_SHOW {
        return (1..=total_pages).map(PageLink::Number).collect();
    }

    let mut links = vec![PageLink::Number(1)];

    if current <= 3 {
        links.extend((2..=4).map(PageLink::Number));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Number(total_pages));
    } else if current >= total_pages - 2 {
        links.push(PageLink::Ellipsis);
        links.extend((total_pages - 3..=total_pages).map(PageLink::Number));
    } else {
        links.push(PageLink::Ellipsis);
        links.extend((current - 1..=current + 1).map(PageLink::Number));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Number(total_pages));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::PageLink::{Ellipsis, Number};
    use super::*;

    #[test]
    fn twelve_items_walk_three_pages() {
        let items: Vec<u32> = (1..=12).collect();
        let mut cursor = PageCursor::default();

        let first = paginate(&items, cursor.requested(), 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items, &[1, 2, 3, 4, 5]);

        assert!(cursor.next(first.total_pages));
        assert_eq!(paginate(&items, cursor.requested(), 5).items, &[6, 7, 8, 9, 10]);

        assert!(cursor.next(first.total_pages));
        assert_eq!(paginate(&items, cursor.requested(), 5).items, &[11, 12]);

        assert!(!cursor.next(first.total_pages));
        assert_eq!(cursor.requested(), 3);
    }

    #[test]
    fn empty_input_clamps_to_first_page() {
        let items: Vec<u32> = vec![];
        let page = paginate(&items, 4, 5);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn clamp_and_length_bounds_hold_everywhere() {
        for len in 0..=23usize {
            let items: Vec<usize> = (0..len).collect();
            for size in 1..=6usize {
                for requested in 0..=8usize {
                    let page = paginate(&items, requested, size);
                    let upper = len.div_ceil(size).max(1);
                    assert!((1..=upper).contains(&page.current));
                    assert!(page.items.len() <= size);
                }
            }
        }
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items = [10, 20, 30];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[20]);
    }

    #[test]
    fn go_to_rejects_out_of_range_and_same_page() {
        let mut cursor = PageCursor::default();
        assert!(!cursor.go_to(0, 4));
        assert!(!cursor.go_to(5, 4));
        assert!(!cursor.go_to(1, 4));
        assert!(cursor.go_to(4, 4));
        assert_eq!(cursor.requested(), 4);
    }

    #[test]
    fn previous_stops_at_first_page() {
        let mut cursor = PageCursor::default();
        assert!(!cursor.previous());
        cursor.go_to(2, 3);
        assert!(cursor.previous());
        assert!(!cursor.previous());
        assert_eq!(cursor.requested(), 1);
    }

    #[test]
    fn stale_cursor_is_clamped_on_read_only() {
        let mut cursor = PageCursor::default();
        cursor.go_to(3, 3);

        let narrowed: Vec<u32> = (1..=4).collect();
        let page = paginate(&narrowed, cursor.requested(), 5);
        assert_eq!(page.current, 1);
        assert_eq!(cursor.requested(), 3);
    }

    #[test]
    fn links_list_everything_up_to_seven() {
        assert!(page_links(1, 0).is_empty());
        assert_eq!(page_links(2, 3), vec![Number(1), Number(2), Number(3)]);
        assert_eq!(page_links(7, 7).len(), 7);
    }

    #[test]
    fn links_compact_near_start_and_end() {
        assert_eq!(
            page_links(2, 12),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(12)]
        );
        assert_eq!(
            page_links(11, 12),
            vec![Number(1), Ellipsis, Number(9), Number(10), Number(11), Number(12)]
        );
    }
}
