//! Paginator and page-number window.
//!
//! Slices an ordered collection into one page and derives display metadata.
//! The current page is never clamped here: an out-of-range page produces an
//! empty slice, and keeping the page sane is the caller's job.

use crate::model::PageSize;

/// Maximum number of page links shown before the window collapses with
/// ellipses.
pub const MAX_VISIBLE_PAGES: usize = 5;

// ===== PaginationInfo =====

/// Derived metadata describing the visible page. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// 1-based page number as requested.
    pub current_page: usize,
    /// `ceil(total_items / page_size)`, 0 for an empty collection.
    pub total_pages: usize,
    /// Length of the full (filtered, sorted) collection.
    pub total_items: usize,
    /// Rows per page.
    pub page_size: usize,
    /// 1-based index of the first visible row, for display.
    pub start_index: usize,
    /// 1-based inclusive index of the last visible row, clamped to `total_items`.
    pub end_index: usize,
}

impl PaginationInfo {
    /// A previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// A following page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Number of rows on the visible page.
    pub fn visible_len(&self) -> usize {
        (self.end_index + 1).saturating_sub(self.start_index)
    }

    /// `"<start> to <end> of <total> items"`.
    pub fn summary(&self) -> String {
        format!(
            "{} to {} of {} items",
            self.start_index, self.end_index, self.total_items
        )
    }
}

// ===== Paginate =====

/// One page of an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows on this page, in collection order.
    pub items: &'a [T],
    /// Position of this page within the collection.
    pub info: PaginationInfo,
}

/// Slice `items` to the requested 1-based page.
///
/// Page 0 lies before the first page: it yields an empty slice reported as
/// `1 to 0`, like any other out-of-range page.
pub fn paginate<T>(items: &[T], current_page: usize, page_size: PageSize) -> Page<'_, T> {
    let size = page_size.get();
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);

    let (start, end) = match current_page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(size);
            (start, start.saturating_add(size).min(total_items))
        }
        None => (0, 0),
    };

    let slice = if start < end { &items[start..end] } else { &[] };

    Page {
        items: slice,
        info: PaginationInfo {
            current_page,
            total_pages,
            total_items,
            page_size: size,
            start_index: start.saturating_add(1),
            end_index: end,
        },
    }
}

// ===== Page-number window =====

/// One entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// Link to a concrete 1-based page.
    Page(usize),
    /// Collapsed run of pages.
    Ellipsis,
}

/// Page links to display for `current_page` out of `total_pages`.
///
/// Up to five pages are listed directly. Beyond that, first and last pages
/// stay visible as anchors and a window follows the current page:
/// - near the start: `1 2 3 4 … N`
/// - near the end: `1 … N-3 N-2 N-1 N`
/// - elsewhere: `1 … c-1 c c+1 … N`
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let mut links = Vec::with_capacity(7);

    if current_page <= 3 {
        links.extend((1..=4).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total_pages - 3..=total_pages).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current_page - 1..=current_page + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    }

    links
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
