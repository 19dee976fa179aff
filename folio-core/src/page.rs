//! Paginator — page slicing and the page-number window rule.
//!
//! Pages are 1-based. The slice contract is pure and total: an out-of-range
//! page yields an empty slice, never an error. The window rule keeps the
//! label row short when there are many pages, with ellipsis markers that are
//! display-only and never navigable.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Entries rendered per page.
pub const PAGE_SIZE: usize = 10;

/// Show every page number up to this many pages; window beyond it.
const MAX_VISIBLE: usize = 7;

/// Total pages for display: `ceil(n / size)`, with an empty list still
/// occupying one (empty) page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Zero-based index range of page `page` over `total_items` elements,
/// clamped to the available range.
pub fn page_bounds(total_items: usize, page_size: usize, page: usize) -> Range<usize> {
    if page == 0 || page_size == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// The elements of `items` on page `page`.
pub fn page_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    &items[page_bounds(items.len(), page_size, page)]
}

/// One cell in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Page-number labels to display for `total` pages with `current` selected.
///
/// - up to 7 pages: all of them;
/// - near the front (`current <= 3`): `1 2 3 4 5 … total`;
/// - near the back (`current >= total - 2`): `1 … last five`;
/// - otherwise: `1 … current-1 current current+1 … total`.
pub fn page_labels(total: usize, current: usize) -> Vec<PageLabel> {
    use PageLabel::{Ellipsis, Page};

    if total <= MAX_VISIBLE {
        return (1..=total).map(Page).collect();
    }

    let mut labels = Vec::with_capacity(MAX_VISIBLE + 2);
    if current <= 3 {
        labels.extend((1..=5).map(Page));
        labels.push(Ellipsis);
        labels.push(Page(total));
    } else if current >= total - 2 {
        labels.push(Page(1));
        labels.push(Ellipsis);
        labels.extend((total - 4..=total).map(Page));
    } else {
        labels.push(Page(1));
        labels.push(Ellipsis);
        labels.extend((current - 1..=current + 1).map(Page));
        labels.push(Ellipsis);
        labels.push(Page(total));
    }
    labels
}

/// Everything a view needs to render the pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub labels: Vec<PageLabel>,
}

impl Pagination {
    pub fn compute(total_items: usize, page_size: usize, current: usize) -> Self {
        let total = total_pages(total_items, page_size);
        Self {
            current,
            total_pages: total,
            has_prev: current > 1,
            has_next: current < total,
            labels: page_labels(total, current.clamp(1, total)),
        }
    }

    /// The control is omitted entirely when there is at most one page.
    pub fn should_render(&self) -> bool {
        self.total_pages > 1
    }
}

/// Current page of the list view. Always within `[1, max(1, total_pages)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl PageState {
    pub fn current(&self) -> usize {
        self.current
    }

    /// Back to page 1 (every filter change does this).
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Re-establish the invariant after the filtered total changed.
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.current = self.current.clamp(1, total_pages.max(1));
    }

    /// Jump to an arbitrary page, clamped into range.
    pub fn goto(&mut self, page: usize, total_pages: usize) {
        self.current = page.clamp(1, total_pages.max(1));
    }

    /// Advance one page; no-op at the last page.
    pub fn next(&mut self, total_pages: usize) {
        if self.current < total_pages {
            self.current += 1;
        }
    }

    /// Go back one page; no-op at page 1.
    pub fn prev(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }
}
