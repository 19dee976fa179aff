//! List view state — criteria and page wired into one pipeline.
//!
//! Any criteria change resets the page to 1; navigation is clamped to the
//! filtered total, so the page invariant holds no matter how the underlying
//! list shrinks between refetches.

use serde::{Deserialize, Serialize};

use crate::domain::PortfolioEntry;
use crate::filter::{filter_entries, FilterCriteria};
use crate::page::{PageState, Pagination, PAGE_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListView {
    pub criteria: FilterCriteria,
    page: PageState,
    page_size: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: PageState::default(),
            page_size: PAGE_SIZE,
        }
    }
}

/// One rendered page: the visible entries plus the control summary.
#[derive(Debug)]
pub struct PageView<'a> {
    pub entries: Vec<&'a PortfolioEntry>,
    pub filtered_total: usize,
    pub pagination: Pagination,
}

impl ListView {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn current_page(&self) -> usize {
        self.page.current()
    }

    pub fn set_keyword(&mut self, value: impl Into<String>) {
        self.criteria.keyword = value.into();
        self.page.reset();
    }

    pub fn set_industry(&mut self, value: impl Into<String>) {
        self.criteria.industry = value.into();
        self.page.reset();
    }

    pub fn set_experience(&mut self, value: impl Into<String>) {
        self.criteria.experience = value.into();
        self.page.reset();
    }

    pub fn set_color(&mut self, value: impl Into<String>) {
        self.criteria.color = value.into();
        self.page.reset();
    }

    /// Page navigation against the current filtered total. The caller's
    /// scroll-to-top (or equivalent) side effect happens outside this type.
    pub fn goto_page(&mut self, page: usize, entries: &[PortfolioEntry]) {
        let total = self.filtered_pages(entries);
        self.page.goto(page, total);
    }

    pub fn next_page(&mut self, entries: &[PortfolioEntry]) {
        let total = self.filtered_pages(entries);
        self.page.next(total);
    }

    pub fn prev_page(&mut self) {
        self.page.prev();
    }

    /// Run filter → paginate and hand back the visible page.
    pub fn select<'a>(&self, entries: &'a [PortfolioEntry]) -> PageView<'a> {
        let filtered = filter_entries(entries, &self.criteria);
        let pagination = Pagination::compute(filtered.len(), self.page_size, self.page.current());
        let range = crate::page::page_bounds(filtered.len(), self.page_size, self.page.current());
        PageView {
            filtered_total: filtered.len(),
            entries: filtered[range].to_vec(),
            pagination,
        }
    }

    fn filtered_pages(&self, entries: &[PortfolioEntry]) -> usize {
        let filtered = filter_entries(entries, &self.criteria);
        crate::page::total_pages(filtered.len(), self.page_size)
    }
}
