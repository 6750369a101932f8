#![forbid(unsafe_code)]

use super::{PageView, Projectable, Selector, SortKey, ViewQuery, clamp_page, paginate, project, total_pages};

/// Transient filter/sort/page state of one list view. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    query: ViewQuery,
    page: usize,
    page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: ViewQuery::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.page = 1;
    }

    pub fn set_selector(&mut self, selector: Selector) {
        self.query.selector = selector;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.page = 1;
    }

    /// Moves to `page`, clamped against the current filtered count.
    pub fn go_to<T: Projectable>(&mut self, items: &[T], page: usize) -> usize {
        let filtered = project(items, &self.query).len();
        self.page = clamp_page(page, total_pages(filtered, self.page_size));
        self.page
    }

    pub fn next_page<T: Projectable>(&mut self, items: &[T]) -> bool {
        let before = self.page;
        self.go_to(items, before.saturating_add(1)) != before
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Projects `items` and slices the current page. The stored page is
    /// re-clamped so a shrinking store never leaves the view past its end.
    pub fn render<'a, T: Projectable>(&mut self, items: &'a [T]) -> PageView<&'a T> {
        let view = paginate(project(items, &self.query), self.page, self.page_size);
        self.page = view.page;
        view
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(super::DEFAULT_PAGE_SIZE)
    }
}
