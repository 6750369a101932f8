#![forbid(unsafe_code)]

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// `max(1, ceil(total_items / page_size))`; a zero page size counts as one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Position of `items[0]` inside the filtered sequence.
    pub offset: usize,
}

impl<T> PageView<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageView<U> {
        PageView {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            offset: self.offset,
        }
    }
}

/// Slices one page out of an already filtered and sorted sequence.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> PageView<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = clamp_page(page, total_pages);
    let offset = (page - 1) * page_size;
    let items = items
        .into_iter()
        .skip(offset)
        .take(page_size)
        .collect::<Vec<_>>();
    PageView {
        items,
        page,
        total_pages,
        total_items,
        offset,
    }
}
