use std::ops::Range;

/// Page numbers shown at once
pub const PAGE_WINDOW: usize = 5;

/// 1-based paging over a list whose length can change underneath it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    /// `page_size` of zero is treated as one
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Recompute after the underlying list changed; an out-of-range page
    /// falls back to the first
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        if self.current_page > self.total_pages() {
            self.current_page = 1;
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Returns false and stays put when `page` is out of range
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.current_page > 1 && self.go_to(self.current_page - 1)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Index range of the current page within the list
    pub fn item_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Up to [`PAGE_WINDOW`] page numbers around the current page
    pub fn page_numbers(&self) -> Vec<usize> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }

        let mut start = self.current_page.saturating_sub(2).max(1);
        let end = (start + PAGE_WINDOW - 1).min(total);
        if end - start < PAGE_WINDOW - 1 {
            start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
        }

        (start..=end).collect()
    }
}
