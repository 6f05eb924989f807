/// Grid size of the routed list view.
pub const DEFAULT_PAGE_SIZE: usize = 18;

/// 1-indexed page arithmetic over a collection of known length.
///
/// Both directions wrap: next past the last page lands on page 1, prev from
/// page 1 lands on the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pager {
    /// A zero page size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Collection index of the first item on `page`. Saturates for pages
    /// far past the end.
    pub fn offset(&self, page: usize) -> usize {
        (page.max(1) - 1).saturating_mul(self.page_size)
    }

    /// Items shown on `page`. Pages past the end are empty.
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let first = self.offset(page);
        if first >= items.len() {
            return &[];
        }
        let last = first.saturating_add(self.page_size).min(items.len());
        &items[first..last]
    }

    pub fn next(&self, page: usize, len: usize) -> usize {
        if page < self.page_count(len) {
            page + 1
        } else {
            1
        }
    }

    pub fn prev(&self, page: usize, len: usize) -> usize {
        if page <= 1 {
            self.page_count(len).max(1)
        } else {
            page - 1
        }
    }
}
