use serde::Serialize;

/// Something the free-text search can match against.
pub trait Searchable {
    /// `needle` is already lowercased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn matches(&self, needle: &str) -> bool {
        (**self).matches(needle)
    }
}

/// One page of filtered results.
///
/// `page` is 1-based and already clamped; with no matches both `page` and
/// `total_pages` are 0.
#[derive(Debug, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub page_size: usize,
}

impl<T> PageView<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Search term plus page cursor over a list.
#[derive(Debug, Clone)]
pub struct ViewFilter {
    search: String,
    page: usize,
    page_size: usize,
}

impl ViewFilter {
    /// `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// A different term sends the cursor back to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 1;
        }
    }

    /// Stored as requested; clamped when applied.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    /// Every item matching the search term, unpaginated.
    pub fn matching<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return items.iter().collect();
        }
        items.iter().filter(|item| item.matches(&needle)).collect()
    }

    /// Search, then cut out the current page.
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> PageView<&'a T> {
        let matches = self.matching(items);
        let total_matches = matches.len();
        let total_pages = total_matches.div_ceil(self.page_size);

        if total_pages == 0 {
            return PageView {
                items: Vec::new(),
                page: 0,
                total_pages: 0,
                total_matches: 0,
                page_size: self.page_size,
            };
        }

        let page = self.page.clamp(1, total_pages);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(total_matches);

        PageView {
            items: matches[start..end].to_vec(),
            page,
            total_pages,
            total_matches,
            page_size: self.page_size,
        }
    }
}
