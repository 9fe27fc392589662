/// Current page of the ticket list.
///
/// Plain value type: every navigation produces a new state that the caller
/// stores and hands to the next fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PaginationState {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Jump to a page. Pages are 1-based; 0 is clamped to 1.
    pub fn navigate(self, page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// The next page. There is no upper bound; the backend answers pages
    /// past the end with an empty list.
    pub fn next(self) -> Self {
        self.navigate(self.page.saturating_add(1))
    }

    /// The previous page, `None` on the first page.
    pub fn previous(self) -> Option<Self> {
        self.has_previous().then(|| self.navigate(self.page - 1))
    }

    /// Whether the "Previous" control is enabled.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
