use super::config::PaginationConfig;

/// The current page address, or `None` once pagination is exhausted
pub struct PageCursor {
    current_url: Option<String>,
    page_number: usize,
    config: PaginationConfig,
}

impl PageCursor {
    pub fn new(start_url: String, config: PaginationConfig) -> Self {
        Self {
            current_url: Some(start_url),
            page_number: 1,
            config,
        }
    }

    /// Address to fetch next, unless exhausted or past the page limit
    pub fn current(&self) -> Option<&str> {
        if self.has_reached_max() {
            return None;
        }
        self.current_url.as_deref()
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Move to the next page; `None` ends pagination
    pub fn advance(&mut self, next_url: Option<String>) {
        self.current_url = next_url;
        self.page_number += 1;
    }

    fn has_reached_max(&self) -> bool {
        self.config.max_pages.is_some_and(|max| self.page_number > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_links_until_absent() {
        let mut cursor = PageCursor::new("a".to_string(), PaginationConfig::new());
        assert_eq!(cursor.current(), Some("a"));
        assert_eq!(cursor.page_number(), 1);

        cursor.advance(Some("b".to_string()));
        assert_eq!(cursor.current(), Some("b"));
        assert_eq!(cursor.page_number(), 2);

        cursor.advance(None);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_cursor_respects_max_pages() {
        let config = PaginationConfig::new().with_max_pages(2);
        let mut cursor = PageCursor::new("a".to_string(), config);

        cursor.advance(Some("b".to_string()));
        assert_eq!(cursor.current(), Some("b"));

        cursor.advance(Some("c".to_string()));
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_zero_max_pages_fetches_nothing() {
        let cursor = PageCursor::new("a".to_string(), PaginationConfig::from_limit(Some(0)));
        assert_eq!(cursor.current(), None);
    }
}
