/// Configuration for following "next" links
#[derive(Debug, Clone, Default)]
pub struct PaginationConfig {
    pub max_pages: Option<usize>,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self { max_pages: None }
    }

    pub fn with_max_pages(mut self, max: usize) -> Self {
        self.max_pages = Some(max);
        self
    }

    pub fn from_limit(max_pages: Option<usize>) -> Self {
        match max_pages {
            Some(max) => Self::new().with_max_pages(max),
            None => Self::new(),
        }
    }
}
