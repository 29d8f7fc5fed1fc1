use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://books.toscrape.com/catalogue/";
pub const DEFAULT_START_PAGE: &str = "page-1.html";
pub const DEFAULT_OUTPUT_FILE: &str = "scraped_books.csv";
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1000;

pub struct ScraperSettings {
    /// Base every page link is resolved against; must end with '/'
    pub base_url: String,
    pub start_page: String,
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    /// Overall request timeout; `None` leaves reqwest's default in place
    pub timeout_secs: Option<u64>,
    pub max_pages: Option<usize>,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            start_page: DEFAULT_START_PAGE.to_string(),
            rate_limit_ms: DEFAULT_RATE_LIMIT_MS, // 1 req/sec
            user_agent: "CatalogueScraper/1.0",
            timeout_secs: None,
            max_pages: None,
        }
    }
}

pub struct OutputSettings {
    pub file: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

#[derive(Default)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub output: OutputSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
