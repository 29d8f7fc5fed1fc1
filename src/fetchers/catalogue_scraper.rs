use anyhow::Result;
use log::{error, info, warn};
use scraper::Html;
use url::Url;

use crate::config::ScraperSettings;
use crate::domain::{ScrapeSummary, ScrapedPage};
use crate::http::PoliteClient;
use crate::pagination::{PageCursor, PaginationConfig, parse_base_url, resolve_page_url};
use crate::parsers::{CatalogueParser, Listing};

/// Web scraper that walks the paginated book catalogue
pub struct CatalogueScraper {
    client: PoliteClient,
    parser: CatalogueParser,
    base_url: Url,
    start_url: String,
    pagination: PaginationConfig,
}

impl CatalogueScraper {
    /// Create a new catalogue scraper
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = PoliteClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        let base_url = parse_base_url(&settings.base_url)?;
        let start_url = resolve_page_url(&base_url, &settings.start_page)?;

        Ok(Self {
            client,
            parser: CatalogueParser::new()?,
            base_url,
            start_url,
            pagination: PaginationConfig::from_limit(settings.max_pages),
        })
    }

    /// Follow "next" links from the start page and collect every book
    pub async fn scrape_all(&mut self) -> ScrapeSummary {
        let mut cursor = PageCursor::new(self.start_url.clone(), self.pagination.clone());
        let mut summary = ScrapeSummary::default();

        while let Some(url) = cursor.current().map(str::to_string) {
            info!("Scraping page {}: {}", cursor.page_number(), url);

            let page = self.scrape_page(&url).await;
            summary.books.extend(page.books);
            summary.pages_scraped += 1;

            cursor.advance(page.next_url);
        }

        info!(
            "  → Collected {} books across {} pages",
            summary.len(),
            summary.pages_scraped
        );
        summary
    }

    /// Fetch one page and extract its books and the next page address.
    ///
    /// A failed fetch is logged and yields an empty, terminal page, so
    /// pagination stops at the first page that cannot be retrieved.
    pub async fn scrape_page(&mut self, url: &str) -> ScrapedPage {
        let body = match self.client.get_text(url).await {
            Ok(body) => body,
            Err(e) => {
                error!("Error fetching the page {}: {:#}", url, e);
                return ScrapedPage::terminal();
            }
        };

        let listing = self.parse_listing(&body);
        ScrapedPage {
            books: listing.books,
            next_url: self.resolve_next_url(listing.next_link),
        }
    }

    // --- Parsing ---

    fn parse_listing(&self, body: &str) -> Listing {
        let html = Html::parse_document(body);
        self.parser.parse(&html)
    }

    // --- Pagination Logic ---

    fn resolve_next_url(&self, next_link: Option<String>) -> Option<String> {
        let link = next_link?;
        match resolve_page_url(&self.base_url, &link) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Ignoring next link: {:#}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper() -> CatalogueScraper {
        let settings = ScraperSettings {
            rate_limit_ms: 0,
            timeout_secs: Some(5),
            ..ScraperSettings::default()
        };
        CatalogueScraper::new(&settings).unwrap()
    }

    #[test]
    fn test_start_url_is_first_catalogue_page() {
        assert_eq!(
            scraper().start_url,
            "http://books.toscrape.com/catalogue/page-1.html"
        );
    }

    #[test]
    fn test_next_link_resolves_against_base() {
        let scraper = scraper();
        assert_eq!(
            scraper.resolve_next_url(Some("page-2.html".to_string())).as_deref(),
            Some("http://books.toscrape.com/catalogue/page-2.html")
        );
        assert_eq!(scraper.resolve_next_url(None), None);
    }

    #[test]
    fn test_invalid_base_url_fails_construction() {
        let settings = ScraperSettings {
            base_url: "books.toscrape.com".to_string(),
            ..ScraperSettings::default()
        };
        assert!(CatalogueScraper::new(&settings).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_page_is_terminal() {
        let mut scraper = scraper();
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let page = scraper.scrape_page("http://127.0.0.1:9/page-1.html").await;
        assert_eq!(page, ScrapedPage::terminal());
    }
}
