use anyhow::{Result, anyhow};
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use crate::domain::{Book, Rating};

const ITEM_SELECTOR: &str = "article.product_pod";
const TITLE_SELECTOR: &str = "h3 a";
const PRICE_SELECTOR: &str = "p.price_color";
const RATING_SELECTOR: &str = "p.star-rating";
const RATING_CLASS: &str = "star-rating";
const NEXT_LINK_SELECTOR: &str = "li.next a";

/// Books and the raw "next" href found on one listing page
#[derive(Debug)]
pub struct Listing {
    pub books: Vec<Book>,
    pub next_link: Option<String>,
}

/// Extracts catalogue entries from listing markup
pub struct CatalogueParser {
    item: Selector,
    title: Selector,
    price: Selector,
    rating: Selector,
    next_link: Selector,
}

impl CatalogueParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            item: Self::compile(ITEM_SELECTOR)?,
            title: Self::compile(TITLE_SELECTOR)?,
            price: Self::compile(PRICE_SELECTOR)?,
            rating: Self::compile(RATING_SELECTOR)?,
            next_link: Self::compile(NEXT_LINK_SELECTOR)?,
        })
    }

    pub fn parse(&self, html: &Html) -> Listing {
        Listing {
            books: self.extract_books(html),
            next_link: self.extract_next_link(html),
        }
    }

    // --- Construction Helpers ---

    fn compile(css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| anyhow!("Invalid selector '{}': {}", css, e))
    }

    // --- Item Extraction ---

    fn extract_books(&self, html: &Html) -> Vec<Book> {
        let books: Vec<Book> = html
            .select(&self.item)
            .map(|item| self.extract_book(item))
            .collect();

        debug!("Extracted {} books from page", books.len());
        books
    }

    fn extract_book(&self, item: ElementRef) -> Book {
        let title = self.extract_title(item).unwrap_or_else(|| {
            warn!("Book entry without a title link, using empty title");
            String::new()
        });
        let price = self.extract_price(item).unwrap_or_else(|| {
            warn!("Book '{}' has no price element, using empty price", title);
            String::new()
        });
        let rating = Rating::from_token(self.extract_rating_token(item));

        Book::new(title, price, rating)
    }

    /// Title comes from the link's title attribute; the visible text is truncated
    fn extract_title(&self, item: ElementRef) -> Option<String> {
        let link = item.select(&self.title).next()?;
        link.value().attr("title").map(str::to_string)
    }

    fn extract_price(&self, item: ElementRef) -> Option<String> {
        let element = item.select(&self.price).next()?;
        let text = element.text().collect::<String>();
        Some(text.trim().to_string())
    }

    /// The rating is the class token next to "star-rating", e.g. `star-rating Three`
    fn extract_rating_token<'a>(&self, item: ElementRef<'a>) -> Option<&'a str> {
        let element = item.select(&self.rating).next()?;
        element.value().classes().find(|class| *class != RATING_CLASS)
    }

    // --- Pagination ---

    fn extract_next_link(&self, html: &Html) -> Option<String> {
        html.select(&self.next_link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string)
    }
}
