mod catalogue_scraper;

pub use catalogue_scraper::CatalogueScraper;
