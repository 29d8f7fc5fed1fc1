pub mod scraping;

pub use scraping::{RunOutcome, ScrapingService};
