pub mod models;

pub use models::{Book, Rating, ScrapeSummary, ScrapedPage};
