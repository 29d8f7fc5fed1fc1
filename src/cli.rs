use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::config::settings::{
    DEFAULT_BASE_URL, DEFAULT_OUTPUT_FILE, DEFAULT_RATE_LIMIT_MS, DEFAULT_START_PAGE,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape the books.toscrape.com catalogue into a CSV file")]
pub struct Cli {
    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Catalogue base URL that page links are resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// First page, relative to the base URL
    #[arg(long, default_value = DEFAULT_START_PAGE)]
    pub start_page: String,

    /// Pause between page requests, in milliseconds
    #[arg(long, default_value_t = DEFAULT_RATE_LIMIT_MS)]
    pub delay_ms: u64,

    /// Stop after this many pages (defaults to following every "next" link)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Per-request timeout in seconds (defaults to none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        let mut config = AppConfig::new();
        config.scraper.base_url = self.base_url;
        config.scraper.start_page = self.start_page;
        config.scraper.rate_limit_ms = self.delay_ms;
        config.scraper.max_pages = self.max_pages;
        config.scraper.timeout_secs = self.timeout_secs;
        config.output.file = self.output;
        config
    }
}
