use anyhow::Result;
use log::{error, info};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::domain::ScrapeSummary;
use crate::export::save_to_csv;
use crate::fetchers::CatalogueScraper;

/// How a scraping run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Saved { path: PathBuf, books: usize },
    NothingCollected,
    WriteFailed { path: PathBuf },
}

pub struct ScrapingService {
    scraper: CatalogueScraper,
    output_file: PathBuf,
}

impl ScrapingService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            scraper: CatalogueScraper::new(&config.scraper)?,
            output_file: config.output.file,
        })
    }

    pub async fn run(&mut self) -> RunOutcome {
        info!("=== Starting Catalogue Scrape ===");

        let summary = self.scraper.scrape_all().await;
        let outcome = self.save(&summary);

        info!("=== Scrape Complete ===");
        outcome
    }

    fn save(&self, summary: &ScrapeSummary) -> RunOutcome {
        if summary.is_empty() {
            info!("Scraping finished, but no data was collected.");
            return RunOutcome::NothingCollected;
        }

        self.write_output(summary, &self.output_file)
    }

    fn write_output(&self, summary: &ScrapeSummary, path: &Path) -> RunOutcome {
        match save_to_csv(&summary.books, path) {
            Ok(()) => {
                info!(
                    "Successfully saved {} books to '{}'.",
                    summary.len(),
                    path.display()
                );
                RunOutcome::Saved {
                    path: path.to_path_buf(),
                    books: summary.len(),
                }
            }
            Err(e) => {
                error!("Error writing to file '{}': {:#}", path.display(), e);
                RunOutcome::WriteFailed {
                    path: path.to_path_buf(),
                }
            }
        }
    }
}
