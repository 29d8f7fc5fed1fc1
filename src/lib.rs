pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod fetchers;
pub mod http;
pub mod pagination;
pub mod parsers;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::config::AppConfig;
use crate::services::{RunOutcome, ScrapingService};

pub fn interpret() -> AppConfig {
    let cli = Cli::parse();
    cli.into_config()
}

pub fn handle_scrape(config: AppConfig) -> Result<RunOutcome> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(async {
        let mut service = ScrapingService::new(config)?;
        Ok(service.run().await)
    })
}
