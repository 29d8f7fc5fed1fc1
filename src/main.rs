use anyhow::Result;

use catalogue_scraper::{handle_scrape, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let config = interpret();
    handle_scrape(config)?;
    Ok(())
}
