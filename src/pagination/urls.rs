use anyhow::{Context, Result};
use url::Url;

use crate::errors::url_context;

/// Parse the base address all page links are resolved against
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;
    if base.cannot_be_a_base() {
        anyhow::bail!("Base URL cannot have relative links resolved against it: {}", base_url);
    }
    Ok(base)
}

/// Resolve a page link (relative or absolute) against the base address
pub fn resolve_page_url(base: &Url, link: &str) -> Result<String> {
    base.join(link)
        .map(String::from)
        .with_context(|| url_context(base.as_str(), link))
}
