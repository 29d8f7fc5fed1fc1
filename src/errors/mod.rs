use std::path::Path;

use anyhow::Context as _;

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch page: {}", url)
}

/// Add context to URL resolution errors
pub fn url_context(base: &str, link: &str) -> String {
    format!("Failed to resolve link '{}' against '{}'", link, base)
}

/// Add context to output errors
pub fn write_context(path: &Path) -> String {
    format!("Failed to write output file: {}", path.display())
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| fetch_context(url))
}

/// Wrap result with output context
pub fn with_write_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| write_context(path))
}
