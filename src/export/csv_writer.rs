use anyhow::Result;
use std::path::Path;

use crate::domain::Book;
use crate::errors::with_write_context;

/// Write books as CSV with a `title,price,rating` header row.
///
/// The header is derived from the field names of the first record. The file
/// is created or truncated in place.
pub fn save_to_csv(books: &[Book], path: &Path) -> Result<()> {
    let mut writer = with_write_context(csv::Writer::from_path(path), path)?;

    for book in books {
        with_write_context(writer.serialize(book), path)?;
    }

    with_write_context(writer.flush(), path)
}
