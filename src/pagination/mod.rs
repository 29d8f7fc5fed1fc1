mod config;
mod cursor;
mod urls;

pub use config::PaginationConfig;
pub use cursor::PageCursor;
pub use urls::{parse_base_url, resolve_page_url};
