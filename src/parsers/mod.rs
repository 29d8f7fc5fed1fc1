pub mod catalogue;

pub use catalogue::{CatalogueParser, Listing};
