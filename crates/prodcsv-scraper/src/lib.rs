pub mod client;
pub mod error;
pub mod parse;

pub use client::CatalogClient;
pub use error::ScraperError;
pub use parse::{coerce_float, decode_locale, extract_attributes, parse_catalog};
