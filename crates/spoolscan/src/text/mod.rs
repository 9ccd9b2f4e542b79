//! Text pattern matching over OCR, catalog and search-result text.

pub mod patterns;
pub mod vocab;

pub use patterns::{parse_label_text, parse_product_text};
