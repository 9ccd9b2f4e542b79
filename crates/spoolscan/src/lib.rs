//! Spool label intelligence for 3D-printer filament.
//!
//! `spoolscan` turns a photograph of a filament spool label into a
//! structured [`FilamentRecord`]: brand, material, color, weight, print
//! temperature, vendor filament code and the scanned barcode. It combines
//! four extraction sources, each filling only the fields the previous
//! ones left empty:
//!
//! 1. barcode decoding (retail symbologies and QR tags),
//! 2. OCR over preprocessed variants of the photo,
//! 3. a barcode-to-product catalog lookup,
//! 4. a web search fallback keyed on the filament code.
//!
//! ```no_run
//! use spoolscan::{ScanConfig, Scanner};
//!
//! # async fn run() -> spoolscan::Result<()> {
//! let scanner = Scanner::new(&ScanConfig::default())?;
//! let record = scanner.scan_file("spool.jpg").await?;
//! println!("{} {}", record.brand.as_deref().unwrap_or("?"), record.diameter_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! The text matcher is usable on its own for already-extracted text:
//!
//! ```
//! let record = spoolscan::parse_label_text("eSun PLA+ Black 1.75mm 1kg");
//! assert_eq!(record.material.as_deref(), Some("PLA+"));
//! assert_eq!(record.weight_g, Some(1000));
//! ```

#![deny(unsafe_code)]

pub mod barcode;
pub mod config;
pub mod error;
pub mod lookup;
pub mod ocr;
pub mod scanner;
pub mod text;
pub mod types;

pub use barcode::{DecodedBarcode, Symbology, decode_barcode};
pub use config::{CatalogConfig, OcrConfig, ScanConfig, SearchConfig};
pub use error::{Result, SpoolscanError};
pub use lookup::{CodeSearch, ProductCatalog, ProductHit};
pub use ocr::{NO_TEXT_DETECTED, TesseractOcr};
pub use scanner::Scanner;
pub use text::{parse_label_text, parse_product_text};
pub use types::{DEFAULT_DIAMETER_MM, FilamentRecord};
