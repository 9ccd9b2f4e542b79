//! OCR subsystem: preprocessing variants plus a tesseract subprocess
//! adapter.
//!
//! The adapter is constructed from an injected [`crate::config::OcrConfig`]
//! and resolves its engine binary exactly once. It never raises: a missing
//! engine or empty recognition result degrades to a sentinel diagnostic
//! string that flows through the pipeline as ordinary text.

pub mod engine;
pub mod error;
pub mod preprocess;

pub use engine::{ENGINE_MISSING_TEXT, NO_TEXT_DETECTED, TesseractOcr, resolve_engine_binary};
pub use error::OcrError;
pub use preprocess::preprocess_variants;
