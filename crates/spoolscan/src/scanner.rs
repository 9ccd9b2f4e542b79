//! Extraction orchestrator.
//!
//! Composes the barcode decoder, OCR adapter, pattern matcher and the two
//! network lookups into one scan: image in, best-effort record out. Later
//! stages only fill gaps left by earlier ones; the single fatal condition
//! is an unreadable input image.

use crate::barcode::{DecodedBarcode, Symbology, decode_barcode};
use crate::config::ScanConfig;
use crate::error::{Result, SpoolscanError};
use crate::lookup::{
    CodeSearch, DisabledCatalog, DisabledSearch, DuckDuckGoSearch, ProductCatalog, UpcItemDb, accumulate_titles,
    fallback_query, product_record,
};
use crate::ocr::TesseractOcr;
use crate::text::parse_label_text;
use crate::types::{DEFAULT_DIAMETER_MM, FilamentRecord};
use image::DynamicImage;
use std::path::Path;

/// Marker inside a QR payload identifying a Bambu Lab spool tag.
const BAMBU_QR_MARKER: &str = "bambulab";

/// One-shot scan pipeline. Stateless across calls; a single instance can
/// serve concurrent scans from multiple tasks.
pub struct Scanner {
    ocr: TesseractOcr,
    catalog: Box<dyn ProductCatalog>,
    search: Box<dyn CodeSearch>,
}

impl Scanner {
    /// Build a scanner with the default collaborators: tesseract OCR,
    /// UPCitemdb catalog and DuckDuckGo search.
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            ocr: TesseractOcr::new(&config.ocr),
            catalog: Box::new(UpcItemDb::new(&config.catalog)?),
            search: Box::new(DuckDuckGoSearch::new(&config.search)?),
        })
    }

    /// Build a scanner with both network lookups disabled.
    pub fn offline(config: &ScanConfig) -> Self {
        Self {
            ocr: TesseractOcr::new(&config.ocr),
            catalog: Box::new(DisabledCatalog),
            search: Box::new(DisabledSearch),
        }
    }

    /// Build a scanner from explicit collaborators.
    pub fn with_collaborators(
        ocr: TesseractOcr,
        catalog: Box<dyn ProductCatalog>,
        search: Box<dyn CodeSearch>,
    ) -> Self {
        Self { ocr, catalog, search }
    }

    /// Scan a label photograph from disk.
    ///
    /// Failing to read or decode the image is the one fatal condition;
    /// everything downstream degrades to an incomplete record.
    pub async fn scan_file(&self, path: impl AsRef<Path>) -> Result<FilamentRecord> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| {
            SpoolscanError::image_with_source(format!("failed to read image '{}'", path.display()), e)
        })?;
        Ok(self.scan_image(&image).await)
    }

    /// Scan an already-decoded image.
    pub async fn scan_image(&self, image: &DynamicImage) -> FilamentRecord {
        let barcode = decode_barcode(image);

        let mut record = FilamentRecord::default();
        if let Some(decoded) = &barcode {
            seed_from_barcode(&mut record, decoded);
        }

        let raw_text = self.ocr.extract_text(image).await;
        record.merge_missing(&parse_label_text(&raw_text));

        self.enrich(&mut record, barcode.as_ref()).await;

        if record.diameter.is_none() {
            record.diameter = Some(DEFAULT_DIAMETER_MM);
        }
        record.raw_text = raw_text;
        record
    }

    /// Run the conditional network enrichment steps, merging additively.
    async fn enrich(&self, record: &mut FilamentRecord, barcode: Option<&DecodedBarcode>) {
        if let Some(decoded) = barcode.filter(|b| b.symbology.is_retail()) {
            match self.catalog.lookup(&decoded.payload).await {
                Ok(Some(hit)) => record.merge_missing(&product_record(&hit)),
                Ok(None) => tracing::debug!(payload = %decoded.payload, "catalog had no product"),
                Err(err) => tracing::warn!(error = %err, "product catalog lookup failed"),
            }
        }

        let Some(code) = record.filament_code.clone() else {
            return;
        };
        if record.has_key_fields() {
            return;
        }

        match self.search.result_titles(&fallback_query(&code)).await {
            Ok(titles) => record.merge_missing(&accumulate_titles(&titles)),
            Err(err) => tracing::warn!(error = %err, "web search fallback failed"),
        }
    }
}

/// Seed a fresh record from the decoded barcode before OCR runs, so the
/// barcode-derived fields take precedence over anything parsed from text.
fn seed_from_barcode(record: &mut FilamentRecord, decoded: &DecodedBarcode) {
    record.barcode = Some(decoded.payload.clone());
    record.barcode_type = Some(decoded.symbology.to_string());

    if decoded.symbology.is_retail() {
        record.filament_code = Some(decoded.payload.clone());
    }

    if decoded.symbology == Symbology::QrCode && decoded.payload.to_lowercase().contains(BAMBU_QR_MARKER) {
        record.brand = Some("Bambu Lab".to_string());
    }
}
