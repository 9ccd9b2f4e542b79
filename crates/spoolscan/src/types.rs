//! Core data types shared across the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Default filament diameter in millimeters, used when the label does not
/// state one explicitly.
pub const DEFAULT_DIAMETER_MM: f64 = 1.75;

/// A best-effort structured description of one filament spool.
///
/// The record is the pipeline's accumulator: it starts empty, each stage
/// fills gaps via [`FilamentRecord::merge_missing`], and the caller receives
/// the final state. No partial record ever survives between scan requests.
///
/// All fields except `raw_text` are optional; a missing field means no
/// source produced a confident value and the user is expected to fill it in
/// manually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilamentRecord {
    /// Manufacturer, normalized to canonical casing from a closed vocabulary.
    pub brand: Option<String>,
    /// Base polymer code, uppercased, optionally suffixed with a subtype
    /// descriptor ("PETG Translucent").
    pub material: Option<String>,
    /// Color name from the fixed dictionary, paired with `color_hex`.
    pub color_name: Option<String>,
    /// Hex value paired with `color_name`.
    pub color_hex: Option<String>,
    /// Net weight in grams, unit-normalized.
    pub weight_g: Option<u32>,
    /// Filament diameter in millimeters. Left `None` through the merge steps
    /// so enrichment stays additive; the orchestrator fills the 1.75 default
    /// at the end of the pipeline.
    pub diameter: Option<f64>,
    /// Nozzle temperature range as "low-high" in degrees Celsius.
    pub temp_nozzle: Option<String>,
    /// Vendor SKU/reference code, or a scanned retail barcode payload.
    pub filament_code: Option<String>,
    /// Raw decoded barcode payload, if any.
    pub barcode: Option<String>,
    /// Symbology tag of the decoded barcode ("EAN13", "QRCODE", ...).
    pub barcode_type: Option<String>,
    /// Product title from the barcode catalog lookup, kept for display.
    pub product_title: Option<String>,
    /// Full OCR text blob, always retained for debugging. Never merged over.
    #[serde(default)]
    pub raw_text: String,
}

fn fill<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
    if dst.is_none() && src.is_some() {
        *dst = src.clone();
    }
}

impl FilamentRecord {
    /// Additive merge: fill only currently-empty fields from `other`.
    ///
    /// An already-populated field is never overwritten, so earlier pipeline
    /// stages always take precedence over later ones. `raw_text` is owned by
    /// the orchestrator and is not touched here.
    pub fn merge_missing(&mut self, other: &FilamentRecord) {
        fill(&mut self.brand, &other.brand);
        fill(&mut self.material, &other.material);
        fill(&mut self.color_name, &other.color_name);
        fill(&mut self.color_hex, &other.color_hex);
        fill(&mut self.weight_g, &other.weight_g);
        fill(&mut self.diameter, &other.diameter);
        fill(&mut self.temp_nozzle, &other.temp_nozzle);
        fill(&mut self.filament_code, &other.filament_code);
        fill(&mut self.barcode, &other.barcode);
        fill(&mut self.barcode_type, &other.barcode_type);
        fill(&mut self.product_title, &other.product_title);
    }

    /// True when brand, material and color name are all populated.
    ///
    /// This is the completeness test that gates the web-search fallback and
    /// its early exit.
    pub fn has_key_fields(&self) -> bool {
        self.brand.is_some() && self.material.is_some() && self.color_name.is_some()
    }

    /// Diameter with the 1.75 mm default applied.
    pub fn diameter_or_default(&self) -> f64 {
        self.diameter.unwrap_or(DEFAULT_DIAMETER_MM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_fills_only_empty_fields() {
        let mut acc = FilamentRecord {
            brand: Some("eSun".to_string()),
            weight_g: Some(1000),
            ..Default::default()
        };

        let incoming = FilamentRecord {
            brand: Some("Overture".to_string()),
            material: Some("PLA".to_string()),
            weight_g: Some(250),
            ..Default::default()
        };

        acc.merge_missing(&incoming);

        assert_eq!(acc.brand.as_deref(), Some("eSun"));
        assert_eq!(acc.weight_g, Some(1000));
        assert_eq!(acc.material.as_deref(), Some("PLA"));
    }

    #[test]
    fn test_merge_never_clears_fields() {
        let mut acc = FilamentRecord {
            material: Some("PETG".to_string()),
            ..Default::default()
        };

        acc.merge_missing(&FilamentRecord::default());
        assert_eq!(acc.material.as_deref(), Some("PETG"));
    }

    #[test]
    fn test_merge_leaves_raw_text_alone() {
        let mut acc = FilamentRecord {
            raw_text: "original blob".to_string(),
            ..Default::default()
        };

        let incoming = FilamentRecord {
            raw_text: "other blob".to_string(),
            brand: Some("Sunlu".to_string()),
            ..Default::default()
        };

        acc.merge_missing(&incoming);
        assert_eq!(acc.raw_text, "original blob");
        assert_eq!(acc.brand.as_deref(), Some("Sunlu"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let incoming = FilamentRecord {
            brand: Some("Prusament".to_string()),
            color_name: Some("Black".to_string()),
            color_hex: Some("#000000".to_string()),
            ..Default::default()
        };

        let mut acc = FilamentRecord::default();
        acc.merge_missing(&incoming);
        let first = acc.clone();
        acc.merge_missing(&incoming);
        assert_eq!(acc, first);
    }

    #[test]
    fn test_has_key_fields() {
        let mut record = FilamentRecord {
            brand: Some("eSun".to_string()),
            material: Some("PLA".to_string()),
            ..Default::default()
        };
        assert!(!record.has_key_fields());

        record.color_name = Some("Black".to_string());
        assert!(record.has_key_fields());
    }

    #[test]
    fn test_diameter_default() {
        let record = FilamentRecord::default();
        assert_eq!(record.diameter_or_default(), DEFAULT_DIAMETER_MM);

        let record = FilamentRecord {
            diameter: Some(2.85),
            ..Default::default()
        };
        assert_eq!(record.diameter_or_default(), 2.85);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = FilamentRecord {
            brand: Some("Bambu Lab".to_string()),
            weight_g: Some(1000),
            raw_text: "label".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["brand"], "Bambu Lab");
        assert_eq!(json["weight_g"], 1000);
        assert_eq!(json["material"], serde_json::Value::Null);
    }
}
