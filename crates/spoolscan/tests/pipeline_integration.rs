//! Integration tests for the scan pipeline through the public API.
//!
//! These run fully offline: OCR is pointed at a nonexistent binary so its
//! missing-engine sentinel is deterministic, and both network lookups are
//! disabled. Field extraction itself is exercised through `parse_label_text`.

use spoolscan::ocr::ENGINE_MISSING_TEXT;
use spoolscan::{
    DEFAULT_DIAMETER_MM, FilamentRecord, OcrConfig, ScanConfig, Scanner, SpoolscanError, parse_label_text,
};
use std::path::PathBuf;
use tempfile::tempdir;

fn offline_scanner() -> Scanner {
    let config = ScanConfig {
        ocr: OcrConfig {
            binary: Some(PathBuf::from("/nonexistent/tesseract")),
            ..Default::default()
        },
        ..Default::default()
    };
    Scanner::offline(&config)
}

fn white_label(width: u32, height: u32) -> image::DynamicImage {
    image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255])))
}

#[tokio::test]
async fn test_scan_blank_image_yields_sentinel_record() {
    let record = offline_scanner().scan_image(&white_label(160, 120)).await;

    assert_eq!(record.raw_text, ENGINE_MISSING_TEXT);
    assert_eq!(record.brand, None);
    assert_eq!(record.barcode, None);
    assert_eq!(record.diameter, Some(DEFAULT_DIAMETER_MM));
}

#[tokio::test]
async fn test_scan_file_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("label.png");
    white_label(100, 60).save(&path).unwrap();

    let record = offline_scanner().scan_file(&path).await.unwrap();
    assert_eq!(record.diameter_or_default(), DEFAULT_DIAMETER_MM);
}

#[tokio::test]
async fn test_scan_file_rejects_garbage_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("label.png");
    std::fs::write(&path, b"not a png at all").unwrap();

    let err = offline_scanner().scan_file(&path).await.unwrap_err();
    assert!(matches!(err, SpoolscanError::Image { .. }));
    assert!(err.to_string().contains("label.png"));
}

#[tokio::test]
async fn test_scan_file_missing_path_is_fatal() {
    let err = offline_scanner().scan_file("/no/such/label.jpg").await.unwrap_err();
    assert!(matches!(err, SpoolscanError::Image { .. }));
}

#[test]
fn test_parse_full_label() {
    let record = parse_label_text(
        "Overture PLA Professional\nSpace Gray\n1.75mm  1kg\nPrinting temp 190-220\u{b0}C\nSKU: OVPLA175-GY",
    );

    assert_eq!(record.brand.as_deref(), Some("Overture"));
    assert_eq!(record.material.as_deref(), Some("PLA"));
    assert_eq!(record.color_name.as_deref(), Some("Space Gray"));
    assert_eq!(record.weight_g, Some(1000));
    assert_eq!(record.diameter, Some(1.75));
    assert_eq!(record.temp_nozzle.as_deref(), Some("190-220"));
    assert_eq!(record.filament_code.as_deref(), Some("OVPLA175-GY"));
}

#[test]
fn test_parse_bambu_style_label() {
    let record = parse_label_text("Bambu Lab\nPLA Matte\nCharcoal\n1 KG\nFilament Code: 13101");

    assert_eq!(record.brand.as_deref(), Some("Bambu Lab"));
    assert_eq!(record.material.as_deref(), Some("PLA Matte"));
    assert_eq!(record.color_name.as_deref(), Some("Charcoal"));
    assert_eq!(record.weight_g, Some(1000));
    assert_eq!(record.filament_code.as_deref(), Some("13101"));
}

#[test]
fn test_parse_noise_yields_empty_record() {
    let record = parse_label_text("lorem ipsum dolor sit amet");
    assert_eq!(record, FilamentRecord::default());
}

#[test]
fn test_json_serialization_shape() {
    let record = FilamentRecord {
        brand: Some("Sunlu".to_string()),
        material: Some("PETG".to_string()),
        weight_g: Some(250),
        diameter: Some(1.75),
        raw_text: "Sunlu PETG 250g".to_string(),
        ..Default::default()
    };

    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(json["brand"], "Sunlu");
    assert_eq!(json["weight_g"], 250);
    assert_eq!(json["color_name"], serde_json::Value::Null);

    let back: FilamentRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_merge_is_strictly_additive() {
    let mut base = parse_label_text("eSun PLA+");
    let overlay = parse_label_text("Polymaker PETG Blue 1kg");
    base.merge_missing(&overlay);

    assert_eq!(base.brand.as_deref(), Some("eSun"));
    assert_eq!(base.material.as_deref(), Some("PLA+"));
    assert_eq!(base.color_name.as_deref(), Some("Blue"));
    assert_eq!(base.weight_g, Some(1000));
}
