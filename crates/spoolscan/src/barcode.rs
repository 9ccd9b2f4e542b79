//! Barcode and QR decoding.
//!
//! A thin wrapper over rxing that tries every supported symbology on the
//! image and reports the first decoded object. Absence of a barcode and
//! decode failure are the same first-class outcome: `None`. No network, no
//! process state.

use image::DynamicImage;
use rxing::BarcodeFormat;
use std::fmt;

/// Barcode symbology classification.
///
/// Retail-numeric symbologies feed the product-catalog lookup; everything
/// else (QR, Code128, ...) never triggers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbology {
    Ean13,
    UpcA,
    Ean8,
    UpcE,
    QrCode,
    Code128,
    Other(String),
}

impl Symbology {
    /// True for the retail-numeric family (EAN13/UPCA/EAN8/UPCE).
    pub fn is_retail(&self) -> bool {
        matches!(self, Symbology::Ean13 | Symbology::UpcA | Symbology::Ean8 | Symbology::UpcE)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbology::Ean13 => write!(f, "EAN13"),
            Symbology::UpcA => write!(f, "UPCA"),
            Symbology::Ean8 => write!(f, "EAN8"),
            Symbology::UpcE => write!(f, "UPCE"),
            Symbology::QrCode => write!(f, "QRCODE"),
            Symbology::Code128 => write!(f, "CODE128"),
            Symbology::Other(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<&BarcodeFormat> for Symbology {
    fn from(format: &BarcodeFormat) -> Self {
        match format {
            BarcodeFormat::EAN_13 => Symbology::Ean13,
            BarcodeFormat::UPC_A => Symbology::UpcA,
            BarcodeFormat::EAN_8 => Symbology::Ean8,
            BarcodeFormat::UPC_E => Symbology::UpcE,
            BarcodeFormat::QR_CODE => Symbology::QrCode,
            BarcodeFormat::CODE_128 => Symbology::Code128,
            other => Symbology::Other(format!("{:?}", other)),
        }
    }
}

/// One decoded barcode: raw payload plus its symbology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBarcode {
    pub payload: String,
    pub symbology: Symbology,
}

/// Decode the first barcode or QR code present in the image.
///
/// When several codes are in frame, the first decoded object wins - there
/// is no disambiguation policy beyond that. Returns `None` when nothing
/// decodes; a failed decode is not an error.
pub fn decode_barcode(image: &DynamicImage) -> Option<DecodedBarcode> {
    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();

    match rxing::helpers::detect_in_luma(luma.into_raw(), height, width, None) {
        Ok(found) => {
            let symbology = Symbology::from(found.getBarcodeFormat());
            tracing::debug!(symbology = %symbology, "decoded barcode");
            Some(DecodedBarcode {
                payload: found.getText().to_string(),
                symbology,
            })
        }
        Err(err) => {
            tracing::debug!(error = %err, "no barcode decoded");
            None
        }
    }
}
