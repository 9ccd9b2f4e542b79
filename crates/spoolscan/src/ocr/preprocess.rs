//! Deterministic preprocessing variants for OCR.
//!
//! The engine runs once per variant and the outputs are concatenated.
//! Over-producing text is deliberate: the pattern matcher tolerates noise
//! and duplicates, and the extra surface area buys recall on small or
//! low-contrast label print.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};

/// Binarization midpoint for the contrast variant.
const THRESHOLD_MIDPOINT: u8 = 128;

/// Contrast boost applied before thresholding, in percent.
const CONTRAST_BOOST: f32 = 100.0;

/// Produce the three preprocessing variants, in a fixed order:
/// plain grayscale, contrast-boosted binary threshold, 2x upscaled
/// grayscale for small print.
pub fn preprocess_variants(image: &DynamicImage) -> Vec<GrayImage> {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();

    let contrasted = imageops::contrast(&gray, CONTRAST_BOOST);
    let thresholded = threshold(&contrasted, THRESHOLD_MIDPOINT);

    let upscaled = imageops::resize(&gray, width * 2, height * 2, FilterType::Lanczos3);

    vec![gray, thresholded, upscaled]
}

fn threshold(image: &GrayImage, midpoint: u8) -> GrayImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > midpoint { 255 } else { 0 };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, _| {
            let v = ((x as f32 / width as f32) * 255.0) as u8;
            Rgb([v, v, v])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_produces_three_variants() {
        let variants = preprocess_variants(&gradient_image(100, 60));
        assert_eq!(variants.len(), 3);
    }

    #[test]
    fn test_variant_dimensions() {
        let variants = preprocess_variants(&gradient_image(100, 60));
        assert_eq!(variants[0].dimensions(), (100, 60));
        assert_eq!(variants[1].dimensions(), (100, 60));
        assert_eq!(variants[2].dimensions(), (200, 120));
    }

    #[test]
    fn test_threshold_variant_is_binary() {
        let variants = preprocess_variants(&gradient_image(100, 60));
        assert!(variants[1].pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_variants_are_deterministic() {
        let img = gradient_image(64, 64);
        let first = preprocess_variants(&img);
        let second = preprocess_variants(&img);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.as_raw(), b.as_raw());
        }
    }

    #[test]
    fn test_threshold_midpoint_split() {
        let mut img = GrayImage::new(2, 1);
        img.get_pixel_mut(0, 0).0[0] = 128;
        img.get_pixel_mut(1, 0).0[0] = 129;

        let out = threshold(&img, 128);
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
        assert_eq!(out.get_pixel(1, 0).0[0], 255);
    }
}
