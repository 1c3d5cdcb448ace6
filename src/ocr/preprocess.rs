//! Image normalization before OCR.
//!
//! Tesseract does noticeably better on grayscale input at a reasonable
//! resolution, so uploads are decoded, converted, and (for small scans,
//! e.g. phone thumbnails) upscaled before recognition.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use super::types::OcrError;

/// Below this width the image is upscaled before OCR.
const MIN_OCR_WIDTH: u32 = 1000;

/// Upscale factor cap.
const MAX_SCALE: u32 = 4;

/// Decode an uploaded image and re-encode it as a grayscale PNG suitable
/// for OCR.
pub fn prepare_for_ocr(data: &[u8]) -> Result<Vec<u8>, OcrError> {
    let img = image::load_from_memory(data)
        .map_err(|e| OcrError::ImageError(format!("failed to decode image: {e}")))?;

    let gray = DynamicImage::ImageLuma8(img.to_luma8());

    let scaled = if gray.width() < MIN_OCR_WIDTH {
        let factor = (MIN_OCR_WIDTH.div_ceil(gray.width().max(1))).min(MAX_SCALE).max(2);
        gray.resize(
            gray.width() * factor,
            gray.height() * factor,
            FilterType::Lanczos3,
        )
    } else {
        gray
    };

    let mut buffer = Vec::new();
    scaled
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| OcrError::ImageError(format!("failed to encode image: {e}")))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage};

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_small_image_is_upscaled() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 100, image::Rgb([255, 0, 0])));
        let prepared = prepare_for_ocr(&encode_png(img)).unwrap();

        let decoded = image::load_from_memory(&prepared).unwrap();
        assert!(decoded.width() >= MIN_OCR_WIDTH / 2);
        assert!(decoded.width() > 200);
    }

    #[test]
    fn test_large_image_keeps_dimensions() {
        let img =
            DynamicImage::ImageLuma8(GrayImage::from_pixel(1200, 800, Luma([128])));
        let prepared = prepare_for_ocr(&encode_png(img)).unwrap();

        let decoded = image::load_from_memory(&prepared).unwrap();
        assert_eq!(decoded.width(), 1200);
        assert_eq!(decoded.height(), 800);
    }

    #[test]
    fn test_invalid_image_data() {
        let result = prepare_for_ocr(b"this is not an image");
        assert!(matches!(result, Err(OcrError::ImageError(_))));
    }
}
