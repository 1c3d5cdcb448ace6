//! OCR types.

use serde::Serialize;

/// OCR engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrEngine {
    /// Tesseract OCR (local binary)
    Tesseract,
}

impl Default for OcrEngine {
    fn default() -> Self {
        Self::Tesseract
    }
}

/// Recognized text from one image.
#[derive(Debug, Clone, Serialize)]
pub struct OcrResult {
    pub text: String,
    pub engine: OcrEngine,
}

/// OCR error types.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR engine not available: {0}")]
    EngineNotAvailable(String),

    #[error("failed to prepare image for OCR: {0}")]
    ImageError(String),

    #[error("OCR processing failed: {0}")]
    ProcessingError(String),
}
