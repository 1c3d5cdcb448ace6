//! OCR providers.
//!
//! Defines the provider trait and the tesseract subprocess implementation.

use async_trait::async_trait;
use uuid::Uuid;

use super::types::{OcrEngine, OcrError, OcrResult};

/// OCR provider trait.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Which engine this provider drives.
    fn engine(&self) -> OcrEngine;

    /// Check whether the provider can run on this host.
    async fn is_available(&self) -> bool;

    /// Recognize text in an image (PNG/JPEG bytes).
    async fn recognize(&self, image_data: &[u8], language: &str) -> Result<OcrResult, OcrError>;
}

/// Tesseract OCR via the system binary.
///
/// The binary and its trained data are runtime dependencies of the
/// deployment image; recognition goes through temp files because tesseract
/// writes its output next to a caller-chosen base path.
pub struct TesseractProvider {
    binary: String,
}

impl TesseractProvider {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }
}

#[async_trait]
impl OcrProvider for TesseractProvider {
    fn engine(&self) -> OcrEngine {
        OcrEngine::Tesseract
    }

    async fn is_available(&self) -> bool {
        tokio::process::Command::new(&self.binary)
            .arg("--version")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    async fn recognize(&self, image_data: &[u8], language: &str) -> Result<OcrResult, OcrError> {
        let temp_dir = std::env::temp_dir();
        let input_path = temp_dir.join(format!("ocr_input_{}.png", Uuid::new_v4()));
        let output_base = temp_dir.join(format!("ocr_output_{}", Uuid::new_v4()));

        tokio::fs::write(&input_path, image_data)
            .await
            .map_err(|e| OcrError::ProcessingError(format!("failed to write temp image: {e}")))?;

        let output = tokio::process::Command::new(&self.binary)
            .arg(&input_path)
            .arg(&output_base)
            .arg("-l")
            .arg(language)
            .arg("--oem")
            .arg("3")
            .arg("--psm")
            .arg("3")
            .output()
            .await;

        let _ = tokio::fs::remove_file(&input_path).await;

        let output = output
            .map_err(|e| OcrError::ProcessingError(format!("failed to run tesseract: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::ProcessingError(format!(
                "tesseract failed: {}",
                stderr.trim()
            )));
        }

        // Tesseract appends .txt to the output base path
        let output_file = format!("{}.txt", output_base.display());
        let text = tokio::fs::read_to_string(&output_file)
            .await
            .map_err(|e| OcrError::ProcessingError(format!("failed to read OCR output: {e}")))?;
        let _ = tokio::fs::remove_file(&output_file).await;

        Ok(OcrResult {
            text: text.trim().to_string(),
            engine: OcrEngine::Tesseract,
        })
    }
}

/// Mock provider for testing.
#[cfg(test)]
pub struct MockProvider {
    pub text: String,
    pub available: bool,
}

#[cfg(test)]
#[async_trait]
impl OcrProvider for MockProvider {
    fn engine(&self) -> OcrEngine {
        OcrEngine::Tesseract
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn recognize(&self, _image_data: &[u8], _language: &str) -> Result<OcrResult, OcrError> {
        Ok(OcrResult {
            text: self.text.clone(),
            engine: OcrEngine::Tesseract,
        })
    }
}
