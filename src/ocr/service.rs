//! OCR service.
//!
//! Orchestrates OCR providers over preprocessed images, falling through to
//! the next available engine when one fails.

use std::sync::Arc;

use super::preprocess;
use super::provider::{OcrProvider, TesseractProvider};
use super::types::{OcrEngine, OcrError, OcrResult};

/// OCR service configuration.
#[derive(Debug, Clone)]
pub struct OcrServiceConfig {
    /// Tesseract binary name or path.
    pub tesseract_binary: String,
    /// Default recognition language (tesseract language code).
    pub default_language: String,
}

impl Default for OcrServiceConfig {
    fn default() -> Self {
        Self {
            tesseract_binary: "tesseract".to_string(),
            default_language: "eng".to_string(),
        }
    }
}

/// OCR service for report images and rasterized PDF pages.
pub struct OcrService {
    config: OcrServiceConfig,
    providers: Vec<Arc<dyn OcrProvider>>,
}

impl OcrService {
    pub fn new(config: OcrServiceConfig) -> Self {
        let providers: Vec<Arc<dyn OcrProvider>> = vec![Arc::new(TesseractProvider::new(
            &config.tesseract_binary,
        ))];

        Self { config, providers }
    }

    #[cfg(test)]
    pub fn with_providers(config: OcrServiceConfig, providers: Vec<Arc<dyn OcrProvider>>) -> Self {
        Self { config, providers }
    }

    /// Engines that can actually run on this host.
    pub async fn available_engines(&self) -> Vec<OcrEngine> {
        let mut available = Vec::new();
        for provider in &self.providers {
            if provider.is_available().await {
                available.push(provider.engine());
            }
        }
        available
    }

    /// Recognize text in an image, trying providers in order.
    pub async fn recognize(
        &self,
        image_data: &[u8],
        language: Option<&str>,
    ) -> Result<OcrResult, OcrError> {
        let language = language.unwrap_or(&self.config.default_language);
        let prepared = preprocess::prepare_for_ocr(image_data)?;

        for provider in &self.providers {
            if !provider.is_available().await {
                continue;
            }
            match provider.recognize(&prepared, language).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::warn!(
                        engine = ?provider.engine(),
                        error = %e,
                        "OCR provider failed, trying next"
                    );
                }
            }
        }

        Err(OcrError::EngineNotAvailable(
            "no OCR engine available".to_string(),
        ))
    }
}
