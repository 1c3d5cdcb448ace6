//! Application state management.

use std::sync::Arc;

use labscan_server::analysis::ParameterScanner;
use labscan_server::extract::{PdfTools, TextExtractor};
use labscan_server::ocr::{OcrService, OcrServiceConfig};

use crate::config::Config;
use crate::storage::UploadStore;

/// Error type for state initialization.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to create upload directory: {0}")]
    UploadDir(#[source] std::io::Error),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    ocr: Arc<OcrService>,
    extractor: TextExtractor,
    store: UploadStore,
    scanner: ParameterScanner,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Creates the upload directory and compiles the parameter scanner.
    pub async fn new(config: Config) -> Result<Self, StateError> {
        let ocr = Arc::new(OcrService::new(OcrServiceConfig {
            tesseract_binary: config.ocr.tesseract_binary.clone(),
            default_language: config.ocr.language.clone(),
        }));

        let pdf = PdfTools::new(
            &config.pdf.pdftotext_binary,
            &config.pdf.pdftoppm_binary,
            config.pdf.max_ocr_pages,
        );
        let extractor = TextExtractor::new(ocr.clone(), pdf);

        let store = UploadStore::new(config.upload.dir.clone(), config.upload.max_file_size);
        store.ensure_dir().await.map_err(StateError::UploadDir)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                ocr,
                extractor,
                store,
                scanner: ParameterScanner::new(),
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn ocr(&self) -> &Arc<OcrService> {
        &self.inner.ocr
    }

    pub fn extractor(&self) -> &TextExtractor {
        &self.inner.extractor
    }

    pub fn store(&self) -> &UploadStore {
        &self.inner.store
    }

    pub fn scanner(&self) -> &ParameterScanner {
        &self.inner.scanner
    }
}
