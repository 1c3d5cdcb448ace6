//! OCR for scanned lab reports.
//!
//! Tesseract runs as a subprocess (the binary ships with the deployment
//! image); images are normalized before recognition.

pub mod preprocess;
pub mod provider;
pub mod service;
pub mod types;

pub use service::{OcrService, OcrServiceConfig};
pub use types::{OcrEngine, OcrError, OcrResult};
