//! Labscan Server Library
//!
//! Exposes the report-processing core so the server binary and tests can
//! share it.
//!
//! # Modules
//!
//! - `analysis`: blood parameter scanning, reference ranges, recommendations
//! - `extract`: per-format text extraction (image, PDF, DOCX, plain text)
//! - `ocr`: OCR provider abstraction (tesseract subprocess)

pub mod analysis;
pub mod extract;
pub mod ocr;
