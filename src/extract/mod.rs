//! Report text extraction.
//!
//! Detects the uploaded report's format and routes it to the matching
//! extractor: OCR for images, poppler (with an OCR fallback for scanned
//! documents) for PDFs, ZIP + XML for DOCX, and a lossy UTF-8 read for
//! plain text.

pub mod docx;
pub mod pdf;

pub use pdf::PdfTools;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::ocr::{OcrError, OcrService};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Png,
    Jpeg,
    Pdf,
    Docx,
    Text,
}

impl ReportFormat {
    /// Detect the format from the uploaded file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();

        match ext.as_str() {
            // Legacy .doc goes through the DOCX path; non-ZIP payloads fail
            // there with a typed error.
            "doc" | "docx" => Some(Self::Docx),
            _ => {
                let mime = mime_guess::from_ext(&ext).first()?;
                match (mime.type_().as_str(), mime.subtype().as_str()) {
                    ("image", "png") => Some(Self::Png),
                    ("image", "jpeg") => Some(Self::Jpeg),
                    ("application", "pdf") => Some(Self::Pdf),
                    ("text", "plain") => Some(Self::Text),
                    _ => None,
                }
            }
        }
    }

    /// Detect the format from magic bytes.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"%PDF-") {
            Some(Self::Pdf)
        } else if data.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some(Self::Png)
        } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if data.starts_with(b"PK\x03\x04") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    /// Detect from the file name, falling back to content sniffing.
    pub fn detect(name: &str, data: &[u8]) -> Option<Self> {
        Self::from_file_name(name).or_else(|| Self::sniff(data))
    }
}

/// Extraction error types.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid DOCX document: {0}")]
    Docx(String),

    #[error("PDF tool failed: {0}")]
    PdfTool(String),

    #[error("PDF tool not installed: {0}")]
    PdfToolUnavailable(String),

    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts report text per format.
pub struct TextExtractor {
    ocr: Arc<OcrService>,
    pdf: PdfTools,
}

impl TextExtractor {
    pub fn new(ocr: Arc<OcrService>, pdf: PdfTools) -> Self {
        Self { ocr, pdf }
    }

    /// Extract the text of one report.
    pub async fn extract(
        &self,
        data: &[u8],
        format: ReportFormat,
    ) -> Result<String, ExtractError> {
        match format {
            ReportFormat::Png | ReportFormat::Jpeg => {
                Ok(self.ocr.recognize(data, None).await?.text)
            }
            ReportFormat::Pdf => self.pdf.extract_text(data, &self.ocr).await,
            ReportFormat::Docx => docx::extract_text(data),
            ReportFormat::Text => Ok(String::from_utf8_lossy(data).into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(ReportFormat::from_file_name("scan.png"), Some(ReportFormat::Png));
        assert_eq!(ReportFormat::from_file_name("scan.JPG"), Some(ReportFormat::Jpeg));
        assert_eq!(ReportFormat::from_file_name("scan.jpeg"), Some(ReportFormat::Jpeg));
        assert_eq!(ReportFormat::from_file_name("report.pdf"), Some(ReportFormat::Pdf));
        assert_eq!(ReportFormat::from_file_name("report.docx"), Some(ReportFormat::Docx));
        assert_eq!(ReportFormat::from_file_name("report.doc"), Some(ReportFormat::Docx));
        assert_eq!(ReportFormat::from_file_name("report.txt"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::from_file_name("archive.tar.gz"), None);
        assert_eq!(ReportFormat::from_file_name("noextension"), None);
    }

    #[test]
    fn test_sniff_magic_bytes() {
        assert_eq!(ReportFormat::sniff(b"%PDF-1.7 ..."), Some(ReportFormat::Pdf));
        assert_eq!(
            ReportFormat::sniff(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]),
            Some(ReportFormat::Png)
        );
        assert_eq!(
            ReportFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ReportFormat::Jpeg)
        );
        assert_eq!(ReportFormat::sniff(b"PK\x03\x04rest"), Some(ReportFormat::Docx));
        assert_eq!(ReportFormat::sniff(b"just some text"), None);
    }

    #[test]
    fn test_detect_prefers_extension_then_sniffs() {
        assert_eq!(
            ReportFormat::detect("report.txt", b"%PDF-"),
            Some(ReportFormat::Text)
        );
        assert_eq!(
            ReportFormat::detect("upload", b"%PDF-1.4"),
            Some(ReportFormat::Pdf)
        );
        assert_eq!(ReportFormat::detect("upload", b"mystery"), None);
    }

    #[tokio::test]
    async fn test_extract_plain_text() {
        let ocr = Arc::new(OcrService::new(Default::default()));
        let extractor = TextExtractor::new(ocr, PdfTools::new("pdftotext", "pdftoppm", 5));

        let text = extractor
            .extract(b"hemoglobin: 14.0", ReportFormat::Text)
            .await
            .unwrap();
        assert_eq!(text, "hemoglobin: 14.0");
    }

    #[tokio::test]
    async fn test_extract_invalid_utf8_is_lossy() {
        let ocr = Arc::new(OcrService::new(Default::default()));
        let extractor = TextExtractor::new(ocr, PdfTools::new("pdftotext", "pdftoppm", 5));

        let text = extractor
            .extract(&[b'g', b'l', 0xFF, b'u', b'c'], ReportFormat::Text)
            .await
            .unwrap();
        assert!(text.contains('\u{FFFD}'));
    }
}
