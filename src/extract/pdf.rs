//! PDF text extraction via poppler.
//!
//! `pdftotext` pulls the embedded text layer. Scanned PDFs have none, so an
//! empty result falls back to rasterizing pages with `pdftoppm` and running
//! OCR over each page image.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::ExtractError;
use crate::ocr::{OcrError, OcrService};

/// Poppler tool configuration.
#[derive(Debug, Clone)]
pub struct PdfTools {
    pdftotext: String,
    pdftoppm: String,
    /// Page cap for the OCR fallback; keeps scanned uploads bounded.
    max_ocr_pages: u32,
}

impl PdfTools {
    pub fn new(pdftotext: &str, pdftoppm: &str, max_ocr_pages: u32) -> Self {
        Self {
            pdftotext: pdftotext.to_string(),
            pdftoppm: pdftoppm.to_string(),
            max_ocr_pages,
        }
    }

    /// Extract text from a PDF, using OCR for scanned documents.
    pub async fn extract_text(
        &self,
        data: &[u8],
        ocr: &OcrService,
    ) -> Result<String, ExtractError> {
        let temp_dir = std::env::temp_dir();
        let id = Uuid::new_v4();
        let pdf_path = temp_dir.join(format!("report_{id}.pdf"));

        tokio::fs::write(&pdf_path, data).await?;
        let result = self.extract_inner(&temp_dir, &pdf_path, &id, ocr).await;
        let _ = tokio::fs::remove_file(&pdf_path).await;

        result
    }

    async fn extract_inner(
        &self,
        temp_dir: &Path,
        pdf_path: &Path,
        id: &Uuid,
        ocr: &OcrService,
    ) -> Result<String, ExtractError> {
        let txt_path = temp_dir.join(format!("report_{id}.txt"));

        let output = tokio::process::Command::new(&self.pdftotext)
            .arg("-q")
            .arg(pdf_path)
            .arg(&txt_path)
            .output()
            .await
            .map_err(|e| self.spawn_error(&self.pdftotext, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::PdfTool(format!(
                "pdftotext exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = tokio::fs::read_to_string(&txt_path).await.unwrap_or_default();
        let _ = tokio::fs::remove_file(&txt_path).await;

        if !text.trim().is_empty() {
            return Ok(text);
        }

        tracing::info!("PDF has no text layer, falling back to page OCR");
        self.ocr_pages(temp_dir, pdf_path, id, ocr).await
    }

    /// Rasterize pages and OCR them one by one.
    async fn ocr_pages(
        &self,
        temp_dir: &Path,
        pdf_path: &Path,
        id: &Uuid,
        ocr: &OcrService,
    ) -> Result<String, ExtractError> {
        let prefix = format!("report_{id}_page");
        let out_prefix = temp_dir.join(&prefix);

        let output = tokio::process::Command::new(&self.pdftoppm)
            .arg("-png")
            .arg("-r")
            .arg("300")
            .arg("-l")
            .arg(self.max_ocr_pages.to_string())
            .arg(pdf_path)
            .arg(&out_prefix)
            .output()
            .await
            .map_err(|e| self.spawn_error(&self.pdftoppm, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::PdfTool(format!(
                "pdftoppm exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let pages = collect_page_files(temp_dir, &prefix).await?;
        let mut text = String::new();
        let mut failure: Option<ExtractError> = None;

        for (page, path) in &pages {
            let image_data = match tokio::fs::read(path).await {
                Ok(data) => data,
                Err(e) => {
                    failure = Some(ExtractError::Io(e));
                    break;
                }
            };
            match ocr.recognize(&image_data, None).await {
                Ok(result) => {
                    text.push_str(&result.text);
                    text.push('\n');
                }
                Err(OcrError::EngineNotAvailable(msg)) => {
                    failure = Some(ExtractError::Ocr(OcrError::EngineNotAvailable(msg)));
                    break;
                }
                Err(e) => {
                    tracing::warn!(page, error = %e, "page OCR failed, skipping page");
                }
            }
        }

        for (_, path) in &pages {
            let _ = tokio::fs::remove_file(path).await;
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(text),
        }
    }

    fn spawn_error(&self, tool: &str, e: std::io::Error) -> ExtractError {
        if e.kind() == ErrorKind::NotFound {
            ExtractError::PdfToolUnavailable(tool.to_string())
        } else {
            ExtractError::Io(e)
        }
    }
}

/// Find the page images `pdftoppm` produced for `prefix`, ordered by page
/// number (lexicographic order would put page 10 before page 2).
async fn collect_page_files(
    dir: &Path,
    prefix: &str,
) -> Result<Vec<(u32, PathBuf)>, std::io::Error> {
    let mut pages = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(rest) = name.strip_prefix(prefix) else {
            continue;
        };
        let page = rest
            .strip_prefix('-')
            .and_then(|r| r.strip_suffix(".png"))
            .and_then(|n| n.parse::<u32>().ok());
        if let Some(page) = page {
            pages.push((page, entry.path()));
        }
    }

    pages.sort_by_key(|(page, _)| *page);
    Ok(pages)
}
