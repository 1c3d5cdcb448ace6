//! Configuration management for Labscan Server.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub ocr: OcrConfig,
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_file_size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub tesseract_binary: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    pub pdftotext_binary: String,
    pub pdftoppm_binary: String,
    pub max_ocr_pages: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 10000,
            },
            upload: UploadConfig {
                dir: PathBuf::from("uploads"),
                max_file_size: 20 * 1024 * 1024,
            },
            ocr: OcrConfig {
                tesseract_binary: "tesseract".to_string(),
                language: "eng".to_string(),
            },
            pdf: PdfConfig {
                pdftotext_binary: "pdftotext".to_string(),
                pdftoppm_binary: "pdftoppm".to_string(),
                max_ocr_pages: 20,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env("PORT", 10000)?,
            },
            upload: UploadConfig {
                dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("uploads")),
                max_file_size: parse_env("MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
            },
            ocr: OcrConfig {
                tesseract_binary: env::var("TESSERACT_BIN")
                    .unwrap_or_else(|_| "tesseract".to_string()),
                language: env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
            },
            pdf: PdfConfig {
                pdftotext_binary: env::var("PDFTOTEXT_BIN")
                    .unwrap_or_else(|_| "pdftotext".to_string()),
                pdftoppm_binary: env::var("PDFTOPPM_BIN")
                    .unwrap_or_else(|_| "pdftoppm".to_string()),
                max_ocr_pages: parse_env("PDF_OCR_MAX_PAGES", 20)?,
            },
        })
    }
}

fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}
