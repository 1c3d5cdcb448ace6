//! Error types for the Labscan server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;
use labscan_server::extract::ExtractError;
use labscan_server::ocr::OcrError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Multipart(e) => (StatusCode::BAD_REQUEST, "bad_request", e.to_string()),
            AppError::Storage(StorageError::FileTooLarge { size, max }) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "file_too_large",
                format!("Upload of {size} bytes exceeds the {max} byte limit"),
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    "Failed to store upload".to_string(),
                )
            }
            AppError::Extraction(ExtractError::Docx(msg)) => (
                StatusCode::BAD_REQUEST,
                "invalid_document",
                format!("Could not read document: {msg}"),
            ),
            AppError::Extraction(ExtractError::PdfToolUnavailable(tool)) => {
                tracing::error!("PDF tool missing: {}", tool);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "extraction_unavailable",
                    format!("Required tool is not installed: {tool}"),
                )
            }
            AppError::Extraction(ExtractError::Ocr(OcrError::EngineNotAvailable(msg))) => {
                tracing::error!("OCR unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ocr_unavailable",
                    "No OCR engine is available".to_string(),
                )
            }
            AppError::Extraction(ExtractError::Ocr(OcrError::ImageError(msg))) => (
                StatusCode::BAD_REQUEST,
                "invalid_image",
                format!("Could not decode image: {msg}"),
            ),
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "extraction_error",
                    "Failed to extract text from report".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}
