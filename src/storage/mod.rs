//! Upload storage.
//!
//! Uploaded reports are written under a base directory with a
//! collision-free name derived from a fresh UUID and the sanitized client
//! file name. The SHA-256 digest is recorded for traceability.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("file too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Record of one stored upload.
#[derive(Debug, Clone, Serialize)]
pub struct StoredReport {
    pub id: Uuid,
    pub file_name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    base_path: PathBuf,
    max_file_size: u64,
}

impl UploadStore {
    pub fn new(base_path: PathBuf, max_file_size: u64) -> Self {
        Self {
            base_path,
            max_file_size,
        }
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.base_path).await
    }

    /// Persist one upload and return its record.
    pub async fn store(&self, file_name: &str, data: &[u8]) -> Result<StoredReport, StorageError> {
        let size = data.len() as u64;
        if size > self.max_file_size {
            return Err(StorageError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        let id = Uuid::new_v4();
        let file_name = sanitize_file_name(file_name);
        let path = self.base_path.join(format!("{id}_{file_name}"));

        tokio::fs::write(&path, data).await?;

        Ok(StoredReport {
            id,
            file_name,
            path,
            size,
            sha256: compute_hash(data),
            uploaded_at: Utc::now(),
        })
    }
}

/// SHA-256 digest as a hex string.
pub fn compute_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Strip client-supplied path components and shell-hostile characters.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("report");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.' || c == '_') {
        "report".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("blood results (1).png"), "blood_results__1_.png");
        assert_eq!(sanitize_file_name("..."), "report");
        assert_eq!(sanitize_file_name(""), "report");
    }

    #[test]
    fn test_compute_hash() {
        // sha256 of empty input
        assert_eq!(
            compute_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(compute_hash(b"a"), compute_hash(b"b"));
    }

    #[tokio::test]
    async fn test_store_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().to_path_buf(), 1024);
        store.ensure_dir().await.unwrap();

        let report = store.store("cbc.txt", b"hemoglobin: 14.0").await.unwrap();
        assert_eq!(report.file_name, "cbc.txt");
        assert_eq!(report.size, 16);

        let on_disk = tokio::fs::read(&report.path).await.unwrap();
        assert_eq!(on_disk, b"hemoglobin: 14.0");
        assert_eq!(report.sha256, compute_hash(b"hemoglobin: 14.0"));
    }

    #[tokio::test]
    async fn test_store_rejects_oversized_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().to_path_buf(), 8);

        let result = store.store("big.txt", b"way too many bytes").await;
        assert!(matches!(
            result,
            Err(StorageError::FileTooLarge { size: 18, max: 8 })
        ));
    }

    #[tokio::test]
    async fn test_stored_names_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().to_path_buf(), 1024);

        let a = store.store("same.txt", b"one").await.unwrap();
        let b = store.store("same.txt", b"two").await.unwrap();
        assert_ne!(a.path, b.path);
    }
}
