//! Report upload and analysis route.
//!
//! POST /upload-report - multipart upload of a lab report (image, PDF,
//! DOCX, or plain text). The report is stored, its text extracted, and the
//! blood parameters graded against reference ranges.

use axum::{extract::Multipart, extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use labscan_server::analysis::{self, Finding};
use labscan_server::extract::ReportFormat;

use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadReportResponse {
    pub report_id: Uuid,
    pub file_name: String,
    pub format: Option<ReportFormat>,
    pub size: u64,
    pub sha256: String,
    pub uploaded_at: DateTime<Utc>,
    pub analysis: Vec<Finding>,
    pub doctor_recommendation: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/upload-report", post(upload_report))
}

async fn upload_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadReportResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("report-file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((file_name, data.to_vec()));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest("No file part".to_string()))?;
    if file_name.is_empty() {
        return Err(AppError::BadRequest("No selected file".to_string()));
    }

    let stored = state.store().store(&file_name, &data).await?;

    let format = ReportFormat::detect(&file_name, &data);
    let text = match format {
        Some(format) => state.extractor().extract(&data, format).await?,
        // Unknown formats extract nothing; the analysis comes back empty,
        // matching the behavior for reports with no recognizable values.
        None => String::new(),
    };

    let analysis = analysis::analyze(state.scanner(), &text);

    tracing::info!(
        report_id = %stored.id,
        file_name = %stored.file_name,
        format = ?format,
        size = stored.size,
        findings = analysis.findings.len(),
        "Report analyzed"
    );

    Ok(Json(UploadReportResponse {
        report_id: stored.id,
        file_name: stored.file_name,
        format,
        size: stored.size,
        sha256: stored.sha256,
        uploaded_at: stored.uploaded_at,
        analysis: analysis.findings,
        doctor_recommendation: analysis.doctor_recommendation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "X-LABSCAN-TEST-BOUNDARY";

    async fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.upload.dir = dir.path().join("uploads");
        let state = AppState::new(config).await.unwrap();
        (Router::new().merge(router()).with_state(state), dir)
    }

    fn multipart_body(field_name: &str, file_name: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    fn multipart_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload-report")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_text_report() {
        let (app, _dir) = test_app().await;

        let body = multipart_body(
            "report-file",
            "cbc.txt",
            "Hemoglobin: 11.0 g/dL\nGlucose: 95 mg/dL",
        );
        let response = app.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed["file_name"], "cbc.txt");
        assert_eq!(parsed["format"], "text");

        let findings = parsed["analysis"].as_array().unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0]["parameter"], "hemoglobin");
        assert_eq!(findings[0]["status"], "Abnormal");
        assert_eq!(findings[1]["parameter"], "glucose");
        assert_eq!(findings[1]["status"], "Normal");

        assert_eq!(parsed["doctor_recommendation"], "Consult: Hematologist.");
    }

    #[tokio::test]
    async fn test_upload_unknown_format_yields_empty_analysis() {
        let (app, _dir) = test_app().await;

        let body = multipart_body("report-file", "notes.xyz", "hemoglobin: 9.0");
        let response = app.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed["format"], serde_json::Value::Null);
        assert!(parsed["analysis"].as_array().unwrap().is_empty());
        assert_eq!(
            parsed["doctor_recommendation"],
            "All parameters are within normal ranges."
        );
    }

    #[tokio::test]
    async fn test_missing_file_part() {
        let (app, _dir) = test_app().await;

        let body = multipart_body("some-other-field", "cbc.txt", "hemoglobin: 11.0");
        let response = app.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["message"], "No file part");
    }

    #[tokio::test]
    async fn test_empty_file_name() {
        let (app, _dir) = test_app().await;

        let body = multipart_body("report-file", "", "hemoglobin: 11.0");
        let response = app.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["message"], "No selected file");
    }

    #[tokio::test]
    async fn test_upload_is_persisted() {
        let (app, dir) = test_app().await;

        let body = multipart_body("report-file", "cbc.txt", "sodium: 140");
        let response = app.oneshot(multipart_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let uploads: Vec<_> = std::fs::read_dir(dir.path().join("uploads"))
            .unwrap()
            .collect();
        assert_eq!(uploads.len(), 1);
    }
}
