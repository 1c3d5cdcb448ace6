//! Health check route.
//!
//! Besides liveness, the response reports which OCR engines can actually
//! run on this host, so a misconfigured deployment (missing tesseract) is
//! visible before the first upload fails.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use labscan_server::ocr::OcrEngine;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    ocr_engines: Vec<OcrEngine>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ocr_engines = state.ocr().available_engines().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        ocr_engines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.upload.dir = dir.path().join("uploads");
        let state = AppState::new(config).await.unwrap();
        let app = Router::new().merge(router()).with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "healthy");
        assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
        assert!(parsed["ocr_engines"].is_array());
    }
}
