//! Symptom-based test recommendation route.
//!
//! POST /recommend-tests - map a free-text symptom description to the lab
//! tests usually ordered for it.

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use labscan_server::analysis::symptoms;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendTestsRequest {
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendTestsResponse {
    pub recommended_tests: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/recommend-tests", post(recommend_tests))
}

async fn recommend_tests(
    Json(request): Json<RecommendTestsRequest>,
) -> Json<RecommendTestsResponse> {
    let recommended_tests = symptoms::recommend_tests(&request.symptoms);

    tracing::info!(
        symptoms_len = request.symptoms.len(),
        recommended = recommended_tests.len(),
        "Recommended tests for symptoms"
    );

    Json(RecommendTestsResponse { recommended_tests })
}
