//! Landing page route.

use axum::{response::Html, routing::get, Router};

use crate::state::AppState;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Labscan Server</title>
</head>
<body>
  <h1>Labscan Server</h1>
  <p>Upload a lab report and get a structured analysis of its blood parameters.</p>
  <ul>
    <li><code>POST /upload-report</code> &mdash; multipart upload (field <code>report-file</code>); accepts PNG, JPEG, PDF, DOCX, TXT</li>
    <li><code>POST /recommend-tests</code> &mdash; JSON <code>{"symptoms": "..."}</code></li>
    <li><code>GET /health</code></li>
  </ul>
</body>
</html>
"#;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
