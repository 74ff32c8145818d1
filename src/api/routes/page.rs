//! Dashboard Page
//!
//! - GET / - The single-page dashboard

use axum::response::Html;

/// The dashboard page, compiled into the binary
const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
