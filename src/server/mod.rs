//! Static host for the built widget.
//!
//! The game itself runs client-side; this server only ships the bundled
//! single-page app and answers a health probe. There is no session API:
//! sessions are per-tab and never leave the browser.

use std::path::PathBuf;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the router: the static bundle plus `/healthz`.
#[must_use]
pub fn router(static_dir: PathBuf) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
