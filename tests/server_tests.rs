//! Static server tests (feature `server`).

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use std::fs;
use std::path::PathBuf;

fn static_fixture() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("flipcore-static-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), "<html>flip</html>").unwrap();
    dir
}

#[tokio::test]
async fn test_healthz_reports_ok() {
    let app = flipcore::server::router(static_fixture());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_serves_static_bundle() {
    let app = flipcore::server::router(static_fixture());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/index.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<html>flip</html>");
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let app = flipcore::server::router(static_fixture());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-such-file.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
