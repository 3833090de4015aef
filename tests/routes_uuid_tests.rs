use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use regex::Regex;
use tower::ServiceExt;
use uuid::Uuid;
use uuid_service::{
    app::build_router,
    generator::{RandomGenerator, UuidGenerator},
    types::AppState,
};

fn test_state() -> AppState {
    AppState {
        version: "test".to_string(),
        generator: Arc::new(RandomGenerator),
    }
}

async fn get(uri: &str, state: AppState) -> Result<(StatusCode, String)> {
    let app = build_router(state);
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();
    Ok((status, String::from_utf8(body.to_vec())?))
}

#[tokio::test]
async fn test_uuid_returns_canonical_v4_string() -> Result<()> {
    let (status, body) = get("/uuid", test_state()).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.len(), 36);

    let v4 =
        Regex::new("^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")?;
    assert!(v4.is_match(&body), "not a canonical v4 uuid: {body}");

    Ok(())
}

#[tokio::test]
async fn test_uuid_differs_between_calls() -> Result<()> {
    let state = test_state();

    let (_, first) = get("/uuid", state.clone()).await?;
    let (_, second) = get("/uuid", state).await?;

    assert_ne!(first, second);

    Ok(())
}

struct BrokenGenerator;

impl UuidGenerator for BrokenGenerator {
    fn generate(&self) -> anyhow::Result<Uuid> {
        Err(anyhow::anyhow!("random source unavailable"))
    }
}

#[tokio::test]
async fn test_uuid_generation_failure_returns_500() -> Result<()> {
    let state = AppState {
        version: "test".to_string(),
        generator: Arc::new(BrokenGenerator),
    };

    let (status, body) = get("/uuid", state).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("internal error"));

    Ok(())
}
