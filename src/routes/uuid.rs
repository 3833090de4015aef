use axum::extract::State;

use crate::{error::AppError, types::AppState};

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/uuid", axum::routing::get(generate_uuid))
}

/// Responds with a fresh v4 UUID in the canonical hyphenated form. The
/// original implementation dropped the request on a generation failure;
/// here the caller gets an explicit 500 instead.
#[utoipa::path(get, path = "/uuid", responses((status = 200, description = "A freshly generated v4 UUID", content_type = "text/plain", body = String), (status = 500, description = "UUID generation failed")), tag = "Uuid")]
pub async fn generate_uuid(State(state): State<AppState>) -> Result<String, AppError> {
    let uuid = state.generator.generate().map_err(AppError::Internal)?;
    Ok(uuid.to_string())
}
