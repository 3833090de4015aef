use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::types::AppState;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/status", axum::routing::get(status))
}

#[derive(Serialize, ToSchema)]
pub struct StatusBody {
    status: String,
    version: String,
}

#[utoipa::path(get, path = "/status", responses((status = 200, body = StatusBody)), tag = "System")]
pub async fn status(State(state): State<AppState>) -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok".to_string(),
        version: state.version.clone(),
    })
}
