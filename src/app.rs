use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{openapi::ApiDoc, routes, types::AppState};

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::status::router())
        .merge(routes::uuid::router())
        .route("/", get(routes::hello::hello))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
