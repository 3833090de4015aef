use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::hello::hello,
        routes::status::status,
        routes::uuid::generate_uuid,
    ),
    components(schemas(routes::status::StatusBody))
)]
pub struct ApiDoc;
