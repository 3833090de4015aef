#[utoipa::path(get, path = "/", responses((status = 200, description = "Greeting", content_type = "text/plain", body = String)), tag = "System")]
pub async fn hello() -> &'static str {
    "Hello World"
}
