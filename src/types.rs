use std::sync::Arc;

use crate::generator::UuidGenerator;

#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub generator: Arc<dyn UuidGenerator>,
}
