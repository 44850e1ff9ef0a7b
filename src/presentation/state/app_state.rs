use std::sync::Arc;

use crate::application::services::{GigLifecycleService, GigRequestParser};

#[derive(Clone)]
pub struct AppState {
    pub lifecycle_service: Arc<GigLifecycleService>,
    pub request_parser: Arc<GigRequestParser>,
}
