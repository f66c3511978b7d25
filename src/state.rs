//! Shared application state.

use std::sync::Arc;

use crate::application::services::UrlCheckService;

/// State injected into every handler.
///
/// Read-only after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub url_check_service: Arc<UrlCheckService>,
}

impl AppState {
    pub fn new(url_check_service: Arc<UrlCheckService>) -> Self {
        Self { url_check_service }
    }
}
