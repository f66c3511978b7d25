//! API route configuration.

use crate::api::handlers::check_url_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /check-url` - Check a URL for known threats and fetch WHOIS data
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/check-url", post(check_url_handler))
}
