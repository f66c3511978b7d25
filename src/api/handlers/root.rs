//! Handler for the liveness endpoint.

/// Plain-text liveness message.
pub const LIVENESS_MESSAGE: &str = "URL safety check service is live";

/// Returns a plain-text liveness message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> &'static str {
    LIVENESS_MESSAGE
}
