//! Cross-origin request middleware.

use tower_http::cors::CorsLayer;

/// Allows requests from any origin, with any method and headers.
///
/// The service is called directly from browser frontends and exposes no
/// credentials-bearing endpoints.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
