//! Handler for the URL check endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use tracing::debug;

use crate::api::dto::check_url::{CheckUrlRequest, CheckUrlResponse};
use crate::application::services::CheckError;
use crate::error::AppError;
use crate::state::AppState;

/// Checks a URL against the threat service and attaches WHOIS data for its domain.
///
/// # Endpoint
///
/// `POST /check-url`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "safe": true,
///   "domain": "example.com",
///   "message": "URL is safe",
///   "whois": { "registrar": "Example Registrar" }
/// }
/// ```
///
/// Unsafe URLs carry `"safe": false` and a `threats` array instead of `message`.
/// A failed WHOIS lookup never fails the request; `whois` is then
/// `{"error": "WHOIS lookup failed"}`.
///
/// # Errors
///
/// - **400** `{"error": "URL is required"}` - body missing, unreadable, or `url` absent, null,
///   empty, `false` or `0`
/// - **400** `{"error": "Invalid URL"}` - `url` is any other non-string, or not an absolute URL with a host
/// - **500** `{"error": "Failed to check URL"}` - the threat service could not be consulted
pub async fn check_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckUrlRequest>, JsonRejection>,
) -> Result<Json<CheckUrlResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable check request body");
            CheckUrlRequest::default()
        }
    };

    let url = match request.url {
        None | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::String(url)) => url,
        Some(_) => return Err(CheckError::InvalidUrl.into()),
    };

    let verdict = state.url_check_service.check(&url).await?;

    Ok(Json(verdict.into()))
}
