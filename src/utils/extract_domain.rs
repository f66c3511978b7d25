//! Domain extraction from user-supplied URLs.

use url::Url;

/// Extracts the hostname from an arbitrary URL string.
///
/// Parsing follows WHATWG URL semantics (via the [`url`] crate), so the result is:
/// - lowercased, with IDNA applied (`BÜCHER.example` → `xn--bcher-kva.example`)
/// - stripped of scheme, credentials, port, path, query and fragment
/// - bracketed for IPv6 literals (e.g., `[::1]`)
///
/// Returns `None` for anything that is not an absolute URL with a non-empty host:
/// empty strings, relative references, free text, or host-less URLs such as
/// `mailto:` links.
///
/// # Examples
///
/// ```
/// use url_safety_check::utils::extract_domain::extract_domain;
///
/// assert_eq!(extract_domain("http://example.com/path").as_deref(), Some("example.com"));
/// assert_eq!(extract_domain("not a url"), None);
/// ```
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Some(host.to_string()),
        _ => None,
    }
}
