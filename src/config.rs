//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Listener
//!
//! ```bash
//! export PORT="8080"              # binds 0.0.0.0:8080
//! export LISTEN="127.0.0.1:8080"  # full address, takes priority over PORT
//! ```
//!
//! ## Required Variables
//!
//! - `GOOGLE_SAFE_BROWSING_API_KEY` - Safe Browsing API key
//!
//! ## Optional Variables
//!
//! - `PORT` / `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `SAFE_BROWSING_URL` - Threat-matching endpoint (default: Google's `threatMatches:find`)
//! - `SAFE_BROWSING_CLIENT_ID` - Client id reported upstream (default: `safe-url-check`)
//! - `WHOIS_TIMEOUT_SECS` - Upper bound for one registration lookup (default: `10`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::infrastructure::safe_browsing::{DEFAULT_CLIENT_ID, DEFAULT_ENDPOINT};
use crate::infrastructure::whois::DEFAULT_LOOKUP_TIMEOUT_SECS;

const DEFAULT_PORT: u16 = 3000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Credential for the threat service. Never logged in full.
    pub safe_browsing_api_key: String,
    pub safe_browsing_url: String,
    pub safe_browsing_client_id: String,
    pub whois_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, or if `PORT` or
    /// `WHOIS_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr().context("Failed to load listen address")?;

        let safe_browsing_api_key = env::var("GOOGLE_SAFE_BROWSING_API_KEY")
            .context("GOOGLE_SAFE_BROWSING_API_KEY must be set")?;

        let safe_browsing_url =
            env::var("SAFE_BROWSING_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let safe_browsing_client_id =
            env::var("SAFE_BROWSING_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string());
        let whois_timeout_secs = match env::var("WHOIS_TIMEOUT_SECS") {
            Ok(secs) => secs.trim().parse::<u64>().with_context(|| {
                format!("WHOIS_TIMEOUT_SECS must be a whole number of seconds, got '{secs}'")
            })?,
            Err(_) => DEFAULT_LOOKUP_TIMEOUT_SECS,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            safe_browsing_api_key,
            safe_browsing_url,
            safe_browsing_client_id,
            whois_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:{PORT}`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> Result<String> {
        if let Ok(listen) = env::var("LISTEN") {
            return Ok(listen);
        }

        let port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number between 0 and 65535, got '{port}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(format!("0.0.0.0:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - the API key is empty
    /// - `safe_browsing_url` is not an http(s) URL
    /// - the client id is empty
    /// - `whois_timeout_secs` is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.safe_browsing_api_key.trim().is_empty() {
            anyhow::bail!("GOOGLE_SAFE_BROWSING_API_KEY must not be empty");
        }

        match url::Url::parse(&self.safe_browsing_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => anyhow::bail!(
                "SAFE_BROWSING_URL must be an http(s) URL, got '{}'",
                self.safe_browsing_url
            ),
        }

        if self.safe_browsing_client_id.trim().is_empty() {
            anyhow::bail!("SAFE_BROWSING_CLIENT_ID must not be empty");
        }

        if self.whois_timeout_secs == 0 {
            anyhow::bail!("WHOIS_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Safe Browsing endpoint: {}", self.safe_browsing_url);
        tracing::info!(
            "  Safe Browsing API key: {}",
            mask_secret(&self.safe_browsing_api_key)
        );
        tracing::info!("  Safe Browsing client id: {}", self.safe_browsing_client_id);
        tracing::info!("  WHOIS timeout: {}s", self.whois_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping a short prefix for identification.
///
/// - `AIzaSyExampleKey123` → `AIza***`
/// - short secrets are fully masked
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
