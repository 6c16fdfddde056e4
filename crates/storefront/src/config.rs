//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CURLS_API_URL` - Order/payment API base URL (default: <https://curls-api.onrender.com>)
//! - `CURLS_API_TIMEOUT_SECS` - Request timeout for the order API (default: 15)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "https://curls-api.onrender.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Order/payment API configuration
    pub api: OrderApiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Remote order API that records orders and brokers gateway payments.
#[derive(Debug, Clone)]
pub struct OrderApiConfig {
    /// Base URL; endpoint paths are appended to it
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = parse_var("STOREFRONT_HOST", &get_or("STOREFRONT_HOST", "127.0.0.1"))?;
        let port = parse_var("STOREFRONT_PORT", &get_or("STOREFRONT_PORT", "3000"))?;
        let base_url = parse_api_url(&get_or("CURLS_API_URL", DEFAULT_API_URL))?;
        let timeout_secs: u64 =
            parse_var("CURLS_API_TIMEOUT_SECS", &get_or("CURLS_API_TIMEOUT_SECS", "15"))?;
        let sentry_sample_rate =
            parse_var("SENTRY_SAMPLE_RATE", &get_or("SENTRY_SAMPLE_RATE", "1.0"))?;
        let sentry_traces_sample_rate = parse_var(
            "SENTRY_TRACES_SAMPLE_RATE",
            &get_or("SENTRY_TRACES_SAMPLE_RATE", "0.1"),
        )?;

        Ok(Self {
            host,
            port,
            api: OrderApiConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable value, naming the variable in the error.
fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse the order API URL. Only absolute http(s) URLs are accepted.
fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let url = parse_var::<Url>("CURLS_API_URL", value)?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            "CURLS_API_URL".to_string(),
            format!("must be an http(s) URL, got {value}"),
        ));
    }
    Ok(url)
}
