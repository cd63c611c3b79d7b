//! Hub configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `HUB_HOST` - Bind address (default: 127.0.0.1)
//! - `HUB_PORT` - Listen port (default: 3000)
//! - `HUB_BASE_URL` - Public URL of the hub, encoded in the QR code unless a
//!   site URL was saved (default: `http://127.0.0.1:3000/`)
//! - `HUB_STORE_PATH` - JSON store file (default: testimony-hub.json)
//! - `HUB_EDITOR_PASSCODE` - Passcode for the editor role (default: joel123)
//! - `HUB_ADMIN_PASSCODE` - Passcode for the admin role (default: admin123)
//! - `HUB_SCENE_URL` - Embeddable 3D scene shown beside the hero message
//! - `HUB_STATIC_DIR` - Stylesheet directory (default: crates/web/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use testimony_hub_core::Passcodes;
use testimony_hub_core::session::{DEFAULT_ADMIN_PASSCODE, DEFAULT_EDITOR_PASSCODE};
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Hub application configuration.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL of the hub
    pub base_url: String,
    /// Path of the JSON store file
    pub store_path: PathBuf,
    /// Role passcodes (redacted in `Debug`)
    pub passcodes: Passcodes,
    /// Optional 3D scene embed URL
    pub scene_url: Option<String>,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl HubConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HUB_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HUB_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("HUB_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HUB_PORT".to_string(), e.to_string()))?;
        let base_url = parse_http_url(
            "HUB_BASE_URL",
            &get_env_or_default("HUB_BASE_URL", "http://127.0.0.1:3000/"),
        )?;
        let scene_url = get_optional_env("HUB_SCENE_URL")
            .map(|url| parse_http_url("HUB_SCENE_URL", &url))
            .transpose()?;

        let passcodes = Passcodes::new(
            get_secret_or_default("HUB_EDITOR_PASSCODE", DEFAULT_EDITOR_PASSCODE),
            get_secret_or_default("HUB_ADMIN_PASSCODE", DEFAULT_ADMIN_PASSCODE),
        );

        Ok(Self {
            host,
            port,
            base_url,
            store_path: get_env_or_default("HUB_STORE_PATH", "testimony-hub.json").into(),
            passcodes,
            scene_url,
            static_dir: get_env_or_default("HUB_STATIC_DIR", "crates/web/static").into(),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration for tests and local experiments: defaults everywhere,
    /// storing to `store_path`.
    #[must_use]
    pub fn local(store_path: impl Into<PathBuf>) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://127.0.0.1:3000/".to_string(),
            store_path: store_path.into(),
            passcodes: Passcodes::default(),
            scene_url: None,
            static_dir: PathBuf::from("crates/web/static"),
            sentry_dsn: None,
            sentry_environment: None,
        }
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

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Get a passcode, falling back to the built-in default.
fn get_secret_or_default(key: &str, default: &str) -> SecretString {
    SecretString::from(get_env_or_default(key, default))
}

/// Validate that `value` is an absolute http(s) URL, returning its
/// normalized form.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` naming `key` if the URL does not parse
/// or uses another scheme.
pub fn parse_http_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url_normalizes() {
        assert_eq!(
            parse_http_url("TEST_URL", "https://hub.example.org").unwrap(),
            "https://hub.example.org/"
        );
    }

    #[test]
    fn test_parse_http_url_rejects_relative() {
        let err = parse_http_url("TEST_URL", "hub.example.org").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "TEST_URL"));
    }

    #[test]
    fn test_parse_http_url_rejects_other_schemes() {
        assert!(parse_http_url("TEST_URL", "ftp://hub.example.org/").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = HubConfig::local("hub.json");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_debug_redacts_passcodes() {
        let debug_output = format!("{:?}", HubConfig::local("hub.json"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("admin123"));
    }
}
