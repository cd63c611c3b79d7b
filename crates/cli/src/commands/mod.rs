//! CLI command implementations.
//!
//! Each command writes its report to the given writer so it can be checked
//! in tests.

pub mod site_url;
pub mod stories;
pub mod store;

use testimony_hub_core::HubError;
use testimony_hub_web::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Rejected by the hub (wrong passcode, unknown id).
    #[error(transparent)]
    Hub(#[from] HubError),

    /// Site URL is not an absolute http(s) URL.
    #[error("Invalid site URL {0}: {1}")]
    InvalidUrl(String, String),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    fn invalid_url(url: &str, err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidEnvVar(_, reason) => Self::InvalidUrl(url.to_owned(), reason),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use std::path::Path;

    use testimony_hub_core::{Hub, Passcodes};
    use testimony_hub_web::JsonFileStore;

    pub(crate) fn open_hub(path: &Path) -> Hub {
        Hub::open(JsonFileStore::open(path), Passcodes::default())
    }

    pub(crate) fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }
}
