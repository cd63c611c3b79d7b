//! Error types for hub operations.
//!
//! None of these are fatal. The shell turns each of them into a no-op, a
//! notice, or a refusal; store failures never leave the store adapter.

use thiserror::Error;

use crate::types::{LinkUrlError, Role, TestimonyId};

/// A required field was empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    EmptyField(&'static str),
}

impl From<LinkUrlError> for ValidationError {
    fn from(err: LinkUrlError) -> Self {
        match err {
            LinkUrlError::Empty => Self::EmptyField("url"),
        }
    }
}

/// Switching to a privileged role failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("incorrect passcode")]
    InvalidPasscode,
}

/// A moderation transition could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModerationError {
    /// The id is not in the pending collection.
    #[error("no pending testimony with id {0}")]
    NotFound(TestimonyId),
}

/// Reading or writing the key-value store failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing storage refused the write (quota, read-only medium, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error returned by [`crate::Hub`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Moderation(#[from] ModerationError),

    /// The current role is not allowed to perform the action.
    #[error("{role} may not {action}")]
    Forbidden { role: Role, action: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ValidationError::EmptyField("title").to_string(),
            "title is required"
        );
        assert_eq!(AuthError::InvalidPasscode.to_string(), "incorrect passcode");

        let err = HubError::Forbidden {
            role: Role::Guest,
            action: "approve testimonies",
        };
        assert_eq!(err.to_string(), "guest may not approve testimonies");
    }

    #[test]
    fn test_link_url_error_maps_to_url_field() {
        let err: ValidationError = LinkUrlError::Empty.into();
        assert_eq!(err, ValidationError::EmptyField("url"));
    }
}
