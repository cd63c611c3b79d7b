//! Link URL type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`LinkUrl`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkUrlError {
    /// The input is empty or whitespace only.
    #[error("url cannot be empty")]
    Empty,
}

/// A URL shown in the link list.
///
/// Input is trimmed, and `https://` is prepended when the value does not
/// already start with `http://` or `https://` (compared case-insensitively).
/// No further validation is done: whatever the editor typed is what visitors
/// are sent to.
///
/// ## Examples
///
/// ```
/// use testimony_hub_core::LinkUrl;
///
/// let url = LinkUrl::parse("calendar.google.com").unwrap();
/// assert_eq!(url.as_str(), "https://calendar.google.com");
///
/// let url = LinkUrl::parse("http://example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com");
///
/// assert!(LinkUrl::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LinkUrl(String);

impl LinkUrl {
    /// Scheme prepended to inputs without one.
    pub const DEFAULT_SCHEME: &'static str = "https://";

    /// Parse and normalize a `LinkUrl`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkUrlError::Empty`] if the trimmed input is empty.
    pub fn parse(s: &str) -> Result<Self, LinkUrlError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LinkUrlError::Empty);
        }

        if has_web_scheme(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Ok(Self(format!("{}{trimmed}", Self::DEFAULT_SCHEME)))
        }
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `LinkUrl` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn has_web_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        s.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

impl fmt::Display for LinkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LinkUrl {
    type Err = LinkUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LinkUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
