//! Link list entries.

use serde::{Deserialize, Serialize};

use super::{LinkId, LinkUrl};

/// A titled link in the "Helpful Links" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub title: String,
    pub url: LinkUrl,
}
