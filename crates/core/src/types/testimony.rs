//! Testimony records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TestimonyId;

/// A story shared by a visitor.
///
/// Field names match the stored JSON layout (`id`, `name`, `text`, `date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimony {
    pub id: TestimonyId,
    /// Display name; `"Anonymous"` when the visitor left it blank.
    pub name: String,
    pub text: String,
    /// When the story was submitted.
    pub date: DateTime<Utc>,
}

impl Testimony {
    /// Name shown for submissions without one.
    pub const ANONYMOUS: &'static str = "Anonymous";
}
