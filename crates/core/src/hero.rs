//! Hero message shown at the top of the page.

/// Single editable message, overwritten in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroMessage {
    message: String,
}

impl HeroMessage {
    #[must_use]
    pub fn new(message: String) -> Self {
        Self { message }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message with the trimmed `draft`.
    ///
    /// A blank draft keeps the previous message. Returns the message in
    /// effect afterwards.
    pub fn set(&mut self, draft: &str) -> &str {
        let draft = draft.trim();
        if !draft.is_empty() {
            draft.clone_into(&mut self.message);
        }
        &self.message
    }
}
