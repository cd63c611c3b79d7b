//! Testimony moderation.
//!
//! Submissions land at the front of the pending queue. An admin either
//! approves one (it moves to the front of the published list) or rejects it
//! (it is dropped). Published testimonies never go back to pending.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::{ModerationError, ValidationError};
use crate::types::{Testimony, TestimonyId};

/// Acknowledgment shown after a successful submission.
pub const SUBMITTED_NOTICE: &str = "Thanks for sharing! Your story will appear once approved.";

/// Published and pending testimonies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryBoard {
    published: Vec<Testimony>,
    pending: Vec<Testimony>,
}

impl StoryBoard {
    /// Create a board from previously stored collections.
    ///
    /// The store file can be edited by hand, so ids are made unique again:
    /// the first occurrence in published wins, then the first in pending.
    #[must_use]
    pub fn new(published: Vec<Testimony>, pending: Vec<Testimony>) -> Self {
        let mut seen = HashSet::new();
        let mut keep_first = |t: &Testimony| {
            let fresh = seen.insert(t.id);
            if !fresh {
                tracing::warn!(id = %t.id, "Dropping duplicate stored testimony");
            }
            fresh
        };
        let published = published.into_iter().filter(&mut keep_first).collect();
        let pending = pending.into_iter().filter(&mut keep_first).collect();
        Self { published, pending }
    }

    /// Published testimonies, most recently approved first.
    #[must_use]
    pub fn published(&self) -> &[Testimony] {
        &self.published
    }

    /// Testimonies awaiting moderation, newest first.
    #[must_use]
    pub fn pending(&self) -> &[Testimony] {
        &self.pending
    }

    /// Whether `id` is in either collection.
    #[must_use]
    pub fn contains(&self, id: TestimonyId) -> bool {
        self.published.iter().chain(&self.pending).any(|t| t.id == id)
    }

    /// Submit a testimony stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if `text` is blank.
    pub fn submit(&mut self, name: &str, text: &str) -> Result<Testimony, ValidationError> {
        self.submit_at(name, text, Utc::now())
    }

    /// Submit a testimony stamped with `date`.
    ///
    /// Name and text are trimmed; a blank name becomes
    /// [`Testimony::ANONYMOUS`]. The new entry goes to the front of pending.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if `text` is blank.
    pub fn submit_at(
        &mut self,
        name: &str,
        text: &str,
        date: DateTime<Utc>,
    ) -> Result<Testimony, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyField("text"));
        }

        let name = match name.trim() {
            "" => Testimony::ANONYMOUS,
            trimmed => trimmed,
        };

        let testimony = Testimony {
            id: self.fresh_id(),
            name: name.to_owned(),
            text: text.to_owned(),
            date,
        };
        self.pending.insert(0, testimony.clone());
        Ok(testimony)
    }

    /// Move a pending testimony to the front of the published list.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::NotFound`] if `id` is not pending; neither
    /// collection changes.
    pub fn approve(&mut self, id: TestimonyId) -> Result<(), ModerationError> {
        let testimony = self.take_pending(id)?;
        self.published.insert(0, testimony);
        Ok(())
    }

    /// Drop a pending testimony.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::NotFound`] if `id` is not pending. Published
    /// testimonies are never touched.
    pub fn reject(&mut self, id: TestimonyId) -> Result<Testimony, ModerationError> {
        self.take_pending(id)
    }

    fn take_pending(&mut self, id: TestimonyId) -> Result<Testimony, ModerationError> {
        let index = self
            .pending
            .iter()
            .position(|t| t.id == id)
            .ok_or(ModerationError::NotFound(id))?;
        Ok(self.pending.remove(index))
    }

    fn fresh_id(&self) -> TestimonyId {
        loop {
            let id = TestimonyId::generate();
            if !self.contains(id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn board_with_pending(count: usize) -> StoryBoard {
        let mut board = StoryBoard::default();
        for n in 0..count {
            board.submit("", &format!("story {n}")).unwrap();
        }
        board
    }

    #[test]
    fn test_whitespace_body_is_rejected() {
        let mut board = board_with_pending(1);
        let before = board.clone();

        assert_eq!(
            board.submit("Ann", "  "),
            Err(ValidationError::EmptyField("text"))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_submit_goes_to_front_of_pending() {
        let mut board = board_with_pending(2);
        let story = board.submit("  Ruth ", "  I was carried through.\n").unwrap();

        assert_eq!(board.pending().len(), 3);
        assert_eq!(board.pending()[0], story);
        assert_eq!(story.name, "Ruth");
        assert_eq!(story.text, "I was carried through.");
        assert!(board.published().is_empty());
    }

    #[test]
    fn test_blank_name_is_anonymous() {
        let mut board = StoryBoard::default();
        let story = board.submit(" \t", "hello").unwrap();
        assert_eq!(story.name, "Anonymous");
    }

    #[test]
    fn test_submit_at_uses_given_time() {
        let mut board = StoryBoard::default();
        let date = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let story = board.submit_at("", "hello", date).unwrap();
        assert_eq!(story.date, date);
    }

    #[test]
    fn test_approve_moves_to_front_of_published() {
        let mut board = board_with_pending(2);
        let first = board.pending()[1].id;
        let second = board.pending()[0].id;

        board.approve(first).unwrap();
        board.approve(second).unwrap();

        assert!(board.pending().is_empty());
        let published: Vec<_> = board.published().iter().map(|t| t.id).collect();
        assert_eq!(published, vec![second, first]);
    }

    #[test]
    fn test_approve_unknown_id_changes_nothing() {
        let mut board = board_with_pending(1);
        let before = board.clone();
        let id = TestimonyId::generate();

        assert_eq!(board.approve(id), Err(ModerationError::NotFound(id)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_approve_twice_fails_second_time() {
        let mut board = board_with_pending(1);
        let id = board.pending()[0].id;

        board.approve(id).unwrap();
        assert!(board.approve(id).is_err());
        assert_eq!(board.published().iter().filter(|t| t.id == id).count(), 1);
    }

    #[test]
    fn test_reject_removes_from_everywhere() {
        let mut board = board_with_pending(2);
        let id = board.pending()[0].id;

        let rejected = board.reject(id).unwrap();
        assert_eq!(rejected.id, id);
        assert!(!board.contains(id));
        assert_eq!(board.pending().len(), 1);
    }

    #[test]
    fn test_reject_does_not_touch_published() {
        let mut board = board_with_pending(1);
        let id = board.pending()[0].id;
        board.approve(id).unwrap();

        assert_eq!(board.reject(id), Err(ModerationError::NotFound(id)));
        assert_eq!(board.published().len(), 1);
    }

    #[test]
    fn test_ids_are_unique_across_collections() {
        let mut board = board_with_pending(5);
        let id = board.pending()[2].id;
        board.approve(id).unwrap();

        let mut ids: Vec<_> = board
            .published()
            .iter()
            .chain(board.pending())
            .map(|t| t.id.to_string())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_stored_duplicates_are_dropped() {
        let mut board = board_with_pending(2);
        let id = board.pending()[1].id;
        board.approve(id).unwrap();

        // Hand-edited file: the approved story is still listed as pending
        let mut pending = board.pending().to_vec();
        pending.push(board.published()[0].clone());
        pending.push(pending[0].clone());
        let mut board = StoryBoard::new(board.published().to_vec(), pending);

        assert_eq!(board.published().len(), 1);
        assert_eq!(board.pending().len(), 1);
        assert_eq!(board.approve(id), Err(ModerationError::NotFound(id)));
        assert_eq!(board.published().iter().filter(|t| t.id == id).count(), 1);
    }
}
