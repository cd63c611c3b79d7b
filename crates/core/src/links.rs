//! Helpful links panel.

use crate::error::ValidationError;
use crate::types::{Link, LinkId, LinkUrl};

/// Ordered link collection, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList {
    links: Vec<Link>,
}

impl LinkList {
    /// Create a list from previously stored links.
    #[must_use]
    pub fn new(links: Vec<Link>) -> Self {
        Self { links }
    }

    /// All links, newest first.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Add a link at the front.
    ///
    /// The title is trimmed and the url normalized (see [`LinkUrl::parse`]).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if the title or url is blank.
    pub fn add(&mut self, title: &str, url: &str) -> Result<Link, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        let url = LinkUrl::parse(url)?;

        let link = Link {
            id: LinkId::generate(),
            title: title.to_owned(),
            url,
        };
        self.links.insert(0, link.clone());
        Ok(link)
    }

    /// Remove the link with `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: LinkId) -> bool {
        let before = self.links.len();
        self.links.retain(|link| link.id != id);
        self.links.len() != before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_url() {
        let mut list = LinkList::default();
        let link = list.add("Cal", "calendar.google.com").unwrap();
        assert!(link.url.as_str().starts_with("https://"));
        assert_eq!(list.links()[0], link);
    }

    #[test]
    fn test_add_goes_to_front() {
        let mut list = LinkList::default();
        list.add("First", "a.com").unwrap();
        let second = list.add(" Second ", "b.com").unwrap();
        assert_eq!(second.title, "Second");
        assert_eq!(list.links()[0].id, second.id);
        assert_eq!(list.links().len(), 2);
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut list = LinkList::default();
        assert_eq!(
            list.add("", "x.com"),
            Err(ValidationError::EmptyField("title"))
        );
        assert!(list.links().is_empty());
    }

    #[test]
    fn test_empty_url_rejected() {
        let mut list = LinkList::default();
        assert_eq!(
            list.add("Title", "   "),
            Err(ValidationError::EmptyField("url"))
        );
        assert!(list.links().is_empty());
    }

    #[test]
    fn test_remove() {
        let mut list = LinkList::default();
        let keep = list.add("Keep", "keep.org").unwrap();
        let drop = list.add("Drop", "drop.org").unwrap();

        assert!(list.remove(drop.id));
        assert_eq!(list.links(), &[keep]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut list = LinkList::default();
        list.add("Keep", "keep.org").unwrap();
        assert!(!list.remove(LinkId::generate()));
        assert_eq!(list.links().len(), 1);
    }
}
