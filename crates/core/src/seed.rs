//! Content a brand-new hub starts with.

use chrono::Utc;

use crate::types::{Link, LinkId, LinkUrl, Testimony, TestimonyId};

/// Hero message before anyone edits it.
pub const HERO_MESSAGE: &str =
    "Jesus died on the cross and rose again — this is a place to share that hope.";

const LINKS: [(&str, &str); 2] = [
    ("Community Calendar", "https://calendar.google.com"),
    ("Daily Devotional", "https://www.bible.com/"),
];

const FIRST_STORY: &str =
    "I found hope in a difficult season and want to encourage others to keep going.";

/// Starting link list.
#[must_use]
pub fn links() -> Vec<Link> {
    LINKS
        .iter()
        .filter_map(|(title, url)| {
            let url = LinkUrl::parse(url).ok()?;
            Some(Link {
                id: LinkId::generate(),
                title: (*title).to_owned(),
                url,
            })
        })
        .collect()
}

/// Starting published testimonies, dated now.
#[must_use]
pub fn published() -> Vec<Testimony> {
    vec![Testimony {
        id: TestimonyId::generate(),
        name: Testimony::ANONYMOUS.to_owned(),
        text: FIRST_STORY.to_owned(),
        date: Utc::now(),
    }]
}
