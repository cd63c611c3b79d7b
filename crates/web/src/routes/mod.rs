//! HTTP route handlers for the hub.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Hub page (hero, links, stories, share form, pending queue)
//! GET  /health                 - Health check
//! GET  /qr                     - QR code panel
//!
//! # Session
//! POST /session/sign-in        - Switch role (role + passcode form)
//! POST /session/sign-out       - Back to guest
//!
//! # Content (editor or admin)
//! POST /hero                   - Replace the hero message
//! POST /links                  - Add a link
//! POST /links/{id}/delete      - Remove a link
//!
//! # Stories
//! POST /stories                - Submit a testimony (anyone)
//! POST /stories/{id}/approve   - Publish a pending testimony (admin)
//! POST /stories/{id}/reject    - Discard a pending testimony (admin)
//! ```
//!
//! Form handlers answer with `303 See Other` back to `/`, optionally carrying
//! a `notice` query parameter the page turns into a banner.

pub mod content;
pub mod home;
pub mod qr;
pub mod session;
pub mod stories;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use testimony_hub_core::HubError;

use crate::error::Result;
use crate::state::AppState;

/// Banner shown on the hub page after a form action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    StorySubmitted,
    IncorrectPasscode,
}

impl Notice {
    /// Value carried in the `notice` query parameter.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::StorySubmitted => "story-submitted",
            Self::IncorrectPasscode => "incorrect-passcode",
        }
    }

    /// Parse a `notice` query value; unknown values show no banner.
    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "story-submitted" => Some(Self::StorySubmitted),
            "incorrect-passcode" => Some(Self::IncorrectPasscode),
            _ => None,
        }
    }

    /// Banner text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::StorySubmitted => testimony_hub_core::moderation::SUBMITTED_NOTICE,
            Self::IncorrectPasscode => "Incorrect passcode.",
        }
    }

    /// Redirect to the hub page showing this notice.
    #[must_use]
    pub fn redirect(self) -> Redirect {
        Redirect::to(&format!("/?notice={}", self.as_query()))
    }
}

/// Redirect to the hub page after a form action.
///
/// Blank required fields and ids that no longer exist leave the page as it
/// was, so they redirect like a success. Anything else becomes an error
/// response.
pub(crate) fn back_home<T>(result: std::result::Result<T, HubError>) -> Result<Redirect> {
    match result {
        Ok(_) => Ok(Redirect::to("/")),
        Err(e @ (HubError::Validation(_) | HubError::Moderation(_))) => {
            tracing::debug!(error = %e, "Form action declined");
            Ok(Redirect::to("/"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(session::sign_in))
        .route("/sign-out", post(session::sign_out))
}

/// Create the link routes router.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(content::add_link))
        .route("/{id}/delete", post(content::remove_link))
}

/// Create the story routes router.
pub fn story_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(stories::submit))
        .route("/{id}/approve", post(stories::approve))
        .route("/{id}/reject", post(stories::reject))
}

/// Create all routes for the hub.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/qr", get(qr::show))
        .route("/hero", post(content::set_hero))
        .nest("/session", session_routes())
        .nest("/links", link_routes())
        .nest("/stories", story_routes())
}
