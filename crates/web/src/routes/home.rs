//! Hub page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use chrono::{DateTime, Local, Utc};
use serde::Deserialize;
use testimony_hub_core::{Link, Role, Testimony};
use tracing::instrument;

use crate::filters;
use crate::routes::Notice;
use crate::routes::qr::QrView;
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// Testimony display data for templates.
#[derive(Clone)]
pub struct StoryView {
    pub id: String,
    pub name: String,
    pub text: String,
    pub date: String,
}

impl From<&Testimony> for StoryView {
    fn from(testimony: &Testimony) -> Self {
        Self {
            id: testimony.id.to_string(),
            name: testimony.name.clone(),
            text: testimony.text.clone(),
            date: format_date(&testimony.date),
        }
    }
}

/// Link display data for templates.
#[derive(Clone)]
pub struct LinkView {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl From<&Link> for LinkView {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id.to_string(),
            title: link.title.clone(),
            url: link.url.to_string(),
        }
    }
}

/// Entry in the sign-in role selector.
#[derive(Clone)]
pub struct RoleOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Format a timestamp in the server's local time zone.
fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%B %-d, %Y %-I:%M %p")
        .to_string()
}

// =============================================================================
// Templates
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub notice: Option<String>,
}

/// Hub page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub role: &'static str,
    pub role_label: &'static str,
    pub signed_in: bool,
    pub can_edit: bool,
    pub roles: Vec<RoleOption>,
    pub notice: Option<&'static str>,
    pub hero_message: String,
    pub scene_url: Option<String>,
    pub links: Vec<LinkView>,
    pub published: Vec<StoryView>,
    /// `None` unless the viewer may moderate.
    pub pending: Option<Vec<StoryView>>,
    pub qr: QrView,
}

/// Display the hub page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> HomeTemplate {
    let notice = query
        .notice
        .as_deref()
        .and_then(Notice::from_query)
        .map(Notice::message);
    let config = state.config();
    let mut hub = state.hub().await;
    hub.reload_site_url();
    let role = hub.role();

    HomeTemplate {
        role: role.as_str(),
        role_label: role.label(),
        signed_in: role.requires_passcode(),
        can_edit: role.can_edit_content(),
        roles: Role::ALL
            .into_iter()
            .filter(|r| r.requires_passcode())
            .map(|r| RoleOption {
                value: r.as_str(),
                label: r.label(),
            })
            .collect(),
        notice,
        hero_message: hub.hero_message().to_owned(),
        scene_url: config.scene_url.clone(),
        links: hub.links().iter().map(LinkView::from).collect(),
        published: hub.published().iter().map(StoryView::from).collect(),
        pending: hub
            .visible_pending()
            .map(|pending| pending.iter().map(StoryView::from).collect()),
        qr: QrView::new(hub.qr_site_url(&config.base_url)),
    }
}
