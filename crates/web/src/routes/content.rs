//! Hero message and link editing (editor or admin).

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use testimony_hub_core::LinkId;
use tracing::instrument;

use crate::error::Result;
use crate::routes::back_home;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HeroForm {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Replace the hero message. A blank message keeps the current one.
#[instrument(skip(state))]
pub async fn set_hero(
    State(state): State<AppState>,
    Form(form): Form<HeroForm>,
) -> Result<Redirect> {
    let mut hub = state.hub().await;
    let outcome = hub.set_hero_message(&form.message).map(str::len);
    back_home(outcome)
}

/// Add a link to the front of the list.
#[instrument(skip(state))]
pub async fn add_link(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect> {
    let result = state.hub().await.add_link(&form.title, &form.url);
    back_home(result)
}

/// Remove a link. Unknown ids are ignored.
#[instrument(skip(state))]
pub async fn remove_link(
    State(state): State<AppState>,
    Path(id): Path<LinkId>,
) -> Result<Redirect> {
    let result = state.hub().await.remove_link(id);
    back_home(result)
}
