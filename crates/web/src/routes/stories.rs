//! Testimony submission and moderation.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use testimony_hub_core::TestimonyId;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::routes::{Notice, back_home};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// Submit a testimony for review.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<StoryForm>,
) -> Result<Redirect> {
    let result = state.hub().await.submit_testimony(&form.name, &form.text);
    match result {
        Ok(testimony) => {
            add_breadcrumb("stories", &format!("Submitted {}", testimony.id));
            Ok(Notice::StorySubmitted.redirect())
        }
        Err(e) => back_home::<()>(Err(e)),
    }
}

/// Publish a pending testimony.
#[instrument(skip(state))]
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<TestimonyId>,
) -> Result<Redirect> {
    let result = state.hub().await.approve(id);
    back_home(result)
}

/// Discard a pending testimony.
#[instrument(skip(state))]
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<TestimonyId>,
) -> Result<Redirect> {
    let result = state.hub().await.reject(id);
    back_home(result)
}
