//! Role sign-in and sign-out.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use testimony_hub_core::{HubError, Role};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::routes::Notice;
use crate::state::AppState;

/// Sign-in form. Not `Debug`, so the passcode never reaches a log line.
#[derive(Deserialize)]
pub struct SignInForm {
    pub role: Role,
    #[serde(default)]
    pub passcode: String,
}

/// Switch to the selected role if the passcode matches.
#[instrument(skip(state, form))]
pub async fn sign_in(
    State(state): State<AppState>,
    Form(form): Form<SignInForm>,
) -> Result<Redirect> {
    let result = state.hub().await.set_role(form.role, &form.passcode);
    match result {
        Ok(role) => {
            add_breadcrumb("session", &format!("Signed in as {role}"));
            Ok(Redirect::to("/"))
        }
        Err(HubError::Auth(_)) => Ok(Notice::IncorrectPasscode.redirect()),
        Err(e) => Err(e.into()),
    }
}

/// Return to guest.
#[instrument(skip(state))]
pub async fn sign_out(State(state): State<AppState>) -> Redirect {
    state.hub().await.sign_out();
    add_breadcrumb("session", "Signed out");
    Redirect::to("/")
}
