//! Integration tests for submitting and moderating testimonies over HTTP.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use testimony_hub_core::{Role, TestimonyId};
use testimony_hub_integration_tests::TestApp;

async fn submit(app: &TestApp, name: &str, text: &str) -> TestimonyId {
    let response = app
        .post_form("/stories", &[("name", name), ("text", text)])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/?notice=story-submitted"));
    app.state().hub().await.pending()[0].id
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_submission_lands_in_pending() {
    let app = TestApp::new();
    let id = submit(&app, "  Ruth  ", "  Grace found me.  ").await;

    let hub = app.state().hub().await;
    assert_eq!(hub.pending().len(), 1);
    assert_eq!(hub.pending()[0].id, id);
    assert_eq!(hub.pending()[0].name, "Ruth");
    assert_eq!(hub.pending()[0].text, "Grace found me.");
    assert_eq!(hub.published().len(), 1);
}

#[tokio::test]
async fn test_submission_notice() {
    let app = TestApp::new();
    submit(&app, "", "Hello").await;

    let page = app.get("/?notice=story-submitted").await;
    assert!(
        page.body
            .contains("Thanks for sharing! Your story will appear once approved.")
    );
    // Not published yet
    assert!(!page.body.contains("<p>Hello</p>"));
}

#[tokio::test]
async fn test_blank_submission_is_declined() {
    let app = TestApp::new();
    let response = app
        .post_form("/stories", &[("name", "Ann"), ("text", "   ")])
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
    assert!(app.state().hub().await.pending().is_empty());
}

#[tokio::test]
async fn test_blank_name_becomes_anonymous() {
    let app = TestApp::new();
    submit(&app, "   ", "No name given").await;
    assert_eq!(app.state().hub().await.pending()[0].name, "Anonymous");
}

// =============================================================================
// Moderation
// =============================================================================

#[tokio::test]
async fn test_admin_approves_submission() {
    let app = TestApp::new();
    let id = submit(&app, "Ruth", "Grace found me.").await;
    app.sign_in("admin", "admin123").await;

    let page = app.get("/").await;
    assert!(page.body.contains(&format!("/stories/{id}/approve")));

    let response = app.post_form(&format!("/stories/{id}/approve"), &[]).await;
    assert_eq!(response.location(), Some("/"));

    {
        let hub = app.state().hub().await;
        assert!(hub.pending().is_empty());
        assert_eq!(hub.published()[0].id, id);
        assert_eq!(hub.published().iter().filter(|t| t.id == id).count(), 1);
    }

    let page = app.get("/").await;
    assert!(page.body.contains("Grace found me."));
    assert!(page.body.contains("No submissions awaiting review."));
}

#[tokio::test]
async fn test_admin_rejects_submission() {
    let app = TestApp::new();
    let id = submit(&app, "", "Spam").await;
    app.sign_in("admin", "admin123").await;

    let response = app.post_form(&format!("/stories/{id}/reject"), &[]).await;
    assert_eq!(response.location(), Some("/"));

    let hub = app.state().hub().await;
    assert!(hub.pending().iter().all(|t| t.id != id));
    assert!(hub.published().iter().all(|t| t.id != id));
}

#[tokio::test]
async fn test_guest_and_editor_cannot_moderate() {
    let app = TestApp::new();
    let id = submit(&app, "", "Pending story").await;

    let response = app.post_form(&format!("/stories/{id}/approve"), &[]).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    app.sign_in("editor", "joel123").await;
    let response = app.post_form(&format!("/stories/{id}/reject"), &[]).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let hub = app.state().hub().await;
    assert_eq!(hub.pending().len(), 1);
    assert_eq!(hub.published().len(), 1);
}

#[tokio::test]
async fn test_approving_unknown_id_changes_nothing() {
    let app = TestApp::new();
    submit(&app, "", "Pending story").await;
    app.sign_in("admin", "admin123").await;

    let unknown = TestimonyId::generate();
    let response = app
        .post_form(&format!("/stories/{unknown}/approve"), &[])
        .await;
    assert_eq!(response.location(), Some("/"));

    let hub = app.state().hub().await;
    assert_eq!(hub.pending().len(), 1);
    assert_eq!(hub.published().len(), 1);
}

#[tokio::test]
async fn test_malformed_id_is_rejected() {
    let app = TestApp::new();
    app.sign_in("admin", "admin123").await;
    let response = app.post_form("/stories/not-a-uuid/approve", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_wrong_passcode_keeps_role() {
    let app = TestApp::new();
    let response = app
        .post_form("/session/sign-in", &[("role", "admin"), ("passcode", "wrong")])
        .await;

    assert_eq!(response.location(), Some("/?notice=incorrect-passcode"));
    assert_eq!(app.state().hub().await.role(), Role::Guest);

    let page = app.get("/?notice=incorrect-passcode").await;
    assert!(page.body.contains("Incorrect passcode."));
}

#[tokio::test]
async fn test_sign_out_returns_to_guest() {
    let app = TestApp::new();
    app.sign_in("admin", "admin123").await;
    assert_eq!(app.state().hub().await.role(), Role::Admin);

    let response = app.post_form("/session/sign-out", &[]).await;
    assert_eq!(response.location(), Some("/"));
    assert_eq!(app.state().hub().await.role(), Role::Guest);
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let app = TestApp::new();
    let response = app
        .post_form("/session/sign-in", &[("role", "superuser"), ("passcode", "x")])
        .await;
    assert!(response.status.is_client_error());
    assert_eq!(app.state().hub().await.role(), Role::Guest);
}
