//! Integration tests for Testimony Hub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p testimony-hub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `pages` - Rendered page content per role, headers, static files
//! - `moderation` - Submit, approve, and reject through the HTTP forms
//! - `content` - Link and hero message editing
//! - `live_server` - A real listener and HTTP client over a store file
//!
//! Most tests drive the router in-process with `tower::ServiceExt::oneshot`
//! against a hub backed by `MemoryStore`; nothing touches the network.

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use testimony_hub_core::{Hub, MemoryStore};
use testimony_hub_web::{AppState, HubConfig, app};
use tower::ServiceExt;

/// Stylesheet directory of the web crate.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../web/static");

/// Router plus a handle on its state, for inspecting the hub directly.
pub struct TestApp {
    router: Router,
    state: AppState,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Target of a redirect, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Fresh hub with seed content, default passcodes, guest role.
    #[must_use]
    pub fn new() -> Self {
        let mut config = HubConfig::local("unused.json");
        config.static_dir = STATIC_DIR.into();
        let hub = Hub::open(MemoryStore::new(), config.passcodes.clone());
        Self::with_state(AppState::new(config, hub))
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self {
            router: app(state.clone()),
            state,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not UTF-8.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Send a POST with an `application/x-www-form-urlencoded` body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not UTF-8.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }

    /// Switch roles through the sign-in form.
    ///
    /// # Panics
    ///
    /// Panics if the passcode is rejected.
    pub async fn sign_in(&self, role: &str, passcode: &str) {
        let response = self
            .post_form("/session/sign-in", &[("role", role), ("passcode", passcode)])
            .await;
        assert_eq!(response.location(), Some("/"), "sign-in as {role} failed");
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).expect("UTF-8 body"),
        }
    }
}
