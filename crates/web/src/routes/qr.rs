//! QR code panel.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use testimony_hub_core::qr;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// QR code display data for templates.
#[derive(Clone)]
pub struct QrView {
    pub site_url: String,
    pub image_url: String,
    pub download_name: &'static str,
    pub size: u32,
}

impl QrView {
    #[must_use]
    pub fn new(site_url: &str) -> Self {
        Self {
            site_url: site_url.to_owned(),
            image_url: qr::image_url(site_url),
            download_name: qr::QR_DOWNLOAD_NAME,
            size: qr::QR_SIZE,
        }
    }
}

/// QR panel template.
#[derive(Template, WebTemplate)]
#[template(path = "qr.html")]
pub struct QrTemplate {
    pub qr: QrView,
}

/// Display the QR code for the hub's public URL.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> QrTemplate {
    let mut hub = state.hub().await;
    hub.reload_site_url();
    let qr = QrView::new(hub.qr_site_url(&state.config().base_url));
    QrTemplate { qr }
}
