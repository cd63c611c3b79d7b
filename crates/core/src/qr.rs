//! QR code links to the hub.
//!
//! The bitmap is produced by an external image service; the hub only builds
//! the request URL.

/// External QR image endpoint.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Rendered QR image size in pixels (square).
pub const QR_SIZE: u32 = 300;

/// File name offered when downloading the QR image.
pub const QR_DOWNLOAD_NAME: &str = "site-qr.png";

/// Pick the URL the QR code should point at.
///
/// A non-blank saved URL wins; otherwise `fallback` (the hub's public base
/// URL) is used.
#[must_use]
pub fn site_url<'a>(saved: &'a str, fallback: &'a str) -> &'a str {
    if saved.trim().is_empty() {
        fallback
    } else {
        saved
    }
}

/// Image URL encoding `site_url` as a QR code.
#[must_use]
pub fn image_url(site_url: &str) -> String {
    format!(
        "{QR_ENDPOINT}?size={QR_SIZE}x{QR_SIZE}&data={}",
        urlencoding::encode(site_url)
    )
}
