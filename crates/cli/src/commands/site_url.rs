//! Saved site URL for the QR code.

use std::io::Write;

use testimony_hub_core::Hub;
use testimony_hub_web::config::parse_http_url;

use super::CommandError;

/// Save `url` as the address the QR code encodes.
///
/// # Errors
///
/// Returns `CommandError::InvalidUrl` unless `url` is an absolute http(s)
/// URL; nothing is saved in that case.
pub fn set(hub: &mut Hub, url: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let url = parse_http_url("site-url", url.trim())
        .map_err(|e| CommandError::invalid_url(url, e))?;
    hub.set_site_url(Some(&url));
    writeln!(out, "Site URL set to {url}")?;
    Ok(())
}

/// Clear the saved URL so the QR code falls back to `base_url`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn clear(hub: &mut Hub, base_url: &str, out: &mut impl Write) -> Result<(), CommandError> {
    hub.set_site_url(None);
    writeln!(out, "Site URL cleared; the QR code now points at {base_url}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_support::{open_hub, output};
    use tempfile::TempDir;

    #[test]
    fn test_set_and_clear() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hub.json");

        let mut hub = open_hub(&path);
        let mut buffer = Vec::new();
        set(&mut hub, " https://hub.example.org ", &mut buffer).unwrap();
        assert_eq!(output(buffer), "Site URL set to https://hub.example.org/\n");
        assert_eq!(
            open_hub(&path).saved_site_url(),
            Some("https://hub.example.org/")
        );

        clear(&mut hub, "http://127.0.0.1:3000/", &mut Vec::new()).unwrap();
        assert!(open_hub(&path).saved_site_url().is_none());
    }

    #[test]
    fn test_rejects_relative_url() {
        let dir = TempDir::new().unwrap();
        let mut hub = open_hub(&dir.path().join("hub.json"));

        let err = set(&mut hub, "hub.example.org", &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CommandError::InvalidUrl(url, _) if url == "hub.example.org"));
        assert!(hub.saved_site_url().is_none());
    }
}
