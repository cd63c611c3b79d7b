//! Store summary and reset.

use std::io::Write;

use testimony_hub_core::{Hub, qr};

use super::CommandError;

/// Print a summary of everything in the store.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show(hub: &Hub, base_url: &str, out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "Role:          {}", hub.role().label())?;
    writeln!(out, "Main message:  {}", hub.hero_message())?;
    writeln!(out, "Published:     {}", hub.published().len())?;
    writeln!(out, "Pending:       {}", hub.pending().len())?;

    let site_url = hub.qr_site_url(base_url);
    match hub.saved_site_url() {
        Some(_) => writeln!(out, "Site URL:      {site_url}")?,
        None => writeln!(out, "Site URL:      {site_url} (from HUB_BASE_URL)")?,
    }
    writeln!(out, "QR image:      {}", qr::image_url(site_url))?;

    writeln!(out, "Links ({}):", hub.links().len())?;
    for link in hub.links() {
        writeln!(out, "  {}  {} -> {}", link.id, link.title, link.url)?;
    }
    Ok(())
}

/// Overwrite the store with seed content.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn reset(hub: &mut Hub, out: &mut impl Write) -> Result<(), CommandError> {
    hub.reset();
    writeln!(out, "Store reset to seed content.")?;
    Ok(())
}
