//! Moderation of pending testimonies.
//!
//! Approve and reject check the admin passcode for this one command only;
//! the role stored for the web page is left as it is.

use std::io::Write;

use chrono::Local;
use testimony_hub_core::{Hub, Role, TestimonyId};

use super::CommandError;

/// List pending testimonies, newest first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn pending(hub: &Hub, out: &mut impl Write) -> Result<(), CommandError> {
    if hub.pending().is_empty() {
        writeln!(out, "No submissions awaiting review.")?;
        return Ok(());
    }

    for testimony in hub.pending() {
        let date = testimony.date.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        writeln!(out, "{}  {}  {}", testimony.id, date, testimony.name)?;
        for line in testimony.text.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

/// Publish a pending testimony.
///
/// # Errors
///
/// Returns `CommandError::Hub` on a wrong passcode or an id that is not
/// pending.
pub fn approve(
    hub: &mut Hub,
    id: TestimonyId,
    passcode: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let grant = hub.authorize(Role::Admin, passcode)?;
    hub.approve_with(grant, id)?;
    writeln!(out, "Approved {id}")?;
    Ok(())
}

/// Discard a pending testimony.
///
/// # Errors
///
/// Returns `CommandError::Hub` on a wrong passcode or an id that is not
/// pending.
pub fn reject(
    hub: &mut Hub,
    id: TestimonyId,
    passcode: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let grant = hub.authorize(Role::Admin, passcode)?;
    hub.reject_with(grant, id)?;
    writeln!(out, "Rejected {id}")?;
    Ok(())
}
