use std::path::PathBuf;

use anyhow::{Context, Result};
use dawat_core::ics::{generate_ics, ics_filename};
use dawat_core::invite::Invitation;
use owo_colors::OwoColorize;

/// Write one card event as a .ics file.
///
/// An unknown kind matches nothing and writes nothing; asking for an event
/// that is not on the card is not an error. Failing to write a file that
/// should exist is.
pub fn run(invitation: &Invitation, kind: Option<&str>, out: Option<PathBuf>) -> Result<()> {
    let entry = match kind {
        Some(kind) => invitation.event(kind),
        None => invitation.events.first(),
    };
    let Some(entry) = entry else {
        return Ok(());
    };

    let dir = out
        .or_else(|| invitation.ics_output_dir())
        .unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(ics_filename(&entry.kind));

    let ics = generate_ics(&entry.to_event())?;
    std::fs::write(&path, ics).with_context(|| format!("Could not write {}", path.display()))?;

    println!("{}", format!("  Saved: {}", path.display()).green());

    Ok(())
}
