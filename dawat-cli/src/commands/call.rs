use anyhow::Result;
use dawat_core::invite::Invitation;

use crate::render::Render;

/// Hand a contact's `tel:` URL to the system handler.
///
/// A name that matches nobody on the card does nothing, same as the
/// unknown-kind case in `save`.
pub fn run(invitation: &Invitation, name: Option<&str>) -> Result<()> {
    let contact = match name {
        Some(name) => invitation.contact(name),
        None => invitation.contacts.first(),
    };
    let Some(contact) = contact else {
        return Ok(());
    };

    println!("  {}", contact.render());

    // A machine with no tel: handler is not an error; the call is best effort.
    let _ = open::that(contact.tel_url());

    Ok(())
}
