use anyhow::Result;
use chrono::Datelike;
use dawat_core::clock::Clock;
use dawat_core::countdown::Countdown;
use dawat_core::invite::Invitation;
use owo_colors::OwoColorize;

use crate::render::{Render, format_pkt};

/// Print the whole card: heading, couple, events, a countdown snapshot,
/// and the contacts.
pub fn run(invitation: &Invitation, clock: &impl Clock) -> Result<()> {
    let now = clock.now();

    println!();
    println!("  {}", invitation.heading.bold());
    println!("  {} {} {}", invitation.groom, "with".dimmed(), invitation.bride);

    for event in &invitation.events {
        println!();
        println!("  {}", event.title);
        println!("  {}", format_pkt(event.start));
        println!("  {}", event.location.dimmed());
    }

    if let Some(target) = invitation.first_event_start() {
        println!();
        println!("  {}", Countdown::until(now, target).render());
    }

    if !invitation.contacts.is_empty() {
        println!();
        for contact in &invitation.contacts {
            println!("  {}", contact.render());
        }
    }

    println!();
    println!("  {}", format!("© {}", now.year()).dimmed());

    Ok(())
}
