use std::time::Duration;

use anyhow::Result;
use dawat_core::clock::Clock;
use dawat_core::countdown::Countdown;
use dawat_core::invite::Invitation;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::time::{self, MissedTickBehavior};

use crate::render::{Render, format_pkt};

/// Run the live countdown until interrupted.
///
/// Every tick recomputes from the absolute target, so after a suspend the
/// line snaps to the right value instead of replaying missed seconds.
/// Reaching zero does not stop it; the line keeps showing all zeros.
pub async fn run(invitation: &Invitation, clock: &impl Clock) -> Result<()> {
    let Some(target) = invitation.first_event_start() else {
        println!("{}", "No events on the card".dimmed());
        return Ok(());
    };

    println!();
    println!("  {}", format_pkt(target).bold());
    println!();

    let line = countdown_line();
    let mut interval = time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        line.set_message(Countdown::until(clock.now(), target).render());
    }
}

fn countdown_line() -> ProgressBar {
    let line = ProgressBar::new_spinner();
    line.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("  {msg} {spinner}")
            .unwrap(),
    );
    line.enable_steady_tick(Duration::from_millis(80));
    line
}
