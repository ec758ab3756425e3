//! TUI rendering traits for dawat types.
//!
//! Extension traits that add colored terminal rendering to dawat-core
//! types using owo_colors.

use chrono::{DateTime, Utc};
use dawat_core::clock::PKT;
use dawat_core::countdown::Countdown;
use dawat_core::invite::Contact;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Countdown {
    fn render(&self) -> String {
        let [days, hours, minutes, seconds] = self.fields();
        format!(
            "{} {}  {} {}  {} {}  {} {}",
            days.bold(),
            "Days".dimmed(),
            hours.bold(),
            "Hours".dimmed(),
            minutes.bold(),
            "Minutes".dimmed(),
            seconds.bold(),
            "Seconds".dimmed(),
        )
    }
}

impl Render for Contact {
    fn render(&self) -> String {
        format!("{} {}", self.name, self.phone.dimmed())
    }
}

/// An event instant on the card, in PKT wall-clock words:
/// "Sunday, February 1, 2026 at 7:00 PM PKT".
pub fn format_pkt(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&PKT)
        .format("%A, %B %-d, %Y at %-I:%M %p PKT")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pkt_formatting_spells_out_the_ceremony_time() {
        let dt = Utc.with_ymd_and_hms(2026, 2, 1, 14, 0, 0).unwrap();
        assert_eq!(format_pkt(dt), "Sunday, February 1, 2026 at 7:00 PM PKT");
    }

    #[test]
    fn countdown_labels_appear_in_display_order() {
        let line = Countdown::from_secs(90_061).render();
        let pos = |label: &str| line.find(label).unwrap();
        assert!(pos("Days") < pos("Hours"));
        assert!(pos("Hours") < pos("Minutes"));
        assert!(pos("Minutes") < pos("Seconds"));
    }

    #[test]
    fn countdown_rendering_is_stable_for_equal_inputs() {
        let c = Countdown::from_secs(12_345);
        assert_eq!(c.render(), c.render());
    }
}
