//! ICS file generation.

use crate::error::DawatResult;
use crate::event::Event;
use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike};
use uuid::Uuid;

/// Generate .ics content for an event.
///
/// Output is a single-VEVENT VCALENDAR with CRLF line endings, ready to be
/// written to disk and opened by any calendar app. Text escaping is left to
/// the `icalendar` crate.
pub fn generate_ics(event: &Event) -> DawatResult<String> {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&fresh_uid());
    ics_event.summary(&event.title);

    // DTSTAMP - required by RFC 5545; the moment this file was produced
    ics_event.add_property("DTSTAMP", compact_utc(Utc::now()));

    ics_event.add_property("DTSTART", compact_utc(event.start));
    ics_event.add_property("DTEND", compact_utc(event.end));

    ics_event.description(&event.description);
    ics_event.location(&event.location);

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    // Post-process to brand the output and drop default-valued lines
    Ok(brand_ics(&cal.to_string()))
}

/// The on-disk filename for an event kind, e.g. `walima-event.ics`.
pub fn ics_filename(kind: &str) -> String {
    format!("{}-event.ics", slug::slugify(kind))
}

/// A UID that is unique per generated file: epoch milliseconds for rough
/// ordering plus UUID entropy, at this crate's domain.
fn fresh_uid() -> String {
    format!("{}-{}@dawat", Utc::now().timestamp_millis(), Uuid::new_v4().simple())
}

/// UTC instant in the ICS compact form, e.g. `20260201T140000Z`.
fn compact_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Clean up ICS output from the icalendar crate
/// - Replace the crate's PRODID with the invitation's own
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn brand_ics(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:-//Dawat//Wedding Invitation//EN\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
