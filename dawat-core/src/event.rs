//! The calendar event an invitation card hands to the ICS encoder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One schedulable event, with its instants already normalized to UTC.
///
/// The encoder writes fields through as given. Keeping `end` at or after
/// `start` is the caller's responsibility; importing calendars differ in
/// how they treat an inverted range, and this crate does not paper over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
