//! Countdown arithmetic against the fixed event instant.
//!
//! Every tick recomputes from the absolute target rather than decrementing
//! a stored remainder, so a laptop waking from sleep shows the right
//! numbers on its very next refresh.

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Whole seconds from `now` until `target`, clamped to zero once the
/// target has passed. The countdown never goes negative.
pub fn remaining_seconds(now: DateTime<Utc>, target: DateTime<Utc>) -> u64 {
    (target - now).num_seconds().max(0) as u64
}

/// A remaining duration split into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Split a raw second count into days / hours / minutes / seconds.
    pub fn from_secs(total: u64) -> Self {
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    /// The countdown from `now` to `target`, all zeros once `target` passes.
    pub fn until(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        Self::from_secs(remaining_seconds(now, target))
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Display strings in day/hour/minute/second order, each zero-padded
    /// to two digits. Day counts past 99 keep all their digits.
    pub fn fields(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}
