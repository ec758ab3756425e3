//! Instants anchored to the wedding's wall clock.
//!
//! The card pins its times in Pakistan Standard Time (UTC+5) and every
//! instant is normalized to UTC on construction, so two machines in
//! different timezones always agree on the absolute event time.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Pakistan Standard Time, the fixed UTC+5 offset the card is anchored to.
/// A full timezone database is deliberately out of scope.
pub const PKT: FixedOffset = FixedOffset::east_opt(5 * 60 * 60).expect("Not a valid offset");

/// Current-time source.
///
/// The binary uses [`SystemClock`]; tests pin time with [`FixedClock`].
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the host.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a known instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Build the UTC instant for the given wall-clock fields read in PKT.
///
/// `pkt_datetime(2026, 2, 1, 19, 0, 0)` is 2026-02-01T14:00:00Z everywhere,
/// no matter what the local timezone is. Out-of-range fields (month 13,
/// February 30th) return `None` — there is no rolling over into the
/// adjacent month the way lenient date parsers do it.
pub fn pkt_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<DateTime<Utc>> {
    PKT.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pkt_evening_is_utc_afternoon() {
        // 19:00 in UTC+5 is 14:00 in UTC
        let dt = pkt_datetime(2026, 2, 1, 19, 0, 0).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 1, 14, 0, 0).unwrap());
    }

    #[test]
    fn pkt_midnight_crosses_the_date_line_backwards() {
        let dt = pkt_datetime(2026, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 31, 19, 0, 0).unwrap());
    }

    #[test]
    fn normalization_is_environment_independent() {
        // Pinning the epoch value catches any dependence on the local zone
        // of whatever machine runs the tests.
        let dt = pkt_datetime(2026, 2, 1, 19, 0, 0).unwrap();
        assert_eq!(dt.timestamp(), 1_769_954_400);
    }

    #[test]
    fn out_of_range_fields_are_rejected_not_rolled_over() {
        assert!(pkt_datetime(2026, 13, 1, 0, 0, 0).is_none());
        assert!(pkt_datetime(2026, 2, 30, 0, 0, 0).is_none());
        assert!(pkt_datetime(2026, 2, 1, 24, 0, 0).is_none());
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
