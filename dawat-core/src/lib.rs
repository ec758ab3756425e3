//! Core types for the dawat wedding invitation.
//!
//! This crate provides everything the `dawat` binary renders:
//! - `clock` for instants anchored to the event's UTC+5 wall clock
//! - `countdown` for remaining-time arithmetic and display fields
//! - `event` and `ics` for add-to-calendar (.ics) export
//! - `invite` and `config` for the invitation card itself

pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod event;
pub mod ics;
pub mod invite;

// Re-export the everyday types at crate root for convenience
pub use clock::{Clock, FixedClock, PKT, SystemClock, pkt_datetime};
pub use countdown::{Countdown, remaining_seconds};
pub use error::{DawatError, DawatResult};
pub use event::Event;
pub use invite::{Contact, Invitation, InviteEvent};
