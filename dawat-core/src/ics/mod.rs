//! ICS (.ics) generation for the invitation's events.

mod generate;

pub use generate::{generate_ics, ics_filename};
