//! The invitation card: couple, events, and contacts.
//!
//! A compiled-in card ships with the binary so `dawat` works out of the box;
//! an optional `invite.toml` (see [`crate::config`]) replaces it wholesale.

use crate::clock::pkt_datetime;
use crate::event::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One event on the card, addressable by its `kind` slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteEvent {
    /// Stable lookup key, e.g. `walima`. Also names the saved .ics file.
    pub kind: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl InviteEvent {
    /// The schedulable event this card entry describes.
    pub fn to_event(&self) -> Event {
        Event {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Someone guests can ring about the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    /// The phone number as a dialable `tel:` URL. Anything that is not a
    /// digit or a leading `+` (spaces, dashes) is stripped.
    pub fn tel_url(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// The whole card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub heading: String,
    pub groom: String,
    pub bride: String,
    /// Where `save` writes .ics files when no `--out` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ics_dir: Option<PathBuf>,
    #[serde(default)]
    pub events: Vec<InviteEvent>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Invitation {
    /// The card compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            heading: "Walima Ceremony".to_string(),
            groom: "Muhammad Arshad Irshad".to_string(),
            bride: "Daughter of Rao Muhammad Sarwar".to_string(),
            ics_dir: None,
            events: vec![InviteEvent {
                kind: "walima".to_string(),
                title: "Walima Ceremony - Muhammad Arshad Irshad".to_string(),
                description: "Walima Ceremony of Muhammad Arshad Irshad with Daughter of Rao \
                              Muhammad Sarwar. IN SHA ALLAH."
                    .to_string(),
                location: "Nawab Marquee, Burewala Road, Vehari".to_string(),
                start: pkt_datetime(2026, 2, 1, 19, 0, 0).expect("valid builtin start"),
                end: pkt_datetime(2026, 2, 1, 21, 0, 0).expect("valid builtin end"),
            }],
            contacts: vec![
                Contact {
                    name: "Rao Muhammad Sarwar".to_string(),
                    phone: "+92 300 0000000".to_string(),
                },
                Contact {
                    name: "Muhammad Irshad".to_string(),
                    phone: "+92 301 0000000".to_string(),
                },
            ],
        }
    }

    /// Look up an event by its kind slug. Unknown kinds are not an error,
    /// they simply match nothing.
    pub fn event(&self, kind: &str) -> Option<&InviteEvent> {
        self.events.iter().find(|e| e.kind == kind)
    }

    /// The countdown target: the earliest event start on the card.
    pub fn first_event_start(&self) -> Option<DateTime<Utc>> {
        self.events.iter().map(|e| e.start).min()
    }

    /// Case-insensitive contact lookup by (partial) name.
    pub fn contact(&self, name: &str) -> Option<&Contact> {
        let needle = name.to_lowercase();
        self.contacts
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
    }

    /// The configured .ics output directory, tilde-expanded.
    pub fn ics_output_dir(&self) -> Option<PathBuf> {
        let dir = self.ics_dir.as_ref()?;
        let full_path_str = shellexpand::tilde(&dir.to_string_lossy()).into_owned();

        Some(PathBuf::from(full_path_str))
    }
}
