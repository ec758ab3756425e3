//! Loading and writing the card's TOML file.
//!
//! The card lives at `~/.config/dawat/invite.toml`. A missing file is not
//! an error, the built-in card takes over; a file that exists but does not
//! parse is reported, since someone clearly meant to use it.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Serialize;

use crate::clock::PKT;
use crate::error::{DawatError, DawatResult};
use crate::invite::{Contact, Invitation};

pub fn config_path() -> DawatResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| DawatError::Config("Could not determine config directory".into()))?
        .join("dawat");

    Ok(config_dir.join("invite.toml"))
}

/// Load the card, falling back to the built-in one when no file exists.
pub fn load() -> DawatResult<Invitation> {
    load_or_builtin(&config_path()?)
}

fn load_or_builtin(path: &Path) -> DawatResult<Invitation> {
    if !path.exists() {
        return Ok(Invitation::builtin());
    }

    load_from(path)
}

/// Load a card from an explicit TOML file.
pub fn load_from(path: &Path) -> DawatResult<Invitation> {
    Config::builder()
        .add_source(File::from(path.to_path_buf()).required(false))
        .build()
        .map_err(|e| DawatError::Config(e.to_string()))?
        .try_deserialize()
        .map_err(|e| DawatError::Config(e.to_string()))
}

/// Write the card as an editable TOML file at `path`.
///
/// Event times are written as RFC 3339 strings carrying the PKT offset,
/// so the file shows the same wall-clock times the printed card does.
pub fn write_template(path: &Path, card: &Invitation) -> DawatResult<()> {
    let body =
        toml::to_string_pretty(&Template::from(card)).map_err(|e| DawatError::Config(e.to_string()))?;

    let contents = format!(
        "\
# dawat invitation card
#
# Edit this file and the CLI picks it up; delete it to fall back to the
# built-in card. Times are RFC 3339 with their UTC offset, so
# \"2026-02-01T19:00:00+05:00\" is 7 PM in Pakistan.

# Where `dawat save` puts .ics files (default: the current directory):
# ics_dir = \"~/Desktop\"

{body}"
    );

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| DawatError::Config(format!("Could not create config directory: {e}")))?;
    }

    std::fs::write(path, contents)
        .map_err(|e| DawatError::Config(format!("Could not write config file: {e}")))?;

    Ok(())
}

/// Serialization view of the card with wall-clock time strings.
#[derive(Serialize)]
struct Template<'a> {
    heading: &'a str,
    groom: &'a str,
    bride: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ics_dir: Option<String>,
    events: Vec<TemplateEvent<'a>>,
    contacts: &'a [Contact],
}

#[derive(Serialize)]
struct TemplateEvent<'a> {
    kind: &'a str,
    title: &'a str,
    description: &'a str,
    location: &'a str,
    start: String,
    end: String,
}

impl<'a> From<&'a Invitation> for Template<'a> {
    fn from(card: &'a Invitation) -> Self {
        Template {
            heading: &card.heading,
            groom: &card.groom,
            bride: &card.bride,
            ics_dir: card.ics_dir.as_ref().map(|d| d.to_string_lossy().into_owned()),
            events: card
                .events
                .iter()
                .map(|e| TemplateEvent {
                    kind: &e.kind,
                    title: &e.title,
                    description: &e.description,
                    location: &e.location,
                    start: e.start.with_timezone(&PKT).to_rfc3339(),
                    end: e.end.with_timezone(&PKT).to_rfc3339(),
                })
                .collect(),
            contacts: &card.contacts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn template_round_trips_the_builtin_card() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invite.toml");
        let card = Invitation::builtin();

        write_template(&path, &card).unwrap();
        let loaded = load_from(&path).unwrap();

        assert_eq!(loaded, card);
    }

    #[test]
    fn template_shows_wall_clock_times() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invite.toml");

        write_template(&path, &Invitation::builtin()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        assert!(
            contents.contains("2026-02-01T19:00:00+05:00"),
            "Times should be written in PKT, got:\n{}",
            contents
        );
        assert!(contents.starts_with("# dawat invitation card"));
    }

    #[test]
    fn template_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("invite.toml");

        write_template(&path, &Invitation::builtin()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_card_file_falls_back_to_the_builtin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invite.toml");

        let loaded = load_or_builtin(&path).unwrap();
        assert_eq!(loaded, Invitation::builtin());
    }

    #[test]
    fn unparseable_card_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invite.toml");
        std::fs::write(&path, "heading = [not valid").unwrap();

        let result = load_from(&path);
        assert!(matches!(result, Err(DawatError::Config(_))));
    }

    #[test]
    fn config_path_is_under_the_dawat_directory() {
        let path = config_path().unwrap();
        assert!(path.ends_with("dawat/invite.toml"));
    }
}
