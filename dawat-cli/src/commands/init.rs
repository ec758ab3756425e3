use anyhow::Result;
use dawat_core::config::{config_path, write_template};
use dawat_core::invite::Invitation;
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Scaffold an editable card file, prompting for the headline fields.
pub fn run(force: bool) -> Result<()> {
    let path = config_path()?;

    if path.exists() && !force {
        println!(
            "{}",
            format!("  {} already exists (use --force to overwrite)", path.display()).yellow()
        );
        return Ok(());
    }

    let mut card = Invitation::builtin();

    card.heading = Input::new()
        .with_prompt("  Heading")
        .default(card.heading)
        .interact_text()?;
    card.groom = Input::new()
        .with_prompt("  Groom")
        .default(card.groom)
        .interact_text()?;
    card.bride = Input::new()
        .with_prompt("  Bride")
        .default(card.bride)
        .interact_text()?;

    write_template(&path, &card)?;

    println!();
    println!("{}", format!("  Wrote: {}", path.display()).green());
    println!("{}", "  Edit the file to change events and contacts.".dimmed());

    Ok(())
}
