mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dawat_core::clock::SystemClock;
use dawat_core::config;

#[derive(Parser)]
#[command(name = "dawat")]
#[command(about = "Wedding invitation card, countdown, and calendar files in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the invitation card
    Show,
    /// Run the live countdown to the ceremony
    Countdown,
    /// Write an event as a .ics calendar file
    Save {
        /// Event kind to save (defaults to the first event on the card)
        kind: Option<String>,

        /// Directory to write the file into
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Ring one of the card's contacts
    Call {
        /// Contact name, matched loosely (defaults to the first contact)
        name: Option<String>,
    },
    /// Write an editable card file to the config directory
    Init {
        /// Overwrite an existing card file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show => commands::show::run(&config::load()?, &SystemClock),
        Commands::Countdown => commands::countdown::run(&config::load()?, &SystemClock).await,
        Commands::Save { kind, out } => {
            commands::save::run(&config::load()?, kind.as_deref(), out)
        }
        Commands::Call { name } => commands::call::run(&config::load()?, name.as_deref()),
        Commands::Init { force } => commands::init::run(force),
    }
}
