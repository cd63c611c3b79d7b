//! Testimony Hub CLI - store management and moderation from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Summarize the store
//! th-cli show
//!
//! # Point the QR code at the public address
//! th-cli site-url set https://hub.example.org/
//!
//! # Review and moderate submissions
//! th-cli stories pending
//! th-cli stories approve 6f1c0d2e-5d1b-4a8e-9b53-1f4f8d3c2a10 --passcode admin123
//!
//! # Start over with the seed content
//! th-cli reset
//! ```
//!
//! # Commands
//!
//! - `show` - Role, hero message, links, story counts, and QR target
//! - `site-url` - Save or clear the URL encoded in the QR code
//! - `stories` - List, approve, or reject pending testimonies
//! - `reset` - Rewrite every key with seed content
//!
//! The store file comes from `--store`, else `HUB_STORE_PATH`, else
//! `testimony-hub.json`. Passcodes come from the same environment as the
//! web server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use testimony_hub_core::{Hub, TestimonyId};
use testimony_hub_web::{HubConfig, JsonFileStore};

mod commands;

#[derive(Parser)]
#[command(name = "th-cli")]
#[command(author, version, about = "Testimony Hub CLI tools")]
struct Cli {
    /// JSON store file (overrides `HUB_STORE_PATH`)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the store contents
    Show,
    /// Manage the URL encoded in the QR code
    SiteUrl {
        #[command(subcommand)]
        action: SiteUrlAction,
    },
    /// Review pending testimonies
    Stories {
        #[command(subcommand)]
        action: StoriesAction,
    },
    /// Overwrite the store with seed content and sign out
    Reset,
}

#[derive(Subcommand)]
enum SiteUrlAction {
    /// Save the canonical site URL
    Set {
        /// Absolute http(s) URL
        url: String,
    },
    /// Clear the saved URL and fall back to `HUB_BASE_URL`
    Clear,
}

#[derive(Subcommand)]
enum StoriesAction {
    /// List testimonies awaiting review
    Pending,
    /// Publish a pending testimony
    Approve {
        /// Testimony ID
        id: TestimonyId,

        /// Admin passcode
        #[arg(short, long)]
        passcode: String,
    },
    /// Discard a pending testimony
    Reject {
        /// Testimony ID
        id: TestimonyId,

        /// Admin passcode
        #[arg(short, long)]
        passcode: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = HubConfig::from_env()?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }

    let mut hub = Hub::open(
        JsonFileStore::open(&config.store_path),
        config.passcodes.clone(),
    );
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Show => commands::store::show(&hub, &config.base_url, &mut out)?,
        Commands::SiteUrl { action } => match action {
            SiteUrlAction::Set { url } => commands::site_url::set(&mut hub, &url, &mut out)?,
            SiteUrlAction::Clear => {
                commands::site_url::clear(&mut hub, &config.base_url, &mut out)?;
            }
        },
        Commands::Stories { action } => match action {
            StoriesAction::Pending => commands::stories::pending(&hub, &mut out)?,
            StoriesAction::Approve { id, passcode } => {
                commands::stories::approve(&mut hub, id, &passcode, &mut out)?;
            }
            StoriesAction::Reject { id, passcode } => {
                commands::stories::reject(&mut hub, id, &passcode, &mut out)?;
            }
        },
        Commands::Reset => commands::store::reset(&mut hub, &mut out)?,
    }
    Ok(())
}
