//! dmrdir CLI - refresh the cached DMR directories and look up IDs.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dmrdir::config::Config;
use dmrdir::lookup::Directory;
use dmrdir::progress::ConsoleProgress;
use dmrdir::Refresher;

const USAGE: &str = "usage: dmrdir <command> [args]

commands:
  refresh              refresh both cached directories
  user <id>            print the callsign for a user ID
  repeater <id>        print the callsign for a repeater ID
  alias <id>           print `callsign, city, state` for a user ID
  alias-short <id>     print `callsign, name` for a user ID";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    run(&args).await
}

async fn run(args: &[String]) -> Result<()> {
    let config = Config::load()?;
    let user_file = config.user_file()?;
    let repeater_file = config.repeater_file()?;
    ensure_parent(&user_file)?;
    ensure_parent(&repeater_file)?;

    let refresher = Refresher::new()?;

    match args.get(1).map(String::as_str) {
        Some("refresh") | None => {
            refresher
                .ensure_fresh(&user_file, config.user_url(), ConsoleProgress)
                .await
                .context("Failed to refresh user directory")?;
            refresher
                .ensure_fresh(&repeater_file, config.repeater_url(), ConsoleProgress)
                .await
                .context("Failed to refresh repeater directory")?;
            info!("Both directories refreshed");
        }
        Some("user") => {
            let id = arg_id(args)?;
            refresher
                .ensure_fresh(&user_file, config.user_url(), ConsoleProgress)
                .await
                .context("Failed to refresh user directory")?;
            let dir = Directory::load(&user_file)?;
            match dir.user_callsign(id) {
                Some(callsign) => println!("{callsign}"),
                None => anyhow::bail!("No user with ID {id}"),
            }
        }
        Some("repeater") => {
            let id = arg_id(args)?;
            refresher
                .ensure_fresh(&repeater_file, config.repeater_url(), ConsoleProgress)
                .await
                .context("Failed to refresh repeater directory")?;
            let dir = Directory::load(&repeater_file)?;
            match dir.repeater_callsign(id) {
                Some(callsign) => println!("{callsign}"),
                None => anyhow::bail!("No repeater with ID {id}"),
            }
        }
        Some("alias") => {
            let id = arg_id(args)?;
            refresher
                .ensure_fresh(&user_file, config.user_url(), ConsoleProgress)
                .await
                .context("Failed to refresh user directory")?;
            let dir = Directory::load(&user_file)?;
            println!("{}", dir.user_alias(id));
        }
        Some("alias-short") => {
            let id = arg_id(args)?;
            refresher
                .ensure_fresh(&user_file, config.user_url(), ConsoleProgress)
                .await
                .context("Failed to refresh user directory")?;
            let dir = Directory::load(&user_file)?;
            println!("{}", dir.user_alias_short(id));
        }
        Some(other) => anyhow::bail!("Unknown command: {other}\n{USAGE}"),
    }

    Ok(())
}

fn arg_id(args: &[String]) -> Result<&str> {
    args.get(2)
        .map(String::as_str)
        .with_context(|| format!("Missing ID argument\n{USAGE}"))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory: {}", parent.display()))?;
    }
    Ok(())
}
