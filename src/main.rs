//! Tank Pilot entry point
//!
//! Talks to the game server over stdin/stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tank_pilot::{Client, LineTransport, PolicyConfig};

#[derive(Parser, Debug)]
#[command(name = "tank-pilot")]
#[command(about = "Turn-based tank battle client")]
struct Cli {
    /// JSON file overriding policy parameters
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the effective policy config and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PolicyConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PolicyConfig::default(),
    };

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    log::info!("Tank Pilot starting...");
    let mut client =
        Client::connect(LineTransport::stdio(), config).context("setup handshake failed")?;
    client.run().context("game loop aborted")?;
    Ok(())
}
