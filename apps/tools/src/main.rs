use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use split_core::{load_settings, roster, Session};
use tracing_subscriber::EnvFilter;

mod shell;

#[derive(Parser, Debug)]
#[command(name = "splitbill", about = "Friends ledger and bill splitting from the terminal")]
struct Cli {
    /// Settings file; defaults to ./splitbill.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the starting roster and balances.
    Roster,
    /// Read commands from stdin, one per line.
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let session = Session::from_settings(&settings).context("invalid friends roster in settings")?;

    match cli.command {
        Command::Roster => {
            for row in roster::rows(&session) {
                println!("{} {}: {}", row.id, row.name, row.message());
            }
        }
        Command::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = shell::Shell::new(session, &settings.avatar_base_url);
            shell.run(stdin.lock(), BufWriter::new(stdout.lock()))?;
        }
    }

    Ok(())
}
