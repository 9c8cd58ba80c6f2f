mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{decode, init, simulate, DecodeArgs, InitArgs, SimulateArgs};
use inkbridge_session::SessionConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// inkbridge - drive an embedded rich-text editor over its message protocol
#[derive(Parser, Debug)]
#[command(name = "inkbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default inkbridge.config.json
    Init(InitArgs),

    /// Run host and editor in-process and print the final state
    Simulate(SimulateArgs),

    /// Check how a receiver would read a raw message
    Decode(DecodeArgs),
}

/// `RUST_LOG` wins; otherwise the configured level, otherwise `info`.
fn init_tracing(cwd: &Path) {
    let fallback = SessionConfig::load(cwd)
        .map(|config| config.log_level)
        .unwrap_or_else(|_| SessionConfig::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            init_tracing(&cwd);
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Simulate(args) => simulate(args, &cwd),
                Command::Decode(args) => decode(args),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
