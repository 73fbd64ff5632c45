// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stagehand CLI
//!
//! Offline developer tooling: classify an exported item description the way
//! the SDK would at runtime, and manage the persisted SDK settings.
#![allow(clippy::print_stdout)]

mod classify;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use stagehand_config_fs::FsConfigStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stagehand", author, version, about, long_about = None)]
struct Args {
    /// Settings directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify an exported `<item/>` description or JSON fixture (`-` reads stdin)
    Classify {
        /// XML or JSON file, or `-` for stdin
        input: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show or edit SDK settings
    #[command(subcommand)]
    Config(settings::ConfigCommand),
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn open_store(dir: Option<PathBuf>) -> Result<FsConfigStore> {
    Ok(match dir {
        Some(dir) => FsConfigStore::at(dir)?,
        None => FsConfigStore::new()?,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    match args.cmd {
        Command::Classify { input, json } => classify::run(&input, json),
        Command::Config(cmd) => settings::run(&open_store(args.config_dir)?, cmd),
    }
}
