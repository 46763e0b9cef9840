// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripted use)
    #[arg(long)]
    pub json: bool,

    /// Command to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
