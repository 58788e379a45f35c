// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port (overrides PORT / WEB_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// API server bind address (overrides WEB_ADDRESS)
    #[arg(long)]
    pub address: Option<String>,
}
