use clap::Parser;
use std::path::Path;
use anyhow::Context;

mod cli;
mod api;
mod core;
mod models;
mod crypto;
mod generators;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::{handle_check, handle_generate, print_report};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (mut config, config_warnings) = Config::load();
    if let Some(port) = args.port {
        config.web_port = port;
    }
    if let Some(address) = args.address.clone() {
        config.web_address = address;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    for warning in &config_warnings {
        log::warn!("{}", warning);
    }

    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate(generate_args)) => {
            let generated = handle_generate(&generate_args)?;
            for (password, report) in &generated {
                println!("{}", password);
                print_report(report);
            }
        }
        Some(CliCommand::Check { password }) => {
            let report = handle_check(&password)?;
            print_report(&report);
        }
        Some(CliCommand::Serve) | None => {
            log::info!("🔐 Starting password generator API");
            println!("🚀 API running on port {}", config.web_port);
            println!("📍 Open: http://localhost:{}", config.web_port);
            api::start_server(&config.web_address, config.web_port)
                .await
                .with_context(|| format!("API server failed on {}:{}", config.web_address, config.web_port))?;
        }
    }

    Ok(())
}
