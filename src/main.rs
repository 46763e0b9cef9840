// src/main.rs
use std::path::Path;

use clap::Parser;

mod cli;

use crate::cli::Args;
use passforge::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::from_default_env()
        .filter_level(config.log_level)
        .init();
    log::debug!("loaded config: {:?}", config);

    match args.command {
        Some(command) => cli::handlers::run_command(command, &config, args.json).await?,
        None => cli::menu::run_menu(&config).await?,
    }

    Ok(())
}
