pub mod cli;
pub mod core;
pub mod providers;
pub mod server;
pub mod service;

use crate::core::config::AppConfig;
use anyhow::Result;
use std::net::SocketAddr;
use tracing::{debug, info};

pub enum AppCommand {
    Serve { listen: Option<SocketAddr> },
    Recommend { currencies: Vec<String> },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxadvisor starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Serve { listen } => server::serve(&config, listen).await,
        AppCommand::Recommend { currencies } => {
            let state = server::build_state(&config)?;
            cli::recommend::run(&state.service, &currencies).await
        }
    }
}
