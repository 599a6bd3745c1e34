use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxadvisor::core::log::init_logging;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxadvisor::AppCommand {
    fn from(cmd: Commands) -> fxadvisor::AppCommand {
        match cmd {
            Commands::Serve { listen } => fxadvisor::AppCommand::Serve { listen },
            Commands::Recommend { currencies } => fxadvisor::AppCommand::Recommend { currencies },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the HTTP recommendation service
    Serve {
        /// Address to listen on, overriding the configuration
        #[arg(short, long)]
        listen: Option<SocketAddr>,
    },
    /// Display the trailing week and a recommendation for each currency
    Recommend {
        /// Currency codes, e.g. GBP USD
        #[arg(required = true)]
        currencies: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxadvisor::cli::setup::run(cli.config_path.as_deref()),
        Some(cmd) => fxadvisor::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
