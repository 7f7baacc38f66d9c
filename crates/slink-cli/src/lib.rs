pub mod commands;
pub mod handlers;

use clap::Parser;

use commands::{Cli, Commands};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    slink_logger::init_logger(cli.quiet);

    match &cli.command {
        Commands::Link { dir, config, debug } => {
            handlers::LinkHandler::link(dir, config.as_deref(), *debug)
        }
        Commands::Status { dir, config } => {
            handlers::StatusHandler::status(dir, config.as_deref())
        }
        Commands::Unlink { dir, config, debug } => {
            handlers::UnlinkHandler::unlink(dir, config.as_deref(), *debug)
        }
        Commands::Init { dir, base, force } => {
            handlers::InitHandler::init(dir, base.as_deref(), *force)
        }
    }
}
