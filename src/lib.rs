//! grocery-co2 library root.
//! Exposes the CLI parser, the high-level run() function and the
//! ingestion/aggregation modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod session;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use session::Session;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            let path = cli.config.clone().unwrap_or_else(Config::config_file);
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
        Commands::About => cli::commands::about::handle(),
        Commands::Dataset { .. } => {
            let mut session = Session::open(cfg, cli.source.as_ref())?;
            cli::commands::dataset::handle(&cli.command, cfg, &mut session)
        }
        Commands::Basket { .. } => {
            let mut session = Session::open(cfg, cli.source.as_ref())?;
            cli::commands::basket::handle(&cli.command, &mut session)
        }
        Commands::Trends { .. } => {
            let mut session = Session::open(cfg, cli.source.as_ref())?;
            cli::commands::trends::handle(&cli.command, cfg, &mut session)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing file no longer parses
    if matches!(cli.command, Commands::Init { .. }) {
        logging::init(cli.verbose, &Config::default());
        return cli::commands::init::handle(&cli);
    }

    let cfg = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &cfg);

    dispatch(&cli, &cfg)
}
