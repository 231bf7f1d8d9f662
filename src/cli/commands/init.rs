use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes the default
/// configuration file. An existing file is only replaced with `--force`.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        Config::init(&path, *force)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
