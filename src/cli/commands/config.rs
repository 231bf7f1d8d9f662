use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let state = if path.exists() { "" } else { " (not found, using defaults)" };
        info(format!("Configuration file: {}{state}", path.display()));

        if *print_config {
            println!("\n{}", serde_yaml::to_string(cfg)?);
        }
    }
    Ok(())
}
