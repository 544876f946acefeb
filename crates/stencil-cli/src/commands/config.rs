//! `stencil config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `stencil config get`.
pub const KNOWN_KEYS: [&str; 4] = [
    "defaults.template",
    "defaults.cicd",
    "templates.path",
    "output.no_color",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(e.into()),
            })?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

/// Value of a known key; unset keys print as an empty string.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    }
    Ok(config.get(key).unwrap_or_default())
}
