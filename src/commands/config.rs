use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::validate_config;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads a configuration file and checks every pattern in it.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has bad patterns.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    let config = load_config(Some(config_path), false)?;
    validate_config(&config)
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Text => Ok(toml::to_string_pretty(&config)?),
        ConfigOutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&config)?;
            json.push('\n');
            Ok(json)
        }
    }
}
