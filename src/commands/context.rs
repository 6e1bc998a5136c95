use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::ColorMode;
use crate::{CommentGuardError, Result};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load the configuration for a command.
///
/// An explicit `config_path` must exist. Without one, the default search order applies.
///
/// # Errors
/// Returns an error if the config file is missing, unreadable or invalid TOML.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) if !path.exists() => Err(CommentGuardError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        ))),
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Write formatted output to a file, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
