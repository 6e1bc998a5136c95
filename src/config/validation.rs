use globset::Glob;
use regex::Regex;

use crate::error::{CommentGuardError, Result};

use super::Config;

/// Checks that every pattern in the configuration compiles.
///
/// # Errors
/// Returns an error naming the first invalid glob or regex.
pub fn validate_config(config: &Config) -> Result<()> {
    let globs = config
        .scanner
        .skip_list
        .iter()
        .chain(&config.scanner.test_patterns);
    for pattern in globs {
        Glob::new(pattern).map_err(|e| CommentGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    for ext in &config.scanner.extensions {
        if ext.trim_start_matches('.').is_empty() {
            return Err(CommentGuardError::Config(
                "scanner.extensions must not contain empty entries".to_string(),
            ));
        }
    }

    if let Some(pattern) = &config.content.exclude {
        Regex::new(pattern).map_err(|source| CommentGuardError::InvalidExcludePattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}
