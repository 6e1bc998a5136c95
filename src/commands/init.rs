use std::fs;

use crate::{CommentGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CommentGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# comment-guard configuration file

[scanner]
# File or directory names skipped anywhere in the tree (globs allowed)
skip_list = [".git", "target", "node_modules", "vendor"]

# Check files under vendor/ even though it is in skip_list
vendor = false

# Only check these extensions (empty = every text file)
# extensions = ["go", "rs"]

# Skip test files
skip_tests = false

# File name globs identifying test files
test_patterns = ["*_test.go", "*_test.rs", "*_tests.rs"]

[content]
# Lines matching this regex are ignored, as if they were not comments
# exclude = "TODO|FIXME"
"#
    .to_string()
}
