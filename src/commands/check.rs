use std::io::BufRead;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{CommentChecker, Diagnostic};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config};
use crate::error::CommentGuardError;
use crate::output::{
    CheckReport, ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::scanner::{Candidate, DirectoryScanner, EligibilityFilter, FileScanner};
use crate::{EXIT_CONFIG_ERROR, EXIT_PROBLEMS_FOUND, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config, write_output};

/// What happened to one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Not checked: rejected by content rules or unreadable during eligibility.
    Skipped,
    /// Fully checked.
    Checked(Vec<Diagnostic>),
    /// Reading stopped part way; diagnostics found before the error are kept.
    Failed {
        path: PathBuf,
        diagnostics: Vec<Diagnostic>,
        error: CommentGuardError,
    },
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the check command.
///
/// # Errors
/// Returns an error for configuration problems (detected before any file is read) or if
/// the output cannot be written. Per-file failures are logged and reflected in the exit code.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration and apply CLI/env overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 2. Compile the line exclusion pattern before touching any file
    let checker = CommentChecker::with_pattern(config.content.exclude.as_deref())?;

    // 3. Check files from stdin or from the walked inputs
    let outcomes = if args.files {
        let paths = read_file_list(std::io::stdin().lock())?;
        check_listed_files(&paths, &checker)
    } else {
        let scanner = DirectoryScanner::new(EligibilityFilter::new(&config.scanner)?);
        let mut candidates = Vec::new();
        for path in &args.paths {
            candidates.extend(scanner.scan(path)?);
        }
        check_discovered_files(&candidates, scanner.filter(), &checker)
    };

    // 4. Merge per-file results in discovery order
    let (report, failures) = build_report(outcomes);
    tracing::info!(
        "checked {} file(s), found {} problem(s)",
        report.files_scanned,
        report.diagnostics.len()
    );

    // 5. Format and write output
    let output = format_output(args.format, &report, output_color_mode(args, cli))?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(&report, failures, args.warn_only))
}

/// Apply CLI flags (and their environment variables) on top of the loaded config.
pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ref ext) = args.ext {
        config.scanner.extensions.clone_from(ext);
    }

    if let Some(ref skip_list) = args.skip_list {
        config.scanner.skip_list.clone_from(skip_list);
    }

    if args.skip_tests {
        config.scanner.skip_tests = true;
    }

    if args.vendor {
        config.scanner.vendor = true;
    }

    if let Some(ref exclude) = args.exclude {
        config.content.exclude = Some(exclude.clone()).filter(|e| !e.is_empty());
    }
}

/// Read one path per line, ignoring blank lines.
///
/// # Errors
/// Returns an error if the reader fails.
pub fn read_file_list<R: BufRead>(reader: R) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            paths.push(PathBuf::from(line));
        }
    }
    Ok(paths)
}

/// Files named on stdin are checked as given, without eligibility rules.
fn check_listed_files(paths: &[PathBuf], checker: &CommentChecker) -> Vec<FileOutcome> {
    paths
        .par_iter()
        .map(|path| {
            let mut diagnostics = Vec::new();
            match checker.check_file(path, &mut diagnostics) {
                Ok(_) => FileOutcome::Checked(diagnostics),
                Err(error) => FileOutcome::Failed {
                    path: path.clone(),
                    diagnostics,
                    error,
                },
            }
        })
        .collect()
}

fn check_discovered_files(
    paths: &[PathBuf],
    filter: &EligibilityFilter,
    checker: &CommentChecker,
) -> Vec<FileOutcome> {
    paths
        .par_iter()
        .map(|path| check_discovered_file(path, filter, checker))
        .collect()
}

fn check_discovered_file(
    path: &Path,
    filter: &EligibilityFilter,
    checker: &CommentChecker,
) -> FileOutcome {
    let content = match filter.evaluate(path) {
        Ok(Candidate::Check(content)) => content,
        Ok(Candidate::Skip(reason)) => {
            tracing::debug!("skipping {} ({})", path.display(), reason.as_str());
            return FileOutcome::Skipped;
        }
        Err(e) => {
            tracing::warn!("{e}");
            return FileOutcome::Skipped;
        }
    };

    let mut diagnostics = Vec::new();
    match checker.check_reader(content.as_slice(), path, &mut diagnostics) {
        Ok(count) => {
            tracing::debug!("{}: {count} problem(s)", path.display());
            FileOutcome::Checked(diagnostics)
        }
        Err(error) => FileOutcome::Failed {
            path: path.to_path_buf(),
            diagnostics,
            error,
        },
    }
}

fn build_report(outcomes: Vec<FileOutcome>) -> (CheckReport, usize) {
    let mut report = CheckReport::default();
    let mut failures = 0;

    for outcome in outcomes {
        match outcome {
            FileOutcome::Skipped => {}
            FileOutcome::Checked(diagnostics) => {
                report.files_scanned += 1;
                report.diagnostics.extend(diagnostics);
            }
            FileOutcome::Failed {
                path,
                diagnostics,
                error,
            } => {
                tracing::error!(kind = error.error_type(), "{}: {error}", path.display());
                report.files_scanned += 1;
                report.diagnostics.extend(diagnostics);
                failures += 1;
            }
        }
    }

    (report, failures)
}

/// Colors only ever go to the terminal, never into an `--output` file.
fn output_color_mode(args: &CheckArgs, cli: &Cli) -> ColorMode {
    if args.output.is_some() {
        ColorMode::Never
    } else {
        color_choice_to_mode(cli.color)
    }
}

fn format_output(
    format: OutputFormat,
    report: &CheckReport,
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn exit_code(report: &CheckReport, failures: usize, warn_only: bool) -> i32 {
    if failures > 0 {
        EXIT_CONFIG_ERROR
    } else if report.has_diagnostics() && !warn_only {
        EXIT_PROBLEMS_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
