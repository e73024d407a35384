use anyhow::{Context, Result};
use bulkname_core::{rename_operation, Config, OutputFormatter};
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::cli::{OutputFormat, TransformArgs};
use crate::error_log::append_error_log;
use crate::plan::plan_options;

/// A rename that ran but did not complete cleanly: the batch was blocked by
/// conflicts or some entries failed. Maps to exit code 1.
#[derive(Debug)]
pub struct IncompleteRename {
    pub summary: String,
}

impl fmt::Display for IncompleteRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

impl std::error::Error for IncompleteRename {}

/// Confirmation was needed but stdin is not a terminal. Maps to exit code 2.
#[derive(Debug)]
pub struct NonInteractive;

impl fmt::Display for NonInteractive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cannot prompt for confirmation in non-interactive mode. Use --yes.")
    }
}

impl std::error::Error for NonInteractive {}

pub fn handle_rename(
    transform: &TransformArgs,
    dry_run: bool,
    auto_approve: bool,
    output: OutputFormat,
    config: &Config,
    use_color: Option<bool>,
    error_log: &Path,
) -> Result<()> {
    let options = plan_options(transform, use_color, output);
    let (result, preview) = rename_operation(
        &transform.paths,
        &options,
        config,
        dry_run,
        auto_approve,
        confirm_with_preview,
    )?;

    if let Some(preview) = preview {
        println!("{}", preview.trim_end());
    }
    println!("{}", result.format(output.into()).trim_end());

    let Some(report) = &result.report else {
        return Ok(());
    };

    if let Some(detail) = &report.error_detail {
        append_error_log(error_log, detail)?;
    }

    match &report.error_summary {
        Some(summary) => Err(IncompleteRename {
            summary: summary.clone(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Show the preview, then ask on the terminal.
fn confirm_with_preview(preview: Option<&str>) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(NonInteractive.into());
    }

    if let Some(preview) = preview {
        println!("{}", preview.trim_end());
    }
    get_user_confirmation()
}

fn get_user_confirmation() -> Result<bool> {
    print!("Apply? [y/N]: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
