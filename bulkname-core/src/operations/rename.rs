use super::{prepare_plan, PlanOptions};
use crate::config::Config;
use crate::error::OperationError;
use crate::output::RenameResult;
use crate::preview::{render_report, should_use_color};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Rename operation - plans, asks the caller for approval and commits.
///
/// `approve` is called once, with the rendered preview, right before the
/// batch is committed; returning `false` aborts without touching anything.
/// It is not called for dry runs, empty plans or plans with duplicates.
/// When `auto_approve` is set it is never called and the preview is returned
/// ahead of the report instead.
pub fn rename_operation<F>(
    paths: &[PathBuf],
    options: &PlanOptions,
    config: &Config,
    dry_run: bool,
    auto_approve: bool,
    approve: F,
) -> Result<(RenameResult, Option<String>)>
where
    F: FnOnce(Option<&str>) -> Result<bool>,
{
    let prepared = prepare_plan(paths, options, config)?;
    let mut files = prepared.files;
    let plan = prepared.plan;
    let mut preview_output = prepared.preview;

    if plan.pending_count() == 0 {
        return Ok((
            RenameResult {
                module: prepared.label,
                committed: false,
                plan,
                report: None,
            },
            Some("Nothing to rename.".to_string()),
        ));
    }

    if dry_run {
        return Ok((
            RenameResult {
                module: prepared.label,
                committed: false,
                plan,
                report: None,
            },
            preview_output,
        ));
    }

    if !plan.duplicates.is_empty() {
        return Err(OperationError::DuplicateNames(plan.duplicates.len()).into());
    }

    // The caller shows the preview itself while asking
    if !auto_approve && !approve(preview_output.take().as_deref())? {
        return Ok((
            RenameResult {
                module: prepared.label,
                committed: false,
                plan,
                report: None,
            },
            Some("Aborted.".to_string()),
        ));
    }

    let report = files
        .rename(&plan.proposed)
        .context("Failed to rename files")?;
    info!(
        renamed = report.renamed_count(),
        failed = report.failed_count(),
        conflicts = report.conflicts.len(),
        "rename finished"
    );

    let use_color = should_use_color(options.use_color.or(config.defaults.use_color));
    let rendered = render_report(&report, use_color);
    let output = match preview_output {
        Some(preview) => format!("{preview}\n{rendered}"),
        None => rendered,
    };

    Ok((
        RenameResult {
            module: prepared.label,
            committed: !report.has_conflicts(),
            plan,
            report: Some(report),
        },
        Some(output),
    ))
}
