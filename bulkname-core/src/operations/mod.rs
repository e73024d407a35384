//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each bulkname operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod modules;
pub mod plan;
pub mod rename;

pub use modules::modules_operation;
pub use plan::plan_operation;
pub use rename::rename_operation;

use crate::config::Config;
use crate::entry::NamePart;
use crate::error::{OperationError, TransformError};
use crate::file_set::FileSet;
use crate::planner::{plan_with_registry, RenamePlan};
use crate::preview::{render_plan, Preview};
use crate::registry::ModuleRegistry;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Options shared by the plan and rename operations.
///
/// Anything left as `None` falls back to the loaded [`Config`].
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub module: Option<String>,
    /// `(option, value)` pairs applied after the config file, in order
    pub settings: Vec<(String, String)>,
    pub part: Option<NamePart>,
    pub preview: Option<Preview>,
    pub use_color: Option<bool>,
}

/// Everything a plan produced, kept together so rename can commit it.
pub(crate) struct PreparedPlan {
    pub files: FileSet,
    pub label: String,
    pub plan: RenamePlan,
    pub preview: Option<String>,
}

pub(crate) fn prepare_plan(
    paths: &[PathBuf],
    options: &PlanOptions,
    config: &Config,
) -> Result<PreparedPlan> {
    let mut files = FileSet::new();
    let added = files.add(paths);
    if added.is_empty() {
        return Err(OperationError::NoFiles.into());
    }
    info!(files = added.len(), "collected files");

    let mut registry = ModuleRegistry::with_builtins();
    config
        .apply_to(&mut registry)
        .context("Failed to apply module options from config")?;

    let requested = options
        .module
        .as_deref()
        .unwrap_or(config.defaults.module.as_str());
    let label = registry.resolve(requested)?.to_string();

    for (option, value) in &options.settings {
        registry
            .configure(&label, option, value)
            .with_context(|| format!("Failed to set {option}={value}"))?;
    }

    if let Some(module) = registry.get(&label) {
        if !module.is_valid() {
            debug!(module = %label, "configuration is invalid; module acts as identity");
        }
    }

    let part = options.part.unwrap_or(config.defaults.part);
    let plan = match plan_with_registry(&files, &mut registry, &label, part) {
        Ok(plan) => plan,
        Err(err @ TransformError::Fault(_)) => {
            let hint = match registry.fallback_label() {
                Ok(fallback) => format!("try '{fallback}' instead"),
                Err(_) => "no modules remain".to_string(),
            };
            return Err(anyhow!(err).context(format!("Module '{label}' was disabled; {hint}")));
        },
        Err(err) => return Err(err.into()),
    };

    let preview_format = match options.preview {
        Some(preview) => preview,
        None => config
            .defaults
            .preview_format
            .parse::<Preview>()
            .map_err(OperationError::InvalidPreview)?,
    };
    let use_color = options.use_color.or(config.defaults.use_color);
    let preview = match preview_format {
        Preview::None => None,
        format => Some(render_plan(&plan, format, use_color)),
    };

    Ok(PreparedPlan {
        files,
        label,
        plan,
        preview,
    })
}
