use super::{prepare_plan, PlanOptions};
use crate::config::Config;
use crate::output::PlanResult;
use anyhow::Result;
use std::path::PathBuf;

/// Plan operation - returns structured data and never touches the filesystem
pub fn plan_operation(
    paths: &[PathBuf],
    options: &PlanOptions,
    config: &Config,
) -> Result<(PlanResult, Option<String>)> {
    let prepared = prepare_plan(paths, options, config)?;
    let result = PlanResult::new(&prepared.label, prepared.plan);
    Ok((result, prepared.preview))
}
