use anyhow::Result;
use bulkname_core::{plan_operation, Config, OutputFormatter, PlanOptions, Preview};

use crate::cli::{OutputFormat, TransformArgs};

/// Build core options from the shared transform arguments. JSON output
/// never carries a rendered preview.
pub fn plan_options(
    transform: &TransformArgs,
    use_color: Option<bool>,
    output: OutputFormat,
) -> PlanOptions {
    let preview = match output {
        OutputFormat::Json => Some(Preview::None),
        OutputFormat::Summary => transform.preview.map(Into::into),
    };

    PlanOptions {
        module: transform.module.clone(),
        settings: transform.settings.clone(),
        part: transform.part.map(Into::into),
        preview,
        use_color,
    }
}

pub fn handle_plan(
    transform: &TransformArgs,
    output: OutputFormat,
    config: &Config,
    use_color: Option<bool>,
) -> Result<()> {
    let options = plan_options(transform, use_color, output);
    let (result, preview) = plan_operation(&transform.paths, &options, config)?;

    if let Some(preview) = preview {
        println!("{}", preview.trim_end());
    }
    println!("{}", result.format(output.into()).trim_end());
    Ok(())
}
