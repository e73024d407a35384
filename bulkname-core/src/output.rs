use crate::file_set::RenameReport;
use crate::planner::RenamePlan;
use crate::transform::OptionSpec;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a plan operation
#[derive(Debug, Serialize)]
pub struct PlanResult {
    pub module: String,
    pub files: usize,
    pub renames: usize,
    pub unchanged: usize,
    pub duplicates: usize,
    pub committable: bool,
    pub plan: RenamePlan,
}

impl PlanResult {
    pub fn new(module: &str, plan: RenamePlan) -> Self {
        Self {
            module: module.to_string(),
            files: plan.len(),
            renames: plan.pending_count(),
            unchanged: plan.blank_count(),
            duplicates: plan.duplicates.len(),
            committable: plan.is_committable(),
            plan,
        }
    }
}

/// Result of a rename operation
#[derive(Debug, Serialize)]
pub struct RenameResult {
    pub module: String,
    pub committed: bool,
    pub plan: RenamePlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RenameReport>,
}

impl RenameResult {
    pub fn renamed(&self) -> usize {
        self.report.as_ref().map_or(0, RenameReport::renamed_count)
    }

    pub fn failed(&self) -> usize {
        self.report.as_ref().map_or(0, RenameReport::failed_count)
    }

    pub fn has_conflicts(&self) -> bool {
        self.report.as_ref().is_some_and(RenameReport::has_conflicts)
    }
}

/// One module and its options, for the `modules` listing
#[derive(Debug, Serialize)]
pub struct ModuleInfo {
    pub label: String,
    pub options: Vec<OptionSpec>,
    pub values: Vec<(String, String)>,
}

/// Result of listing the available modules
#[derive(Debug, Serialize)]
pub struct ModulesResult {
    pub modules: Vec<ModuleInfo>,
}

/// Result of a version command
#[derive(Debug, Serialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PlanResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "plan",
            "module": self.module,
            "summary": {
                "files": self.files,
                "renames": self.renames,
                "unchanged": self.unchanged,
                "duplicates": self.duplicates,
                "committable": self.committable,
            },
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "Bulkname plan: {} ({} part)", self.module, self.plan.part).unwrap();
        writeln!(
            output,
            "Renames: {} of {} files ({} unchanged)",
            self.renames, self.files, self.unchanged
        )
        .unwrap();

        if self.duplicates > 0 {
            writeln!(output, "Duplicates: {} names collide", self.duplicates).unwrap();
        }

        output
    }
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.report.as_ref().map_or(true, RenameReport::is_clean),
            "operation": "rename",
            "module": self.module,
            "committed": self.committed,
            "summary": {
                "renamed": self.renamed(),
                "failed": self.failed(),
                "conflicts": self.report.as_ref().map_or(0, |r| r.conflicts.len()),
            },
            "plan": self.plan,
            "report": self.report,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let Some(report) = &self.report else {
            return "No files were renamed.\n".to_string();
        };

        let mut output = String::new();
        if report.has_conflicts() {
            writeln!(output, "✗ {} name conflicts, no file was renamed", report.conflicts.len())
                .unwrap();
        } else {
            writeln!(output, "✓ Renamed {} files", report.renamed_count()).unwrap();
            if report.failed_count() > 0 {
                writeln!(output, "✗ {} renames failed", report.failed_count()).unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for ModulesResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&self.modules).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        for module in &self.modules {
            writeln!(output, "{}", module.label).unwrap();
            for (spec, (_, value)) in module.options.iter().zip(&module.values) {
                writeln!(output, "  {spec} [current: {value:?}]").unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
