use crate::planner::RenamePlan;
use std::fmt::Write;

/// Render a plan as a plain, line-oriented summary
pub fn render_summary(plan: &RenamePlan) -> String {
    let mut output = String::new();

    writeln!(output, "[PLAN SUMMARY]").unwrap();
    writeln!(output, "Part: {}", plan.part).unwrap();
    writeln!(output, "Files: {}", plan.len()).unwrap();
    writeln!(output, "Renames: {}", plan.pending_count()).unwrap();
    writeln!(output, "Unchanged: {}", plan.blank_count()).unwrap();
    writeln!(output, "Duplicates: {}", plan.duplicates.len()).unwrap();

    if plan.pending_count() > 0 {
        writeln!(output).unwrap();
        writeln!(output, "[RENAMES]").unwrap();
        for (i, (old, new)) in plan.current.iter().zip(&plan.proposed).enumerate() {
            if new.is_empty() {
                continue;
            }
            let marker = if plan.is_duplicate(i) { " [duplicate]" } else { "" };
            writeln!(output, "{old} -> {new}{marker}").unwrap();
        }
    }

    output
}
