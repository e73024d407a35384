use crate::file_set::{EntryOutcome, RenameReport};
use nu_ansi_term::Color;
use std::fmt::Write;

/// Render the outcome of a rename batch, one line per entry
pub fn render_report(report: &RenameReport, use_color: bool) -> String {
    let mut output = String::new();

    for (name, outcome) in report.results.iter().zip(&report.outcomes) {
        let (tag, color) = match outcome {
            EntryOutcome::Renamed => ("renamed", Color::Green),
            EntryOutcome::Unchanged => ("unchanged", Color::DarkGray),
            EntryOutcome::Failed => ("failed", Color::Red),
            EntryOutcome::Blocked => ("blocked", Color::Yellow),
        };
        let tag = format!("{tag:>9}");
        if use_color {
            writeln!(output, "{} {}", color.paint(tag), name).unwrap();
        } else {
            writeln!(output, "{} {}", tag, name).unwrap();
        }
    }

    if let Some(summary) = &report.error_summary {
        let summary = if use_color {
            Color::Red.bold().paint(summary.as_str()).to_string()
        } else {
            summary.clone()
        };
        writeln!(output, "{summary}").unwrap();
    }
    if let Some(detail) = &report.error_detail {
        writeln!(output, "{detail}").unwrap();
    }

    output
}
