use crate::planner::RenamePlan;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render a plan as a table of old and proposed names
pub fn render_table(plan: &RenamePlan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Old name").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["#", "Old name", "New name"]);
    }

    for (i, (old, new)) in plan.current.iter().zip(&plan.proposed).enumerate() {
        let number = (i + 1).to_string();
        let (shown, color) = if new.is_empty() {
            ("(unchanged)".to_string(), Color::DarkGrey)
        } else if plan.is_duplicate(i) {
            (format!("{new} (duplicate)"), Color::Red)
        } else {
            (new.clone(), Color::Green)
        };

        if use_color {
            table.add_row(vec![Cell::new(number), Cell::new(old), Cell::new(shown).fg(color)]);
        } else {
            table.add_row(vec![number, old.clone(), shown]);
        }
    }

    table.to_string()
}
