use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One error-log record: a header line naming the tool and time, the
/// detail, then a blank line.
pub fn format_entry(detail: &str, timestamp: &str) -> String {
    format!(
        "bulkname {} {}:\n{}\n\n",
        env!("CARGO_PKG_VERSION"),
        timestamp,
        detail
    )
}

/// Append `detail` to the error log at `path`, creating the file if needed.
pub fn append_error_log(path: &Path, detail: &str) -> Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open error log {}", path.display()))?;
    file.write_all(format_entry(detail, &timestamp).as_bytes())
        .with_context(|| format!("Failed to write error log {}", path.display()))?;

    Ok(())
}
