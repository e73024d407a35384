use bulkname_core::{NamePart, Preview};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PreviewArg {
    Table,
    Summary,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Table => Self::Table,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PartArg {
    /// The name without its extension
    Base,
    /// Only the extension
    Ext,
    /// The whole file name
    Full,
}

impl From<PartArg> for NamePart {
    fn from(arg: PartArg) -> Self {
        match arg {
            PartArg::Base => Self::Base,
            PartArg::Ext => Self::Extension,
            PartArg::Full => Self::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for bulkname_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Parse a `--set option=value` argument. The value may be empty or contain
/// further `=` signs; only the first one separates.
pub fn parse_setting(raw: &str) -> Result<(String, String), String> {
    let (option, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid setting '{raw}': expected OPTION=VALUE"))?;
    let option = option.trim();
    if option.is_empty() {
        return Err(format!("invalid setting '{raw}': option name is empty"));
    }
    Ok((option.to_string(), value.to_string()))
}
