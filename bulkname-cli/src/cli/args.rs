use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::{parse_setting, OutputFormat, PartArg, PreviewArg};

/// Batch file renaming with pluggable name transforms
#[derive(Parser, Debug)]
#[command(name = "bulkname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// File that rename errors are appended to (default from config, else error.log)
    #[arg(long, global = true, value_name = "PATH")]
    pub error_log: Option<PathBuf>,
}

/// Arguments shared by plan and rename
#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    /// Files to rename. Directories are renamed as entries, never walked.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Transform module to use (see `bulkname modules`); defaults to the configured module
    #[arg(short = 'm', long, value_name = "MODULE")]
    pub module: Option<String>,

    /// Set a module option, e.g. --set "leading zeros=2". Can be repeated.
    #[arg(short = 's', long = "set", value_name = "OPTION=VALUE", value_parser = parse_setting)]
    pub settings: Vec<(String, String)>,

    /// Which part of each name the module sees
    #[arg(long, value_enum)]
    pub part: Option<PartArg>,

    /// Preview format (defaults to config, else table)
    #[arg(long, value_enum)]
    pub preview: Option<PreviewArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the names a module would produce without renaming anything
    Plan {
        #[command(flatten)]
        transform: TransformArgs,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Plan and rename in one step
    Rename {
        #[command(flatten)]
        transform: TransformArgs,

        /// Show the plan but do not rename
        #[arg(long)]
        dry_run: bool,

        /// Rename without asking for confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// List the available modules and their options
    Modules {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Print a shell completion script to stdout
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
