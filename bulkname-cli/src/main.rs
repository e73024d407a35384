use anyhow::{Context, Result};
use bulkname_core::{
    modules_operation, Config, OperationError, OutputFormatter, TransformError, VersionResult,
};
use clap::{CommandFactory, Parser};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::debug;

mod cli;
mod error_log;
mod plan;
mod rename;

use cli::{Cli, Commands, OutputFormat};
use rename::{IncompleteRename, NonInteractive};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    };

    let use_color = if cli.no_color { Some(false) } else { None };
    let error_log: PathBuf = cli
        .error_log
        .clone()
        .unwrap_or_else(|| config.defaults.error_log.clone());
    debug!(error_log = %error_log.display(), module = %config.defaults.module, "loaded configuration");

    let result = match cli.command {
        Commands::Plan { transform, output } => {
            plan::handle_plan(&transform, output, &config, use_color)
        },

        Commands::Rename {
            transform,
            dry_run,
            yes,
            output,
        } => rename::handle_rename(
            &transform, dry_run, yes, output, &config, use_color, &error_log,
        ),

        Commands::Modules { output } => handle_modules(&config, output),

        Commands::Version { output } => handle_version(output),

        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bulkname", &mut io::stdout());
            Ok(())
        },
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 1 for conflicts and incomplete renames, 2 for invalid input, 3 otherwise.
fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<IncompleteRename>().is_some() {
        return 1;
    }
    if let Some(err) = error.downcast_ref::<OperationError>() {
        return match err {
            OperationError::DuplicateNames(_) => 1,
            OperationError::NoFiles | OperationError::InvalidPreview(_) => 2,
        };
    }
    if error.downcast_ref::<TransformError>().is_some()
        || error.downcast_ref::<NonInteractive>().is_some()
    {
        return 2;
    }
    3
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn handle_modules(config: &Config, output: OutputFormat) -> Result<()> {
    let result = modules_operation(config)?;
    println!("{}", result.format(output.into()).trim_end());
    Ok(())
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "bulkname".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
