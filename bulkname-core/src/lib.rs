#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Batch file renaming.
//!
//! A [`FileSet`] tracks files; a [`NameTransform`] module proposes new names
//! for one part of each name; the planner reassembles and checks them; and
//! [`FileSet::rename`] commits the batch, refusing outright when any target
//! would collide with a file already on disk.
//!
//! `FileSet` is not safe for concurrent mutation. Wrap it in a lock if it is
//! shared between threads.

pub mod config;
pub mod entry;
pub mod error;
pub mod file_set;
pub mod operations;
pub mod output;
pub mod planner;
pub mod preview;
pub mod registry;
pub mod transform;

pub use config::Config;
pub use entry::{split_name, FileEntry, NamePart};
pub use error::{FileSetError, OperationError, TransformError, TransformFault};
pub use file_set::{
    EntryOutcome, FileSet, RenameFailure, RenameReport, CONFLICT_SUMMARY, FAILURE_SUMMARY,
};
pub use operations::{modules_operation, plan_operation, rename_operation, PlanOptions};
pub use output::{
    ModuleInfo, ModulesResult, OutputFormat, OutputFormatter, PlanResult, RenameResult,
    VersionResult,
};
pub use planner::{plan_renames, plan_with_registry, RenamePlan};
pub use preview::{render_plan, render_report, should_use_color, Preview};
pub use registry::ModuleRegistry;
pub use transform::{builtin_modules, run_guarded, NameTransform, OptionKind, OptionSpec};
