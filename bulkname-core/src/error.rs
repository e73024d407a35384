use thiserror::Error;

/// Errors raised by [`crate::FileSet`] operations.
///
/// Duplicate paths on `add` are not errors; they are filtered silently.
/// Name conflicts and per-entry OS failures are reported through
/// [`crate::RenameReport`] rather than as errors, because they never abort
/// the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileSetError {
    #[error("index {index} is out of range for a file set of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expected {expected} proposed names, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors from configuring transform modules or looking them up.
///
/// `update_filenames` never returns these: an invalid configuration turns
/// the module into the identity transform instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("module '{module}' has no option named '{option}'")]
    UnknownOption { module: String, option: String },

    #[error("'{value}' is not a valid choice for option '{option}' (expected one of: {choices})")]
    InvalidChoice {
        option: String,
        value: String,
        choices: String,
    },

    #[error("no module registered under '{0}'")]
    UnknownModule(String),

    #[error("no modules available")]
    NoModules,

    #[error(transparent)]
    Fault(#[from] TransformFault),
}

/// Reasons a plan or rename operation refuses to go ahead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("No files to rename: no valid paths were given")]
    NoFiles,

    #[error("Refusing to rename: {0} files would share a name (duplicate name conflict)")]
    DuplicateNames(usize),

    #[error("{0} in config")]
    InvalidPreview(String),
}

/// A module invocation that broke the transform contract, either by
/// panicking or by returning the wrong number of names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("module '{label}' failed: {reason}")]
pub struct TransformFault {
    pub label: String,
    pub reason: String,
}
