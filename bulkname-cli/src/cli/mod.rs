pub mod args;
pub mod types;

pub use args::{Cli, Commands, TransformArgs};
pub use types::OutputFormat;
