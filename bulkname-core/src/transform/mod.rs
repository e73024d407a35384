//! Name transformation modules
//!
//! Every module maps an ordered list of name fragments to a new list of the
//! same length. A module carries its own configuration, which a caller edits
//! one option at a time through [`NameTransform::set_option`]. Numeric
//! options keep the raw text they were given, so a half-typed value is
//! representable; while any option fails validation the module behaves as
//! the identity transform instead of failing.

pub mod insert;
pub mod letter_case;
pub mod numbering;
pub mod remove_characters;
pub mod replace;

pub use insert::Insert;
pub use letter_case::{Case, LetterCase};
pub use numbering::{Numbering, NumberingFormat};
pub use remove_characters::RemoveCharacters;
pub use replace::Replace;

use crate::error::{TransformError, TransformFault};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// The contract every naming strategy satisfies.
pub trait NameTransform {
    /// Label the module is registered and selected under
    fn label(&self) -> &'static str;

    /// Static description of the configurable options, in display order
    fn options(&self) -> Vec<OptionSpec>;

    /// Current value of every option, in the same order as `options()`
    fn values(&self) -> Vec<(&'static str, String)>;

    /// Change a single option.
    ///
    /// Fails only for an unknown option name or a value outside a closed
    /// choice set. Free-form values are always accepted and checked by
    /// [`NameTransform::is_valid`].
    fn set_option(&mut self, option: &str, value: &str) -> Result<(), TransformError>;

    /// Whether the current configuration passes the module's own rules
    fn is_valid(&self) -> bool {
        true
    }

    /// Transform `names`. Pure in `names` and the configuration; returns
    /// `names` unchanged when the configuration is invalid.
    fn update_filenames(&self, names: &[String]) -> Vec<String>;
}

/// One configurable knob of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Free-form value with a human description of what is accepted
    Text(String),
    /// Closed set of labelled choices
    Choice(Vec<(&'static str, u8)>),
}

impl OptionSpec {
    pub fn text(name: &'static str, description: impl Into<String>) -> Self {
        Self {
            name,
            kind: OptionKind::Text(description.into()),
        }
    }

    pub fn choice(name: &'static str, choices: &[(&'static str, u8)]) -> Self {
        Self {
            name,
            kind: OptionKind::Choice(choices.to_vec()),
        }
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            OptionKind::Text(description) => write!(f, "{}: {}", self.name, description),
            OptionKind::Choice(choices) => {
                let labels: Vec<String> = choices
                    .iter()
                    .map(|(label, value)| format!("{label} ({value})"))
                    .collect();
                write!(f, "{}: one of {}", self.name, labels.join(", "))
            },
        }
    }
}

/// Which end of a name positions are counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    #[serde(rename = "From the Left")]
    Left,
    #[serde(rename = "From the Right")]
    Right,
}

impl Side {
    pub const CHOICES: &'static [(&'static str, u8)] = &[("From the Left", 0), ("From the Right", 1)];

    fn from_choice(value: u8) -> Self {
        if value == 1 {
            Self::Right
        } else {
            Self::Left
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Left => "From the Left",
            Self::Right => "From the Right",
        }
    }

    fn parse(option: &str, value: &str) -> Result<Self, TransformError> {
        parse_choice(option, value, Self::CHOICES).map(Self::from_choice)
    }
}

/// Resolve `value` against a closed choice set. Matches a label
/// (case-insensitively) or the numeric value of a choice.
pub(crate) fn parse_choice(
    option: &str,
    value: &str,
    choices: &[(&'static str, u8)],
) -> Result<u8, TransformError> {
    let value = value.trim();
    choices
        .iter()
        .find(|(label, number)| {
            label.eq_ignore_ascii_case(value) || value.parse::<u8>().ok() == Some(*number)
        })
        .map(|(_, number)| *number)
        .ok_or_else(|| TransformError::InvalidChoice {
            option: option.to_string(),
            value: value.to_string(),
            choices: choices
                .iter()
                .map(|(label, _)| *label)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Parse a non-negative integer typed as text, within `[min, max]`.
/// Only ASCII digits are accepted; signs, spaces and empty text are not.
pub(crate) fn parse_bounded(raw: &str, min: u64, max: u64) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().filter(|n| (min..=max).contains(n))
}

/// Byte offset of the `n`th character of `s`, or `s.len()` past the end.
pub(crate) fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(offset, _)| offset)
}

pub(crate) fn unknown_option(module: &str, option: &str) -> TransformError {
    TransformError::UnknownOption {
        module: module.to_string(),
        option: option.to_string(),
    }
}

/// Call `module` and turn a contract violation into a [`TransformFault`]:
/// a panic inside the module, or a result whose length differs from the
/// input.
pub fn run_guarded(
    module: &dyn NameTransform,
    names: &[String],
) -> Result<Vec<String>, TransformFault> {
    let label = module.label();
    let output = panic::catch_unwind(AssertUnwindSafe(|| module.update_filenames(names)))
        .map_err(|payload| TransformFault {
            label: label.to_string(),
            reason: panic_message(payload.as_ref()),
        })?;

    if output.len() != names.len() {
        return Err(TransformFault {
            label: label.to_string(),
            reason: format!("returned {} names for {} inputs", output.len(), names.len()),
        });
    }

    Ok(output)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panicked".to_string()
    }
}

/// Every built-in module with its default configuration.
pub fn builtin_modules() -> Vec<Box<dyn NameTransform>> {
    vec![
        Box::new(Insert::default()),
        Box::new(LetterCase::default()),
        Box::new(Numbering::default()),
        Box::new(RemoveCharacters::default()),
        Box::new(Replace::default()),
    ]
}
