use super::{parse_choice, unknown_option, NameTransform, OptionSpec};
use crate::error::TransformError;
use serde::{Deserialize, Serialize};

pub const LABEL: &str = "Letter Case";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Case {
    #[default]
    #[serde(rename = "Capitalization")]
    Title,
    #[serde(rename = "lower case")]
    Lower,
    #[serde(rename = "UPPER CASE")]
    Upper,
}

impl Case {
    pub const CHOICES: &'static [(&'static str, u8)] =
        &[("Capitalization", 0), ("lower case", 1), ("UPPER CASE", 2)];

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Capitalization",
            Self::Lower => "lower case",
            Self::Upper => "UPPER CASE",
        }
    }

    fn apply(self, name: &str) -> String {
        match self {
            Self::Title => title_case(name),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
        }
    }
}

/// Change the letter case of every name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LetterCase {
    #[serde(default)]
    pub case: Case,
}

impl NameTransform for LetterCase {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::choice("case", Case::CHOICES)]
    }

    fn values(&self) -> Vec<(&'static str, String)> {
        vec![("case", self.case.label().to_string())]
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), TransformError> {
        if option != "case" {
            return Err(unknown_option(LABEL, option));
        }
        self.case = match parse_choice(option, value, Case::CHOICES)? {
            0 => Case::Title,
            1 => Case::Lower,
            _ => Case::Upper,
        };
        Ok(())
    }

    fn update_filenames(&self, names: &[String]) -> Vec<String> {
        names.iter().map(|name| self.case.apply(name)).collect()
    }
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}
