use super::{parse_choice, unknown_option, NameTransform, OptionSpec};
use crate::error::TransformError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const LABEL: &str = "Replace";

const REGEX_CHOICES: &[(&str, u8)] = &[("False", 0), ("True", 1)];

/// Find and replace, either literally or with a regular expression.
///
/// In regex mode the replacer may refer to capture groups as `$1` or
/// `${name}`. A pattern that does not compile leaves every name unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replace {
    #[serde(default)]
    pub find: String,
    #[serde(default)]
    pub replacer: String,
    #[serde(default)]
    pub regex: bool,
}

impl NameTransform for Replace {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::text("find", "The text or pattern to find"),
            OptionSpec::text("replacer", "The text to replace it with"),
            OptionSpec::choice("regex", REGEX_CHOICES),
        ]
    }

    fn values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("find", self.find.clone()),
            ("replacer", self.replacer.clone()),
            ("regex", (if self.regex { "True" } else { "False" }).to_string()),
        ]
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), TransformError> {
        match option {
            "find" => self.find = value.to_string(),
            "replacer" => self.replacer = value.to_string(),
            "regex" => self.regex = parse_choice(option, value, REGEX_CHOICES)? == 1,
            _ => return Err(unknown_option(LABEL, option)),
        }
        Ok(())
    }

    fn update_filenames(&self, names: &[String]) -> Vec<String> {
        if self.find.is_empty() {
            return names.to_vec();
        }

        if !self.regex {
            return names
                .iter()
                .map(|name| name.replace(&self.find, &self.replacer))
                .collect();
        }

        match Regex::new(&self.find) {
            Ok(pattern) => names
                .iter()
                .map(|name| pattern.replace_all(name, self.replacer.as_str()).into_owned())
                .collect(),
            Err(error) => {
                debug!(pattern = %self.find, %error, "invalid pattern, names left unchanged");
                names.to_vec()
            },
        }
    }
}
