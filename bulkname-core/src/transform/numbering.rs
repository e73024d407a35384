use super::{parse_bounded, parse_choice, unknown_option, NameTransform, OptionSpec};
use crate::error::TransformError;
use serde::{Deserialize, Serialize};

pub const LABEL: &str = "Numbering";

const LEADING_ZEROS_MAX: u64 = 10;

/// How the old name, the label text and the counter are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberingFormat {
    #[default]
    #[serde(rename = "OldName Text Number")]
    OldTextNumber,
    #[serde(rename = "Number Text OldName")]
    NumberTextOld,
    #[serde(rename = "Text Number")]
    TextNumber,
    #[serde(rename = "Number Text")]
    NumberText,
}

impl NumberingFormat {
    pub const CHOICES: &'static [(&'static str, u8)] = &[
        ("OldName Text Number", 0),
        ("Number Text OldName", 1),
        ("Text Number", 2),
        ("Number Text", 3),
    ];

    fn label(self) -> &'static str {
        match self {
            Self::OldTextNumber => "OldName Text Number",
            Self::NumberTextOld => "Number Text OldName",
            Self::TextNumber => "Text Number",
            Self::NumberText => "Number Text",
        }
    }
}

/// Number names sequentially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numbering {
    #[serde(rename = "leading zeros", default = "default_leading_zeros")]
    pub leading_zeros: String,
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default)]
    pub format: NumberingFormat,
    #[serde(default)]
    pub text: String,
}

fn default_leading_zeros() -> String {
    "0".to_string()
}

fn default_start() -> String {
    "1".to_string()
}

impl Default for Numbering {
    fn default() -> Self {
        Self {
            leading_zeros: default_leading_zeros(),
            start: default_start(),
            format: NumberingFormat::default(),
            text: String::new(),
        }
    }
}

impl Numbering {
    /// `(digits, start)` when both fields are valid.
    fn parsed(&self) -> Option<(usize, u64)> {
        let zeros = parse_bounded(&self.leading_zeros, 0, LEADING_ZEROS_MAX)?;
        let start = parse_bounded(&self.start, 1, u64::MAX)?;
        let digits = usize::try_from(zeros).ok()? + 1;
        Some((digits, start))
    }
}

impl NameTransform for Numbering {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::text(
                "leading zeros",
                format!("Any integer from 0 to {LEADING_ZEROS_MAX}"),
            ),
            OptionSpec::text("start", "A positive integer"),
            OptionSpec::choice("format", NumberingFormat::CHOICES),
            OptionSpec::text("text", "Text which serves as the label for the file"),
        ]
    }

    fn values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("leading zeros", self.leading_zeros.clone()),
            ("start", self.start.clone()),
            ("format", self.format.label().to_string()),
            ("text", self.text.clone()),
        ]
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), TransformError> {
        match option {
            "leading zeros" | "leading_zeros" => self.leading_zeros = value.to_string(),
            "start" => self.start = value.to_string(),
            "text" => self.text = value.to_string(),
            "format" => {
                self.format = match parse_choice("format", value, NumberingFormat::CHOICES)? {
                    0 => NumberingFormat::OldTextNumber,
                    1 => NumberingFormat::NumberTextOld,
                    2 => NumberingFormat::TextNumber,
                    _ => NumberingFormat::NumberText,
                };
            },
            _ => return Err(unknown_option(LABEL, option)),
        }
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.parsed().is_some()
    }

    fn update_filenames(&self, names: &[String]) -> Vec<String> {
        let Some((digits, start)) = self.parsed() else {
            return names.to_vec();
        };
        let text = &self.text;

        names
            .iter()
            .zip(0u64..)
            .map(|(old, i)| {
                let number = format!("{:0digits$}", start.saturating_add(i));
                match self.format {
                    NumberingFormat::OldTextNumber => format!("{old}{text}{number}"),
                    NumberingFormat::NumberTextOld => format!("{number}{text}{old}"),
                    NumberingFormat::TextNumber => format!("{text}{number}"),
                    NumberingFormat::NumberText => format!("{number}{text}"),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn numbering(zeros: &str, start: &str, format: NumberingFormat, text: &str) -> Numbering {
        Numbering {
            leading_zeros: zeros.to_string(),
            start: start.to_string(),
            format,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_text_number_with_padding() {
        let module = numbering("2", "5", NumberingFormat::TextNumber, "img_");
        assert_eq!(
            module.update_filenames(&names(&["a", "b", "c"])),
            names(&["img_005", "img_006", "img_007"])
        );
    }

    #[test]
    fn test_all_layouts() {
        let input = names(&["old"]);
        let cases = [
            (NumberingFormat::OldTextNumber, "old-1"),
            (NumberingFormat::NumberTextOld, "1-old"),
            (NumberingFormat::TextNumber, "-1"),
            (NumberingFormat::NumberText, "1-"),
        ];
        for (format, expected) in cases {
            let module = numbering("0", "1", format, "-");
            assert_eq!(module.update_filenames(&input), names(&[expected]));
        }
    }

    #[test]
    fn test_counter_wider_than_padding() {
        let module = numbering("1", "98", NumberingFormat::NumberText, "");
        assert_eq!(
            module.update_filenames(&names(&["a", "b", "c"])),
            names(&["98", "99", "100"])
        );
    }

    #[test]
    fn test_invalid_configs_are_identity() {
        let input = names(&["a", "b"]);
        for (zeros, start) in [("11", "1"), ("-1", "1"), ("x", "1"), ("0", "0"), ("0", ""), ("0", "-3")] {
            let module = numbering(zeros, start, NumberingFormat::TextNumber, "n");
            assert!(!module.is_valid(), "{zeros:?}/{start:?} should be invalid");
            assert_eq!(module.update_filenames(&input), input);
        }
    }

    #[test]
    fn test_max_leading_zeros() {
        let module = numbering("10", "1", NumberingFormat::NumberText, "");
        assert_eq!(module.update_filenames(&names(&["a"])), names(&["00000000001"]));
    }

    #[test]
    fn test_set_option_incrementally() {
        let mut module = Numbering::default();
        module.set_option("leading zeros", "").unwrap();
        assert!(!module.is_valid());
        module.set_option("leading zeros", "3").unwrap();
        module.set_option("format", "Number Text OldName").unwrap();
        module.set_option("text", " - ").unwrap();
        assert!(module.is_valid());
        assert_eq!(module.update_filenames(&names(&["song"])), names(&["0001 - song"]));
    }
}
