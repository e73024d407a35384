use super::{char_offset, parse_bounded, unknown_option, NameTransform, OptionSpec, Side};
use crate::error::TransformError;
use serde::{Deserialize, Serialize};

pub const LABEL: &str = "Remove Characters";

const BOUND_MAX: u64 = 9999;

/// Remove a range of characters, counted from either end.
///
/// From the left the half-open range `[start, end)` is removed. From the
/// right the same range is mirrored: `[len - end, len - start)`, so a
/// `start` of 0 reaches the very end of the name. Ranges are clamped to the
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveCharacters {
    #[serde(default = "default_bound")]
    pub start: String,
    #[serde(default = "default_bound")]
    pub end: String,
    #[serde(default)]
    pub from: Side,
}

fn default_bound() -> String {
    "0".to_string()
}

impl Default for RemoveCharacters {
    fn default() -> Self {
        Self {
            start: default_bound(),
            end: default_bound(),
            from: Side::Left,
        }
    }
}

impl RemoveCharacters {
    fn bounds(&self) -> Option<(usize, usize)> {
        let start = usize::try_from(parse_bounded(&self.start, 0, BOUND_MAX)?).ok()?;
        let end = usize::try_from(parse_bounded(&self.end, 0, BOUND_MAX)?).ok()?;
        (start < end).then_some((start, end))
    }

    fn remove_from(&self, name: &str, start: usize, end: usize) -> String {
        let (lo, hi) = match self.from {
            Side::Left => (start, end),
            Side::Right => {
                let len = name.chars().count();
                (len.saturating_sub(end), len.saturating_sub(start))
            },
        };

        let lo = char_offset(name, lo);
        let hi = char_offset(name, hi);
        let mut result = String::with_capacity(name.len());
        result.push_str(&name[..lo]);
        result.push_str(&name[hi..]);
        result
    }
}

impl NameTransform for RemoveCharacters {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::text("start", format!("Any integer from 0 to {BOUND_MAX}")),
            OptionSpec::text("end", format!("Any integer from 0 to {BOUND_MAX}")),
            OptionSpec::choice("from", Side::CHOICES),
        ]
    }

    fn values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.start.clone()),
            ("end", self.end.clone()),
            ("from", self.from.label().to_string()),
        ]
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), TransformError> {
        match option {
            "start" => self.start = value.to_string(),
            "end" => self.end = value.to_string(),
            "from" => self.from = Side::parse(option, value)?,
            _ => return Err(unknown_option(LABEL, option)),
        }
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.bounds().is_some()
    }

    fn update_filenames(&self, names: &[String]) -> Vec<String> {
        let Some((start, end)) = self.bounds() else {
            return names.to_vec();
        };

        names
            .iter()
            .map(|name| self.remove_from(name, start, end))
            .collect()
    }
}
