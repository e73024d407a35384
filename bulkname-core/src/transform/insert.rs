use super::{char_offset, parse_bounded, unknown_option, NameTransform, OptionSpec, Side};
use crate::error::TransformError;
use serde::{Deserialize, Serialize};

pub const LABEL: &str = "Insert";

/// Insert a piece of text at a fixed position, counted from either end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default)]
    pub insert: String,
    /// Raw text of the position, validated on use
    #[serde(default = "default_position")]
    pub position: String,
    #[serde(default)]
    pub from: Side,
}

fn default_position() -> String {
    "0".to_string()
}

impl Default for Insert {
    fn default() -> Self {
        Self {
            insert: String::new(),
            position: default_position(),
            from: Side::Left,
        }
    }
}

impl Insert {
    fn position(&self) -> Option<usize> {
        parse_bounded(&self.position, 0, u64::MAX).and_then(|p| usize::try_from(p).ok())
    }

    fn insert_into(&self, name: &str, position: usize) -> String {
        let len = name.chars().count();
        if position > len {
            return name.to_string();
        }

        let at = match self.from {
            Side::Left => position,
            Side::Right => len - position,
        };
        let offset = char_offset(name, at);

        let mut result = String::with_capacity(name.len() + self.insert.len());
        result.push_str(&name[..offset]);
        result.push_str(&self.insert);
        result.push_str(&name[offset..]);
        result
    }
}

impl NameTransform for Insert {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::text("insert", "The text to insert"),
            OptionSpec::text("position", "Any non-negative integer"),
            OptionSpec::choice("from", Side::CHOICES),
        ]
    }

    fn values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("insert", self.insert.clone()),
            ("position", self.position.clone()),
            ("from", self.from.label().to_string()),
        ]
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), TransformError> {
        match option {
            "insert" => self.insert = value.to_string(),
            "position" => self.position = value.to_string(),
            "from" => self.from = Side::parse(option, value)?,
            _ => return Err(unknown_option(LABEL, option)),
        }
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.position().is_some()
    }

    fn update_filenames(&self, names: &[String]) -> Vec<String> {
        let Some(position) = self.position() else {
            return names.to_vec();
        };

        names
            .iter()
            .map(|name| self.insert_into(name, position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn insert(text: &str, position: &str, from: Side) -> Insert {
        Insert {
            insert: text.to_string(),
            position: position.to_string(),
            from,
        }
    }

    #[test]
    fn test_insert_from_left() {
        let module = insert("_x_", "2", Side::Left);
        assert_eq!(module.update_filenames(&names(&["abcd"])), names(&["ab_x_cd"]));
    }

    #[test]
    fn test_insert_from_right() {
        let module = insert("-", "1", Side::Right);
        assert_eq!(module.update_filenames(&names(&["abcd", "xy"])), names(&["abc-d", "x-y"]));
    }

    #[test]
    fn test_insert_at_edges() {
        let module = insert("!", "0", Side::Left);
        assert_eq!(module.update_filenames(&names(&["ab"])), names(&["!ab"]));

        let module = insert("!", "0", Side::Right);
        assert_eq!(module.update_filenames(&names(&["ab"])), names(&["ab!"]));

        let module = insert("!", "2", Side::Left);
        assert_eq!(module.update_filenames(&names(&["ab"])), names(&["ab!"]));
    }

    #[test]
    fn test_short_names_are_unchanged_individually() {
        let module = insert("X", "3", Side::Left);
        assert_eq!(
            module.update_filenames(&names(&["ab", "abcd"])),
            names(&["ab", "abcXd"])
        );
    }

    #[test]
    fn test_invalid_position_is_identity() {
        for bad in ["", "-1", "abc", "1.5", "99999999999999999999999"] {
            let module = insert("X", bad, Side::Left);
            assert!(!module.is_valid(), "{bad:?} should be invalid");
            assert_eq!(module.update_filenames(&names(&["abc"])), names(&["abc"]));
        }
    }

    #[test]
    fn test_large_position_is_valid_but_past_the_end() {
        let module = insert("X", "10000", Side::Left);
        assert!(module.is_valid());
        assert_eq!(module.update_filenames(&names(&["abc"])), names(&["abc"]));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let module = insert("_", "2", Side::Left);
        assert_eq!(module.update_filenames(&names(&["äöü"])), names(&["äö_ü"]));
    }

    #[test]
    fn test_set_option() {
        let mut module = Insert::default();
        module.set_option("insert", "new_").unwrap();
        module.set_option("position", "4").unwrap();
        module.set_option("from", "From the Right").unwrap();
        assert_eq!(module, insert("new_", "4", Side::Right));

        assert!(module.set_option("from", "sideways").is_err());
        assert!(module.set_option("colour", "red").is_err());
    }
}
