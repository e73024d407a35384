use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One tracked file and its derived name parts.
///
/// `full_name` is always `base` when `ext` is empty, otherwise
/// `base + "." + ext`. `full_path` is always `directory.join(full_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub full_name: String,
    pub base: String,
    pub ext: String,
    pub directory: PathBuf,
    pub full_path: PathBuf,
}

impl FileEntry {
    /// Build an entry from an absolute path. The path does not have to exist.
    pub fn from_path(path: &Path) -> Self {
        let full_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let (base, ext) = split_name(&full_name);

        Self {
            base: base.to_string(),
            ext: ext.to_string(),
            full_name,
            directory,
            full_path: path.to_path_buf(),
        }
    }

    /// Path this entry would have if it were called `name`.
    pub fn path_with_name(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }

    /// Point the entry at a new name inside the same directory.
    pub(crate) fn set_name(&mut self, name: &str) {
        let (base, ext) = split_name(name);
        self.base = base.to_string();
        self.ext = ext.to_string();
        self.full_name = name.to_string();
        self.full_path = self.directory.join(name);
    }

    /// The fragment of the name addressed by `part`.
    pub fn part(&self, part: NamePart) -> &str {
        match part {
            NamePart::Base => &self.base,
            NamePart::Extension => &self.ext,
            NamePart::Full => &self.full_name,
        }
    }
}

/// Split a file name into base and extension (without the dot).
///
/// The extension is whatever follows the last dot, as long as some
/// non-dot character precedes that dot and the extension is not empty.
/// Dotfiles such as `.bashrc` have no extension.
pub fn split_name(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };

    let has_stem = name[..dot].chars().any(|c| c != '.');
    let ext = &name[dot + 1..];
    if !has_stem || ext.is_empty() {
        return (name, "");
    }

    (&name[..dot], ext)
}

/// Which part of each name a transform is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePart {
    /// Name without extension
    #[default]
    Base,
    /// Extension only
    #[serde(rename = "ext")]
    Extension,
    /// Whole file name
    Full,
}

impl FromStr for NamePart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" | "name" => Ok(Self::Base),
            "ext" | "extension" => Ok(Self::Extension),
            "full" | "fullname" => Ok(Self::Full),
            _ => Err(format!("Invalid name part: {s}")),
        }
    }
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Base => "base",
            Self::Extension => "ext",
            Self::Full => "full",
        };
        f.write_str(s)
    }
}
