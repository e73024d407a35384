use crate::entry::NamePart;
use crate::error::TransformError;
use crate::registry::ModuleRegistry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".bulkname";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Option values per module label, applied one at a time
    #[serde(default)]
    pub modules: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Which part of each name is transformed: "base", "ext" or "full"
    #[serde(default)]
    pub part: NamePart,

    /// Module used when none is given on the command line
    #[serde(default = "default_module")]
    pub module: String,

    /// Default preview format: "table", "summary" or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,

    /// File that rename errors are appended to
    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            part: NamePart::default(),
            module: default_module(),
            preview_format: default_preview(),
            use_color: None,
            error_log: default_error_log(),
        }
    }
}

fn default_module() -> String {
    "Replace".to_string()
}

fn default_preview() -> String {
    "table".to_string()
}

fn default_error_log() -> PathBuf {
    PathBuf::from("error.log")
}

impl Config {
    /// Load `.bulkname/config.toml` from the current directory, falling back
    /// to the user config directory, then to defaults.
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        if let Some(config_path) = Self::global_path() {
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// `<config dir>/bulkname/config.toml`
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bulkname").join(CONFIG_FILE))
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Push the configured option values into the matching modules of
    /// `registry`. Labels are matched ignoring case; unknown labels and
    /// options are errors.
    pub fn apply_to(&self, registry: &mut ModuleRegistry) -> Result<(), TransformError> {
        for (label, options) in &self.modules {
            let label = registry.resolve(label)?.to_string();
            for (option, value) in options {
                registry.configure(&label, option, value)?;
            }
        }
        Ok(())
    }
}
