use crate::config::Config;
use crate::output::{ModuleInfo, ModulesResult};
use crate::registry::ModuleRegistry;
use anyhow::{Context, Result};

/// List every available module with its options and the values they take
/// once the config file has been applied.
pub fn modules_operation(config: &Config) -> Result<ModulesResult> {
    let mut registry = ModuleRegistry::with_builtins();
    config
        .apply_to(&mut registry)
        .context("Failed to apply module options from config")?;

    let modules = registry
        .labels()
        .into_iter()
        .filter_map(|label| registry.get(label))
        .map(|module| ModuleInfo {
            label: module.label().to_string(),
            options: module.options(),
            values: module
                .values()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        })
        .collect();

    Ok(ModulesResult { modules })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormatter;

    #[test]
    fn test_lists_builtins_with_config_values() {
        let mut config = Config::default();
        config
            .modules
            .entry("replace".to_string())
            .or_default()
            .insert("find".to_string(), "IMG".to_string());

        let result = modules_operation(&config).unwrap();
        let labels: Vec<&str> = result.modules.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Insert", "Letter Case", "Numbering", "Remove Characters", "Replace"]
        );

        let replace = &result.modules[4];
        assert_eq!(replace.values[0], ("find".to_string(), "IMG".to_string()));

        let summary = result.format_summary();
        assert!(summary.contains("Letter Case\n  case: one of Capitalization (0)"));
        assert!(summary.contains("  find: "));
    }
}
