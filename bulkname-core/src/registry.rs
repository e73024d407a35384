use crate::error::TransformError;
use crate::transform::{builtin_modules, run_guarded, NameTransform};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// The transform modules available to a session, keyed by label.
///
/// Each registry owns its modules and therefore their configuration, so two
/// sessions never share option state. Modules that break the transform
/// contract while being invoked are evicted; the registry may shrink to
/// nothing, at which point lookups fail with [`TransformError::NoModules`].
#[derive(Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, Box<dyn NameTransform>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in module in its default configuration
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for module in builtin_modules() {
            registry.register_module(module);
        }
        registry
    }

    /// Register `module` under `label`, returning any module it replaced.
    pub fn register(
        &mut self,
        label: impl Into<String>,
        module: Box<dyn NameTransform>,
    ) -> Option<Box<dyn NameTransform>> {
        self.modules.insert(label.into(), module)
    }

    /// Register `module` under its own label.
    pub fn register_module(
        &mut self,
        module: Box<dyn NameTransform>,
    ) -> Option<Box<dyn NameTransform>> {
        let label = module.label().to_string();
        self.register(label, module)
    }

    pub fn remove(&mut self, label: &str) -> Option<Box<dyn NameTransform>> {
        self.modules.remove(label)
    }

    pub fn get(&self, label: &str) -> Option<&dyn NameTransform> {
        self.modules.get(label).map(|module| module.as_ref())
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Box<dyn NameTransform>> {
        self.modules.get_mut(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.modules.contains_key(label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Look up a label, ignoring ASCII case.
    pub fn resolve(&self, label: &str) -> Result<&str, TransformError> {
        if self.modules.is_empty() {
            return Err(TransformError::NoModules);
        }
        self.modules
            .keys()
            .find(|known| known.eq_ignore_ascii_case(label))
            .map(String::as_str)
            .ok_or_else(|| TransformError::UnknownModule(label.to_string()))
    }

    /// Label to fall back to after a module has been evicted.
    pub fn fallback_label(&self) -> Result<&str, TransformError> {
        self.modules
            .keys()
            .next()
            .map(String::as_str)
            .ok_or(TransformError::NoModules)
    }

    /// Set one option on the module registered under `label`.
    pub fn configure(&mut self, label: &str, option: &str, value: &str) -> Result<(), TransformError> {
        self.modules
            .get_mut(label)
            .ok_or_else(|| TransformError::UnknownModule(label.to_string()))?
            .set_option(option, value)
    }

    /// Run the module registered under `label` over `names`.
    ///
    /// If the module panics or returns the wrong number of names it is
    /// removed from the registry and the fault is returned.
    pub fn invoke(&mut self, label: &str, names: &[String]) -> Result<Vec<String>, TransformError> {
        let module = self
            .modules
            .get(label)
            .ok_or_else(|| TransformError::UnknownModule(label.to_string()))?;

        match run_guarded(module.as_ref(), names) {
            Ok(output) => Ok(output),
            Err(fault) => {
                warn!(module = label, reason = %fault.reason, "evicting faulty module");
                self.modules.remove(label);
                Err(fault.into())
            },
        }
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.labels())
            .finish()
    }
}
