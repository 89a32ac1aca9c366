//! Name-to-factory registry for process types.

use crate::adsorption::Adsorption;
use crate::process::Process;
use adatom_core::ConfigError;
use indexmap::IndexMap;

/// Creates an unconfigured process, ready for one `init`.
pub type ProcessFactory = fn() -> Box<dyn Process>;

/// Explicit registry of process types, owned by the simulation driver.
///
/// Names keep their registration order so that listings are stable.
///
/// ```
/// use adatom_process::ProcessRegistry;
///
/// let registry = ProcessRegistry::with_builtin();
/// let process = registry.create("Adsorption").unwrap();
/// assert_eq!(process.name(), "Adsorption");
/// assert!(registry.create("Desorption").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProcessRegistry {
    factories: IndexMap<String, ProcessFactory>,
}

impl ProcessRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in process.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .factories
            .insert(Adsorption::NAME.to_string(), new_adsorption);
        registry
    }

    /// Register `factory` under `name`.
    pub fn register(&mut self, name: &str, factory: ProcessFactory) -> Result<(), ConfigError> {
        if self.factories.contains_key(name) {
            return Err(ConfigError::DuplicateProcess {
                name: name.to_string(),
            });
        }
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }

    /// Create an unconfigured instance of the process registered as `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Process>, ConfigError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ConfigError::UnknownProcess {
                name: name.to_string(),
            })
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered process types.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

fn new_adsorption() -> Box<dyn Process> {
    Box::new(Adsorption::new())
}
