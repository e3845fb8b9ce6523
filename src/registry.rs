use std::collections::HashMap;
use std::sync::Arc;
use tera::{Tera, Value};

use crate::constants::filters::TITLEIZE;
use crate::debug;
use crate::error::{Error, Result};
use crate::filters::titleize::create_titleize_filter;

/// A filter as stored in the registry, shareable across engines and threads
pub type FilterFn =
    Arc<dyn Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync>;

/// Explicit mapping from filter names to filters.
///
/// The registry is handed to the template engine at construction time
/// (see [`FilterRegistry::apply`]) instead of living in a process-wide global.
pub struct FilterRegistry {
    filters: HashMap<String, FilterFn>,
}

impl FilterRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Creates a registry holding the default filters
    /// - titleize: Title-cases the text splitting on `_`, `-` and spaces
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(TITLEIZE, create_titleize_filter());
        registry
    }

    fn insert<F>(&mut self, name: &str, filter: F)
    where
        F: Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync + 'static,
    {
        self.filters.insert(name.to_string(), Arc::new(filter));
    }

    /// Registers a new filter under the given name
    ///
    /// # Arguments
    /// * `name` - The name used to call the filter from templates
    /// * `filter` - The filter function
    ///
    /// # Returns
    /// An error if a filter with the same name is already registered
    pub fn register<F>(&mut self, name: &str, filter: F) -> Result<()>
    where
        F: Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync + 'static,
    {
        if self.contains(name) {
            return Err(Error::DuplicateFilter(name.to_string()));
        }
        debug!("Registering filter \"{}\"", name);
        self.insert(name, filter);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FilterFn> {
        self.filters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Returns the registered filter names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Installs every registered filter into the given engine
    ///
    /// # Arguments
    /// * `tera` - The engine receiving the filters
    pub fn apply(&self, tera: &mut Tera) {
        for (name, filter) in &self.filters {
            let filter = Arc::clone(filter);
            tera.register_filter(
                name,
                move |value: &Value, args: &HashMap<String, Value>| filter(value, args),
            );
        }
        debug!("Installed filters [{}] into template engine", self.names().join(", "));
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
