//! Rule registry for named, shared rule chains.
//!
//! This module provides the [`RuleRegistry`] type that stores rule chains
//! under names so long-lived chains can be built once and reused by every
//! validation call in a process.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Failure, RuleError};
use crate::rule::Rule;
use crate::validation::validate;
use crate::value::Value;

/// Type alias for the chain storage map.
type ChainMap = Arc<RwLock<HashMap<String, Arc<[Rule]>>>>;

/// A thread-safe registry of named rule chains.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Clones share the same storage.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, rules, RuleRegistry, Value};
///
/// let registry = RuleRegistry::new();
/// registry.register("Age", rules![rule::required(), rule::min(18)]).unwrap();
///
/// let result = registry.validate("Age", &Value::from(15)).unwrap();
/// assert!(result.is_some());
/// ```
pub struct RuleRegistry {
    chains: ChainMap,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            chains: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a rule chain under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::{rule, rules, RuleRegistry};
    ///
    /// let registry = RuleRegistry::new();
    /// registry.register("Name", rules![rule::required()]).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("Name", rules![]).is_err());
    /// ```
    pub fn register(
        &self,
        name: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut chains = self.chains.write();

        if chains.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let chain: Arc<[Rule]> = rules.into_iter().collect();
        tracing::debug!(name = %name, rules = chain.len(), "rule chain registered");
        chains.insert(name, chain);
        Ok(())
    }

    /// Retrieves a chain by name.
    pub fn get(&self, name: &str) -> Option<Arc<[Rule]>> {
        self.chains.read().get(name).cloned()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.chains.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates a value against a named chain.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ChainNotFound` if the name doesn't exist and
    /// `RegistryError::Rule` if the chain cannot be applied to the value.
    pub fn validate(&self, name: &str, value: &Value) -> Result<Option<Failure>, RegistryError> {
        let chain = self
            .get(name)
            .ok_or_else(|| RegistryError::ChainNotFound(name.to_string()))?;

        Ok(validate(value, &chain)?)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RuleRegistry {
    fn clone(&self) -> Self {
        Self {
            chains: Arc::clone(&self.chains),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a chain with a name that already exists.
    #[error("rule chain '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a chain name that doesn't exist.
    #[error("rule chain '{0}' not found")]
    ChainNotFound(String),

    /// The chain is misconfigured for the value it was given.
    #[error(transparent)]
    Rule(#[from] RuleError),
}
