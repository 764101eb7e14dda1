//! Named schema storage.
//!
//! This module provides the [`SchemaRegistry`] type that stores built schemas
//! under string names, so an application can assemble its schemas once at
//! startup and validate against them from anywhere.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::report::Report;
use crate::schema::SchemaNode;

/// Type alias for the schema storage map.
type SchemaMap = Arc<RwLock<HashMap<String, Arc<SchemaNode>>>>;

/// A thread-safe registry for storing and retrieving named schemas.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Clones share the underlying storage, so a registry can be handed to
/// worker threads cheaply.
///
/// # Example
///
/// ```rust
/// use verdict::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry.register("Email", Schema::string().email()).unwrap();
///
/// let report = registry.validate("Email", &json!("dev@mail.com")).unwrap();
/// assert!(report.is_valid());
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    /// Creates a new empty schema registry.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a schema with the given name.
    ///
    /// Builders can be registered directly; `.build()` is implied.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is already
    /// registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Schema, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register("Email", Schema::string().email()).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("Email", Schema::string()).is_err());
    /// ```
    pub fn register(
        &self,
        name: impl Into<String>,
        schema: impl Into<SchemaNode>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        schemas.insert(name, Arc::new(schema.into()));
        Ok(())
    }

    /// Retrieves a schema by name.
    ///
    /// Returns `None` if no schema with the given name is registered.
    pub fn get(&self, name: &str) -> Option<Arc<SchemaNode>> {
        self.schemas.read().get(name).cloned()
    }

    /// True when a schema with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// The registered schema names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemas.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates a value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SchemaNotFound`] if the schema name doesn't
    /// exist. A failed validation is not an error; inspect the returned
    /// [`Report`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Schema, SchemaRegistry};
    /// use serde_json::json;
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register("User", Schema::object()
    ///     .field("name", Schema::string().min_word(2))
    ///     .field("age", Schema::number().integer())
    /// ).unwrap();
    ///
    /// let report = registry.validate("User", &json!({
    ///     "name": "Ada Lovelace",
    ///     "age": 36
    /// })).unwrap();
    ///
    /// assert!(report.is_valid());
    /// ```
    pub fn validate(&self, name: &str, value: &Value) -> Result<Report, RegistryError> {
        let schema = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;

        Ok(crate::engine::validate(value, &schema))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema with a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a schema name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),
}

// Compile-time verification of thread-safety
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaRegistry>();
    assert_sync::<SchemaRegistry>();
};
