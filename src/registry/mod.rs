//! Type registries for slide masters, components and brandings.
//!
//! A [`Registry`] maps a stable lowercase-kebab key (or the human label) to a
//! constructible type. The three registries share one generic
//! implementation and are bundled in a [`Catalog`], which is what the
//! factories resolve names through.
//!
//! # Example
//!
//! ```rust
//! use longan::registry::Catalog;
//!
//! let catalog = Catalog::with_builtins();
//! assert!(catalog.slide_masters().exists("title"));
//! assert!(catalog.components().exists("Text Box"));
//!
//! catalog.slide_masters().unregister(&["title"]);
//! assert!(!catalog.slide_masters().exists("title"));
//! ```

pub mod catalog;
pub mod type_ref;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::common::RegistryKind;
use crate::schema::Schema;

pub use catalog::Catalog;
pub use type_ref::TypeRef;

/// A type that can be stored in a [`Registry`].
pub trait RegistryItem: Clone + Send + Sync + 'static {
    /// Registry this item belongs in.
    const KIND: RegistryKind;

    /// Canonical lowercase-kebab key.
    fn key(&self) -> &str;

    /// Human readable label.
    fn label(&self) -> &str;

    /// Rust path of the underlying type.
    fn type_path(&self) -> &str;

    fn description(&self) -> String;

    /// Data schema, if the type is data-driven.
    fn schema(&self) -> Option<Schema> {
        None
    }

    /// Example payload, if the type is data-driven.
    fn example(&self) -> Option<Value> {
        None
    }

    /// Whether `name` is this item's key, label or type path.
    fn matches(&self, name: &str) -> bool {
        self.key() == name || self.label() == name || self.type_path() == name
    }
}

/// Listing entry returned by [`Registry::all`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    pub key: String,
    pub label: String,
    pub type_path: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// Ordered, lock-guarded catalog of one kind of type.
///
/// Entries keep insertion order. Registering an item whose key is already
/// present replaces the existing entry in place.
pub struct Registry<T: RegistryItem> {
    entries: RwLock<Vec<T>>,
}

impl<T: RegistryItem> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RegistryItem> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &T::KIND)
            .field("keys", &self.names())
            .finish()
    }
}

impl<T: RegistryItem> Registry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Create a registry pre-populated with `items`.
    pub fn with_entries(items: impl IntoIterator<Item = T>) -> Self {
        let registry = Self::new();
        registry.register(items);
        registry
    }

    /// Register types; a colliding key is overwritten (last write wins).
    pub fn register(&self, items: impl IntoIterator<Item = T>) {
        let mut entries = self.entries.write();
        for item in items {
            match entries.iter_mut().find(|e| e.key() == item.key()) {
                Some(existing) => {
                    debug!(kind = %T::KIND, key = item.key(), "replacing registry entry");
                    *existing = item;
                }
                None => {
                    debug!(kind = %T::KIND, key = item.key(), "registering type");
                    entries.push(item);
                }
            }
        }
    }

    /// Remove every entry matching one of `names` by key, label or type path.
    ///
    /// Returns the number of entries removed.
    pub fn unregister(&self, names: &[&str]) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|entry| !names.iter().any(|name| entry.matches(name)));
        let removed = before - entries.len();
        debug!(kind = %T::KIND, ?names, removed, "unregistered types");
        removed
    }

    /// Remove every entry.
    pub fn clear(&self) {
        debug!(kind = %T::KIND, "clearing registry");
        self.entries.write().clear();
    }

    /// Metadata of every entry, in registration order.
    pub fn all(&self) -> Vec<EntryMetadata> {
        self.entries
            .read()
            .iter()
            .map(|entry| EntryMetadata {
                key: entry.key().to_string(),
                label: entry.label().to_string(),
                type_path: entry.type_path().to_string(),
                description: entry.description(),
                schema: entry.schema(),
                example: entry.example(),
            })
            .collect()
    }

    /// Registered keys, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().iter().map(|e| e.key().to_string()).collect()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.get_type(name).is_some()
    }

    /// Look a type up by key, falling back to its label.
    pub fn get_type(&self, name: &str) -> Option<T> {
        let entries = self.entries.read();
        entries
            .iter()
            .find(|e| e.key() == name)
            .or_else(|| entries.iter().find(|e| e.label() == name))
            .cloned()
    }

    /// Snapshot of the registered types.
    pub fn entries(&self) -> Vec<T> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
