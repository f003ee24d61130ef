//! Persistence for the three top-level collections.
//!
//! State is mirrored to a key-value store as serialized text blobs, one key
//! per collection. The store never sees domain types; [`StateStore`] is the
//! typed layer that owns serialization and the write-through policy.

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::seed;
use crate::types::{PantryItem, Recipe, ShoppingItem};

/// Storage key for the recipe collection.
pub const RECIPES_KEY: &str = "recipes";
/// Storage key for the pantry collection.
pub const PANTRY_KEY: &str = "pantry";
/// Storage key for the shopping list.
pub const SHOPPING_KEY: &str = "shopping_list";

/// A durable text blob store keyed by fixed string identifiers.
pub trait KvStore: Send + Sync {
    /// Read the blob for `key`. Absence is not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob for `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Typed persistence layer over a [`KvStore`].
///
/// Loads fall back to the built-in seed data when a key is absent or its
/// contents no longer deserialize. Saves are write-through with one retry;
/// a save that fails twice is logged and dropped rather than surfaced, so a
/// broken disk never blocks an in-memory mutation.
pub struct StateStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> StateStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_recipes(&self) -> Vec<Recipe> {
        self.load_or(RECIPES_KEY, seed::default_recipes)
    }

    pub fn load_pantry(&self) -> Vec<PantryItem> {
        self.load_or(PANTRY_KEY, seed::default_pantry)
    }

    pub fn load_shopping(&self) -> Vec<ShoppingItem> {
        self.load_or(SHOPPING_KEY, Vec::new)
    }

    pub fn save_recipes(&self, recipes: &[Recipe]) {
        self.save(RECIPES_KEY, recipes);
    }

    pub fn save_pantry(&self, pantry: &[PantryItem]) {
        self.save(PANTRY_KEY, pantry);
    }

    pub fn save_shopping(&self, shopping: &[ShoppingItem]) {
        self.save(SHOPPING_KEY, shopping);
    }

    fn load_or<T, F>(&self, key: &str, default: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match self.store.get(key) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(key, error = %e, "Stored collection no longer parses, using defaults");
                    default()
                }
            },
            Ok(None) => {
                tracing::debug!(key, "No stored collection, using defaults");
                default()
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored collection, using defaults");
                default()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        let blob = match serde_json::to_string(items) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize collection, skipping save");
                return;
            }
        };

        if let Err(first) = self.store.put(key, &blob) {
            tracing::warn!(key, error = %first, "Write-through failed, retrying once");
            if let Err(second) = self.store.put(key, &blob) {
                tracing::error!(key, error = %second, "Write-through retry failed, state not persisted");
            }
        }
    }
}
