//! # Store / Till Directory
//!
//! The multi-store model: stores own tills, sessions run on tills. This is
//! an in-memory directory; durable storage of stores and tills lives behind
//! the external persistence API.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use ploutos_core::DEFAULT_STORE_ID;

use crate::error::{RegisterError, RegisterResult};

/// A till (physical cash register) within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Till {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to operators ("Caixa 1").
    pub name: String,
}

/// A store with its tills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Tills belonging to this store.
    pub tills: Vec<Till>,
}

/// In-memory directory of stores and their tills.
///
/// Interior mutability follows the register state pattern: a mutex-guarded
/// map, with short critical sections and cloned values returned to callers.
#[derive(Debug, Default)]
pub struct StoreDirectory {
    stores: Mutex<HashMap<String, Store>>,
}

impl StoreDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        StoreDirectory::default()
    }

    /// Creates a directory pre-seeded for a single-store deployment: one
    /// store under [`DEFAULT_STORE_ID`] with one till.
    pub fn single_store(store_name: impl Into<String>) -> Self {
        let directory = StoreDirectory::new();
        let store = Store {
            id: DEFAULT_STORE_ID.to_string(),
            name: store_name.into(),
            tills: vec![Till {
                id: Uuid::new_v4().to_string(),
                name: "Caixa 1".to_string(),
            }],
        };
        directory.lock().insert(store.id.clone(), store);
        directory
    }

    /// Registers a new store and returns it.
    pub fn add_store(&self, name: impl Into<String>) -> Store {
        let store = Store {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            tills: Vec::new(),
        };
        debug!(store_id = %store.id, name = %store.name, "Store registered");
        self.lock().insert(store.id.clone(), store.clone());
        store
    }

    /// Adds a till to an existing store and returns it.
    pub fn add_till(&self, store_id: &str, name: impl Into<String>) -> RegisterResult<Till> {
        let mut stores = self.lock();
        let store = stores
            .get_mut(store_id)
            .ok_or_else(|| RegisterError::NotFound {
                entity: "Store".to_string(),
                id: store_id.to_string(),
            })?;

        let till = Till {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        };
        debug!(store_id = %store_id, till_id = %till.id, "Till added");
        store.tills.push(till.clone());
        Ok(till)
    }

    /// Looks a store up by id.
    pub fn store(&self, store_id: &str) -> RegisterResult<Store> {
        self.lock()
            .get(store_id)
            .cloned()
            .ok_or_else(|| RegisterError::NotFound {
                entity: "Store".to_string(),
                id: store_id.to_string(),
            })
    }

    /// All registered stores.
    pub fn stores(&self) -> Vec<Store> {
        self.lock().values().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Store>> {
        self.stores.lock().expect("Store directory mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_store_seeds_default_id() {
        let directory = StoreDirectory::single_store("Loja Centro");
        let store = directory.store(DEFAULT_STORE_ID).unwrap();
        assert_eq!(store.name, "Loja Centro");
        assert_eq!(store.tills.len(), 1);
    }

    #[test]
    fn test_add_store_and_tills() {
        let directory = StoreDirectory::new();
        let store = directory.add_store("Loja Norte");
        directory.add_till(&store.id, "Caixa 1").unwrap();
        directory.add_till(&store.id, "Caixa 2").unwrap();

        let fetched = directory.store(&store.id).unwrap();
        assert_eq!(fetched.tills.len(), 2);
        assert_eq!(directory.stores().len(), 1);
    }

    #[test]
    fn test_unknown_store_is_not_found() {
        let directory = StoreDirectory::new();
        assert!(matches!(
            directory.add_till("missing", "Caixa 1"),
            Err(RegisterError::NotFound { .. })
        ));
        assert!(matches!(
            directory.store("missing"),
            Err(RegisterError::NotFound { .. })
        ));
    }
}
