//! In-memory token store for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use tenantkit_auth::{TokenStore, TokenStoreError};

/// HashMap-backed store. `poison()` makes every lookup fail, simulating a
/// cache outage so the offline fallback path can be exercised.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
    poisoned: RwLock<bool>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries
            .write()
            .expect("token store lock poisoned")
            .insert(key.into(), payload.into());
    }

    pub fn remove(&self, key: &str) {
        self.entries
            .write()
            .expect("token store lock poisoned")
            .remove(key);
    }

    /// Make every subsequent lookup report the backend as unreachable.
    pub fn poison(&self) {
        *self.poisoned.write().expect("token store lock poisoned") = true;
    }

    pub fn heal(&self) {
        *self.poisoned.write().expect("token store lock poisoned") = false;
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        if *self.poisoned.read().expect("token store lock poisoned") {
            return Err(TokenStoreError("simulated cache outage".to_string()));
        }

        Ok(self
            .entries
            .read()
            .expect("token store lock poisoned")
            .get(key)
            .cloned())
    }
}
