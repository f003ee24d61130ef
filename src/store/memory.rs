//! In-memory key-value store for tests.
//!
//! Records every successful write so tests can assert exact write-through
//! payloads, and can be told to fail upcoming writes to exercise the retry
//! path.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};

use super::KvStore;
use crate::error::StoreError;

/// Clones share the same underlying map, so a test can keep a handle to the
/// store it hands the controller and inspect writes afterwards.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<RwLock<Vec<(String, String)>>>,
    failures_remaining: Arc<AtomicU32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` calls to `put` fail with an I/O error.
    pub fn fail_next_puts(&self, count: u32) {
        self.failures_remaining.store(count, Ordering::SeqCst);
    }

    /// All successful writes, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.read().unwrap().clone()
    }

    /// Successful write payloads for one key, in order.
    pub fn writes_for(&self, key: &str) -> Vec<String> {
        self.writes
            .read()
            .unwrap()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::io(
                key,
                io::Error::new(io::ErrorKind::Other, "injected write failure"),
            ));
        }

        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.writes
            .write()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}
