use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use crate::storage::{api::StateStore, error::StorageError};

/// In-process state backed by a hash map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.map.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl StateStore for MemoryStore {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        Ok(self.lock()?.get(key).cloned().unwrap_or_default())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    // absent keys are ignored
    fn delete_state(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
