use std::{path::Path, sync::Arc};

use redb::{Database, ReadableTableMetadata, TableDefinition};

use crate::storage::{api::StateStore, error::StorageError};

const ASSETS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("assets");

/// On-disk state: a single redb table keyed by asset id.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Opens (or creates) the database file and makes sure the assets table exists,
    /// so reads against a fresh file do not fail with a missing table.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path)?;

        let txn = db.begin_write()?;
        {
            txn.open_table(ASSETS_TABLE)?;
        }
        txn.commit()?;

        Ok(RedbStore { db: Arc::new(db) })
    }

    pub fn len(&self) -> Result<u64, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ASSETS_TABLE)?;
        Ok(table.len()?)
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ASSETS_TABLE)?;
        Ok(table.is_empty()?)
    }
}

impl StateStore for RedbStore {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ASSETS_TABLE)?;
        match table.get(key)? {
            Some(value_guard) => Ok(value_guard.value().to_vec()),
            None => Ok(Vec::new()),
        }
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ASSETS_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;

        Ok(())
    }

    fn delete_state(&self, key: &str) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(ASSETS_TABLE)?;
            table.remove(key)?.is_some()
        };
        txn.commit()?;

        tracing::trace!(%key, removed, "redb delete");
        Ok(())
    }
}
