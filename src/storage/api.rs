use crate::storage::error::StorageError;

/// Key-value state the contract reads and writes through.
///
/// `get_state` returns an empty vector for a key that holds nothing.
pub trait StateStore {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    fn delete_state(&self, key: &str) -> Result<(), StorageError>;
}
