use thiserror::Error;

/// Failures raised by a state backend. The contract never retries these.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening or creating the database file failed.
    #[error("cannot open state database: {0}")]
    Open(#[from] redb::DatabaseError),

    #[error("cannot begin transaction: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("cannot open assets table: {0}")]
    Table(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    Engine(#[from] redb::StorageError),

    #[error("cannot commit transaction: {0}")]
    Commit(#[from] redb::CommitError),

    // a writer panicked while holding the in-memory map
    #[error("state lock poisoned")]
    Poisoned,
}
