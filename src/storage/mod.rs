pub mod api;
pub mod error;
pub mod memory;
pub mod redb_store;

pub use api::StateStore;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use redb_store::RedbStore;
