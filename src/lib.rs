#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod contract;
pub mod error;
pub mod storage;
pub mod util;

pub use contract::{Asset, AssetStore, Context};
pub use error::ContractError;
pub use storage::{MemoryStore, RedbStore, StateStore, StorageError};
