use thiserror::Error;

use crate::storage::error::StorageError;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("the asset {0} already exists")]
    AlreadyExists(String),
    #[error("the asset {0} does not exist")]
    NotFound(String),
    #[error("stored asset is malformed: {0}")] // bytes under the key are not {"value": ..}
    Decode(#[source] serde_json::Error),
    #[error("failed to encode asset: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(#[from] StorageError),
    #[error("unknown function {0:?}")]
    UnknownFunction(String),
    #[error("{function} expects {expected} argument(s), got {got}")]
    InvalidArguments { function: &'static str, expected: usize, got: usize },
}

impl ContractError {
    /// Stable name for the error kind, suitable for a host's error payload.
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::AlreadyExists(_) => "ALREADY_EXISTS",
            ContractError::NotFound(_) => "NOT_FOUND",
            ContractError::Decode(_) => "DECODE_ERROR",
            ContractError::Encode(_) => "ENCODE_ERROR",
            ContractError::Backend(_) => "BACKEND_ERROR",
            ContractError::UnknownFunction(_) => "UNKNOWN_FUNCTION",
            ContractError::InvalidArguments { .. } => "INVALID_ARGUMENTS",
        }
    }
}
