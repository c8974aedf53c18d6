use serde::{Deserialize, Serialize};

use crate::{error::ContractError, util::canonical::to_canonical_vec};

/// The record stored under an asset id. The id itself is only the storage key.
///
/// Wire form is canonical JSON with exactly one field: `{"value":"..."}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Asset {
    pub value: String,
}

impl Asset {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ContractError> {
        to_canonical_vec(self).map_err(ContractError::Encode)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        serde_json::from_slice(bytes).map_err(ContractError::Decode)
    }
}
