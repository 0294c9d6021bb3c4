//! Persistable image of an account.

use crate::account_state::AccountState;
use crate::attempt::AttemptBook;
use crate::error::RecoveryError;
use crate::registry::VerifierRegistry;
use serde::{Deserialize, Serialize};
use zkid_types::RecoveryParams;

/// Everything needed to rebuild a [`crate::RecoveryAccount`] except its clock
/// and undelivered events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub params: RecoveryParams,
    pub state: AccountState,
    pub registry: VerifierRegistry,
    pub attempts: AttemptBook,
}

impl AccountSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecoveryError> {
        bincode::serialize(self).map_err(|e| RecoveryError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecoveryError> {
        bincode::deserialize(bytes).map_err(|e| RecoveryError::Snapshot(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, RecoveryError> {
        serde_json::to_string_pretty(self).map_err(|e| RecoveryError::Snapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, RecoveryError> {
        serde_json::from_str(json).map_err(|e| RecoveryError::Snapshot(e.to_string()))
    }
}
