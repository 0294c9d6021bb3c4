//! Tunable recovery policy.

use serde::{Deserialize, Serialize};

/// Number of trusted verifiers an account registers.
pub const VERIFIER_COUNT: usize = 3;

/// Policy knobs for a recoverable account.
///
/// Loaded from the `[params]` table of the operator config; every field has a
/// default so an empty table is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryParams {
    /// Refuse to replace the verifier set while any attempt namespace is open.
    /// Replacing verifiers mid-attempt would silently orphan qualification
    /// records written by the removed verifiers.
    pub lock_verifiers_while_open: bool,

    /// Seconds after which an open attempt may be expired via
    /// `expire_attempts`. `0` keeps attempts until finalized or abandoned.
    pub attempt_ttl_secs: u64,
}

impl Default for RecoveryParams {
    fn default() -> Self {
        Self {
            lock_verifiers_while_open: true,
            attempt_ttl_secs: 0,
        }
    }
}

impl RecoveryParams {
    /// Whether attempts ever expire under this policy.
    pub fn attempts_expire(&self) -> bool {
        self.attempt_ttl_secs > 0
    }
}
