//! Serializable operations: the unit of submission to an account or ledger.

use serde::{Deserialize, Serialize};
use zkid_types::{Address, AttemptId};

/// One call against a recoverable account, with the identity that makes it.
///
/// Scenario files and the serialized ledger both speak in operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    RegisterVerifiers {
        caller: Address,
        verifiers: [Address; 3],
    },
    RecordPendingOwner {
        caller: Address,
        candidate: Address,
    },
    SubmitQualification {
        caller: Address,
        attempt: AttemptId,
        guardian: Address,
        claim: bool,
    },
    SubmitVote {
        caller: Address,
        attempt: AttemptId,
        agree: bool,
    },
    /// Open to anyone; authorization is carried by the recorded votes.
    Finalize {
        attempt: AttemptId,
        candidates: Vec<Address>,
    },
    AbandonAttempt {
        caller: Address,
        attempt: AttemptId,
    },
    /// Drops attempts past the TTL according to the account clock.
    ExpireAttempts,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RegisterVerifiers { .. } => "register_verifiers",
            Self::RecordPendingOwner { .. } => "record_pending_owner",
            Self::SubmitQualification { .. } => "submit_qualification",
            Self::SubmitVote { .. } => "submit_vote",
            Self::Finalize { .. } => "finalize",
            Self::AbandonAttempt { .. } => "abandon_attempt",
            Self::ExpireAttempts => "expire_attempts",
        }
    }
}
