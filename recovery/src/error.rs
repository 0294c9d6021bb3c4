use serde::{Deserialize, Serialize};
use thiserror::Error;
use zkid_types::{Address, AttemptId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecoveryError {
    #[error("caller {caller} is not the account owner")]
    NotOwner { caller: Address },

    #[error("caller {caller} is not a registered verifier")]
    NotVerifier { caller: Address },

    #[error("caller {caller} is not a qualified guardian for attempt {attempt}")]
    NotGuardian { attempt: AttemptId, caller: Address },

    #[error("must register 3 different verifiers: {0} appears more than once")]
    DuplicateVerifier(Address),

    #[error("the zero address cannot be a verifier")]
    ZeroVerifier,

    #[error("the zero address cannot be recorded as pending owner")]
    ZeroPendingOwner,

    #[error("verifier set is locked while {open} recovery attempt(s) are open")]
    VerifiersLocked { open: usize },

    #[error("attempt {attempt} approved but no pending owner is recorded")]
    NoPendingOwner { attempt: AttemptId },

    #[error("recovery not approved for attempt {attempt}: {agree} of {total} guardians agree")]
    NotApproved {
        attempt: AttemptId,
        agree: usize,
        total: usize,
    },

    #[error("snapshot codec error: {0}")]
    Snapshot(String),
}

/// Coarse classification callers branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The caller lacks the role the operation requires.
    Unauthorized,
    /// The request itself is malformed or conflicts with current state.
    InvalidInput,
    /// Nothing changed because the vote has not reached a majority yet.
    NoOp,
}

impl RecoveryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOwner { .. } | Self::NotVerifier { .. } | Self::NotGuardian { .. } => {
                ErrorKind::Unauthorized
            }
            Self::NotApproved { .. } => ErrorKind::NoOp,
            Self::DuplicateVerifier(_)
            | Self::ZeroVerifier
            | Self::ZeroPendingOwner
            | Self::VerifiersLocked { .. }
            | Self::NoPendingOwner { .. }
            | Self::Snapshot(_) => ErrorKind::InvalidInput,
        }
    }
}
