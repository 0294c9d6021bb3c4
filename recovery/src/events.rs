//! Notifications for off-chain observers (wallet UI, indexers).

use serde::{Deserialize, Serialize};
use zkid_types::{Address, AttemptId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RecoveryEvent {
    /// The owner installed a new verifier set.
    VerifiersRegistered { verifiers: [Address; 3] },
    /// The owner recorded who should take over on the next successful recovery.
    PendingOwnerRecorded { candidate: Address },
    /// A verifier judged a guardian for an attempt.
    QualificationSubmitted {
        attempt: AttemptId,
        guardian: Address,
        verifier: Address,
        claim: bool,
    },
    /// A guardian voted. Emitted on every vote, including re-votes.
    RecoveryProposalSubmitted { attempt: AttemptId, guardian: Address },
    /// Finalization installed the pending owner.
    OwnerChanged { old_owner: Address, new_owner: Address },
    /// The owner discarded an attempt's namespace.
    AttemptAbandoned { attempt: AttemptId },
    /// An attempt outlived the configured TTL and was discarded.
    AttemptExpired { attempt: AttemptId },
}
