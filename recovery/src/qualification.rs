//! Qualification ledger: verifiers certify which identities may act as
//! guardians within an attempt.

use crate::attempt::{AttemptBook, AttemptState};
use crate::error::RecoveryError;
use crate::registry::VerifierRegistry;
use zkid_types::{Address, AttemptId, Timestamp};

/// One verifier's verdict on one guardian within an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Judgment {
    pub attempt: AttemptId,
    pub guardian: Address,
    pub verifier: Address,
    pub claim: bool,
}

/// Engine for recording verifier judgments and deriving guardian status.
pub struct QualificationLedger;

impl QualificationLedger {
    /// Record a verifier's judgment of a guardian.
    ///
    /// Overwrites any earlier judgment by the same verifier for the same
    /// guardian. Nothing is written if the verifier is not registered.
    pub fn submit(
        &self,
        book: &mut AttemptBook,
        registry: &VerifierRegistry,
        judgment: Judgment,
        now: Timestamp,
    ) -> Result<(), RecoveryError> {
        if !registry.is_verifier(&judgment.verifier) {
            return Err(RecoveryError::NotVerifier {
                caller: judgment.verifier,
            });
        }
        book.open(judgment.attempt, now)
            .qualifications
            .entry(judgment.guardian)
            .or_default()
            .insert(judgment.verifier, judgment.claim);
        Ok(())
    }

    /// Raw record lookup; `false` when the attempt or record does not exist.
    pub fn is_qualified(
        &self,
        state: Option<&AttemptState>,
        guardian: &Address,
        verifier: &Address,
    ) -> bool {
        state.is_some_and(|s| s.qualification(guardian, verifier))
    }

    /// A guardian is admitted once any active verifier affirms it.
    ///
    /// Records left by identities that are no longer registered verifiers do
    /// not count.
    pub fn is_guardian(
        &self,
        state: Option<&AttemptState>,
        registry: &VerifierRegistry,
        guardian: &Address,
    ) -> bool {
        let Some(judgments) = state.and_then(|s| s.qualifications.get(guardian)) else {
            return false;
        };
        judgments
            .iter()
            .any(|(verifier, claim)| *claim && registry.is_verifier(verifier))
    }
}
