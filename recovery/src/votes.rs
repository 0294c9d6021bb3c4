//! Guardian vote book.

use crate::attempt::{AttemptBook, AttemptState};
use crate::error::RecoveryError;
use crate::qualification::QualificationLedger;
use crate::registry::VerifierRegistry;
use zkid_types::{Address, AttemptId};

/// Engine for recording guardian votes on an ownership change.
pub struct VoteBook;

impl VoteBook {
    /// Record `guardian`'s vote for `attempt`. The last vote counts.
    ///
    /// Qualification is checked now, against the current records, never
    /// cached from an earlier call.
    pub fn cast(
        &self,
        book: &mut AttemptBook,
        registry: &VerifierRegistry,
        guardian: Address,
        attempt: AttemptId,
        agree: bool,
    ) -> Result<(), RecoveryError> {
        if !QualificationLedger.is_guardian(book.get(&attempt), registry, &guardian) {
            return Err(RecoveryError::NotGuardian {
                attempt,
                caller: guardian,
            });
        }
        // A qualified guardian implies an open namespace.
        if let Some(state) = book.get_mut(&attempt) {
            state.votes.insert(guardian, agree);
        }
        Ok(())
    }

    pub fn vote_of(&self, state: Option<&AttemptState>, guardian: &Address) -> bool {
        state.is_some_and(|s| s.vote(guardian))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualification::Judgment;
    use crate::registry::VerifierSet;
    use zkid_types::Timestamp;

    fn addr(n: u8) -> Address {
        Address::repeat_byte(n)
    }

    const ATTEMPT: AttemptId = AttemptId::new(3);

    fn setup() -> (AttemptBook, VerifierRegistry) {
        let mut registry = VerifierRegistry::new();
        registry.register(VerifierSet::new([addr(1), addr(2), addr(3)]).unwrap());
        let mut book = AttemptBook::new();
        QualificationLedger
            .submit(
                &mut book,
                &registry,
                Judgment {
                    attempt: ATTEMPT,
                    guardian: addr(20),
                    verifier: addr(2),
                    claim: true,
                },
                Timestamp::EPOCH,
            )
            .unwrap();
        (book, registry)
    }

    #[test]
    fn unqualified_caller_cannot_vote() {
        let (mut book, registry) = setup();
        let err = VoteBook
            .cast(&mut book, &registry, addr(21), ATTEMPT, true)
            .unwrap_err();
        assert_eq!(
            err,
            RecoveryError::NotGuardian {
                attempt: ATTEMPT,
                caller: addr(21)
            }
        );
        assert!(!VoteBook.vote_of(book.get(&ATTEMPT), &addr(21)));
    }

    #[test]
    fn guardian_of_other_attempt_cannot_vote() {
        let (mut book, registry) = setup();
        assert!(VoteBook
            .cast(&mut book, &registry, addr(20), AttemptId::new(4), true)
            .is_err());
        assert!(book.get(&AttemptId::new(4)).is_none());
    }

    #[test]
    fn revote_overwrites() {
        let (mut book, registry) = setup();
        VoteBook.cast(&mut book, &registry, addr(20), ATTEMPT, true).unwrap();
        assert!(VoteBook.vote_of(book.get(&ATTEMPT), &addr(20)));
        VoteBook.cast(&mut book, &registry, addr(20), ATTEMPT, false).unwrap();
        assert!(!VoteBook.vote_of(book.get(&ATTEMPT), &addr(20)));
    }

    #[test]
    fn revoked_qualification_blocks_next_vote() {
        let (mut book, registry) = setup();
        VoteBook.cast(&mut book, &registry, addr(20), ATTEMPT, true).unwrap();
        QualificationLedger
            .submit(
                &mut book,
                &registry,
                Judgment {
                    attempt: ATTEMPT,
                    guardian: addr(20),
                    verifier: addr(2),
                    claim: false,
                },
                Timestamp::EPOCH,
            )
            .unwrap();
        assert!(VoteBook
            .cast(&mut book, &registry, addr(20), ATTEMPT, false)
            .is_err());
    }
}
