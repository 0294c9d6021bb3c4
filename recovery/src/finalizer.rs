//! Recovery finalizer: tallies guardian votes and installs the pending owner.

use crate::account_state::{AccountState, OwnerChange};
use crate::attempt::{AttemptBook, AttemptState};
use crate::error::RecoveryError;
use crate::qualification::QualificationLedger;
use crate::registry::VerifierRegistry;
use serde::{Deserialize, Serialize};
use zkid_types::{Address, AttemptId};

/// Vote count over the effective guardian set of an attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub agree: usize,
    pub total: usize,
}

impl Tally {
    /// Strict majority. A tie or an empty set does not approve.
    pub fn is_approved(&self) -> bool {
        self.agree * 2 > self.total
    }
}

pub struct Finalizer;

impl Finalizer {
    /// Candidates that are currently qualified guardians, first occurrence
    /// kept, everyone else silently dropped.
    pub fn effective_guardians(
        &self,
        state: Option<&AttemptState>,
        registry: &VerifierRegistry,
        candidates: &[Address],
    ) -> Vec<Address> {
        let mut effective: Vec<Address> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if effective.contains(candidate) {
                continue;
            }
            if QualificationLedger.is_guardian(state, registry, candidate) {
                effective.push(*candidate);
            }
        }
        effective
    }

    pub fn tally(
        &self,
        state: Option<&AttemptState>,
        registry: &VerifierRegistry,
        candidates: &[Address],
    ) -> Tally {
        let effective = self.effective_guardians(state, registry, candidates);
        let agree = effective
            .iter()
            .filter(|g| state.is_some_and(|s| s.vote(g)))
            .count();
        Tally {
            agree,
            total: effective.len(),
        }
    }

    /// Install the pending owner if a strict majority of the effective
    /// guardians agree, then drop the attempt's namespace.
    ///
    /// Every check runs before the first write; on error nothing changes.
    pub fn finalize(
        &self,
        book: &mut AttemptBook,
        registry: &VerifierRegistry,
        account: &mut AccountState,
        attempt: AttemptId,
        candidates: &[Address],
    ) -> Result<OwnerChange, RecoveryError> {
        let tally = self.tally(book.get(&attempt), registry, candidates);
        if !tally.is_approved() {
            return Err(RecoveryError::NotApproved {
                attempt,
                agree: tally.agree,
                total: tally.total,
            });
        }
        let change = account
            .install_pending()
            .ok_or(RecoveryError::NoPendingOwner { attempt })?;
        book.remove(&attempt);
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualification::Judgment;
    use crate::registry::VerifierSet;
    use crate::votes::VoteBook;
    use zkid_types::Timestamp;

    fn addr(n: u8) -> Address {
        Address::repeat_byte(n)
    }

    const ATTEMPT: AttemptId = AttemptId::new(0);
    const OWNER: u8 = 0xa0;
    const NEXT: u8 = 0xa1;

    struct Fixture {
        book: AttemptBook,
        registry: VerifierRegistry,
        account: AccountState,
    }

    /// Guardians 20.. are all qualified by verifier 1 and vote as given.
    fn fixture(votes: &[bool]) -> Fixture {
        let mut registry = VerifierRegistry::new();
        registry.register(VerifierSet::new([addr(1), addr(2), addr(3)]).unwrap());
        let mut book = AttemptBook::new();
        for (i, agree) in votes.iter().enumerate() {
            let guardian = addr(20 + i as u8);
            QualificationLedger
                .submit(
                    &mut book,
                    &registry,
                    Judgment {
                        attempt: ATTEMPT,
                        guardian,
                        verifier: addr(1),
                        claim: true,
                    },
                    Timestamp::EPOCH,
                )
                .unwrap();
            VoteBook
                .cast(&mut book, &registry, guardian, ATTEMPT, *agree)
                .unwrap();
        }
        let mut account = AccountState::new(addr(OWNER));
        account.record_pending_owner(&addr(OWNER), addr(NEXT)).unwrap();
        Fixture {
            book,
            registry,
            account,
        }
    }

    fn guardians(n: usize) -> Vec<Address> {
        (0..n).map(|i| addr(20 + i as u8)).collect()
    }

    #[test]
    fn majority_threshold() {
        assert!(!Tally { agree: 0, total: 0 }.is_approved());
        assert!(!Tally { agree: 1, total: 2 }.is_approved());
        assert!(!Tally { agree: 1, total: 3 }.is_approved());
        assert!(Tally { agree: 2, total: 3 }.is_approved());
        assert!(Tally { agree: 1, total: 1 }.is_approved());
    }

    #[test]
    fn one_of_three_does_not_approve() {
        let mut f = fixture(&[true, false, false]);
        let err = Finalizer
            .finalize(&mut f.book, &f.registry, &mut f.account, ATTEMPT, &guardians(3))
            .unwrap_err();
        assert_eq!(
            err,
            RecoveryError::NotApproved {
                attempt: ATTEMPT,
                agree: 1,
                total: 3
            }
        );
        assert!(f.account.is_owner(&addr(OWNER)));
        assert!(f.book.get(&ATTEMPT).is_some());
    }

    #[test]
    fn two_of_three_approves_and_clears() {
        let mut f = fixture(&[false, true, true]);
        let change = Finalizer
            .finalize(&mut f.book, &f.registry, &mut f.account, ATTEMPT, &guardians(3))
            .unwrap();
        assert_eq!(change.old_owner, addr(OWNER));
        assert_eq!(change.new_owner, addr(NEXT));
        assert!(f.account.is_owner(&addr(NEXT)));
        assert!(f.book.get(&ATTEMPT).is_none());
    }

    #[test]
    fn non_guardians_and_duplicates_are_ignored() {
        let f = fixture(&[true, false, false]);
        let mut candidates = guardians(3);
        candidates.push(addr(20));
        candidates.push(addr(99));
        let tally = Finalizer.tally(f.book.get(&ATTEMPT), &f.registry, &candidates);
        assert_eq!(tally, Tally { agree: 1, total: 3 });
    }

    #[test]
    fn subset_of_candidates_can_approve() {
        // Only the agreeing guardian is named, so 1 of 1 agrees.
        let mut f = fixture(&[true, false, false]);
        assert!(Finalizer
            .finalize(&mut f.book, &f.registry, &mut f.account, ATTEMPT, &[addr(20)])
            .is_ok());
    }

    #[test]
    fn empty_candidate_list_does_not_approve() {
        let mut f = fixture(&[true, true, true]);
        assert!(matches!(
            Finalizer.finalize(&mut f.book, &f.registry, &mut f.account, ATTEMPT, &[]),
            Err(RecoveryError::NotApproved { agree: 0, total: 0, .. })
        ));
    }

    #[test]
    fn approval_without_pending_owner_changes_nothing() {
        let mut f = fixture(&[true, true, false]);
        f.account = AccountState::new(addr(OWNER));
        let err = Finalizer
            .finalize(&mut f.book, &f.registry, &mut f.account, ATTEMPT, &guardians(3))
            .unwrap_err();
        assert_eq!(err, RecoveryError::NoPendingOwner { attempt: ATTEMPT });
        assert!(f.account.is_owner(&addr(OWNER)));
        assert!(f.book.get(&ATTEMPT).is_some());
    }
}
