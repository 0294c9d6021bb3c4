//! Recoverable account: ties the registry, qualification ledger, vote book,
//! finalizer and owner slots into one owned value.
//!
//! Every mutating method validates completely before its first write, so a
//! returned error means the account is exactly as it was before the call.

use crate::account_state::{AccountState, OwnerChange};
use crate::attempt::{AttemptBook, AttemptState};
use crate::error::RecoveryError;
use crate::events::RecoveryEvent;
use crate::finalizer::{Finalizer, Tally};
use crate::operation::Operation;
use crate::qualification::{Judgment, QualificationLedger};
use crate::registry::{VerifierRegistry, VerifierSet};
use crate::snapshot::AccountSnapshot;
use crate::votes::VoteBook;
use std::sync::Arc;
use tracing::{debug, info, warn};
use zkid_types::{Address, AttemptId, Clock, RecoveryParams, SystemClock};

pub struct RecoveryAccount {
    qualifications: QualificationLedger,
    votes: VoteBook,
    finalizer: Finalizer,
    params: RecoveryParams,
    state: AccountState,
    registry: VerifierRegistry,
    attempts: AttemptBook,
    clock: Arc<dyn Clock>,
    /// Notifications not yet handed to an observer.
    pending_events: Vec<RecoveryEvent>,
}

impl RecoveryAccount {
    pub fn new(owner: Address, params: RecoveryParams) -> Self {
        Self::with_clock(owner, params, Arc::new(SystemClock))
    }

    pub fn with_clock(owner: Address, params: RecoveryParams, clock: Arc<dyn Clock>) -> Self {
        Self {
            qualifications: QualificationLedger,
            votes: VoteBook,
            finalizer: Finalizer,
            params,
            state: AccountState::new(owner),
            registry: VerifierRegistry::new(),
            attempts: AttemptBook::new(),
            clock,
            pending_events: Vec::new(),
        }
    }

    // ── Owner-facing ────────────────────────────────────────────────────

    /// Replace the verifier set. Owner-only.
    pub fn register_verifiers(
        &mut self,
        caller: &Address,
        verifiers: [Address; 3],
    ) -> Result<(), RecoveryError> {
        self.state.ensure_owner(caller)?;
        let set = VerifierSet::new(verifiers)?;
        if self.params.lock_verifiers_while_open && !self.attempts.is_empty() {
            let open = self.attempts.open_count();
            warn!(open, "verifier rotation refused while attempts are open");
            return Err(RecoveryError::VerifiersLocked { open });
        }
        let previous = self.registry.register(set);
        info!(
            replaced = previous.is_some(),
            verifiers = ?set.as_array(),
            "verifier set registered"
        );
        self.pending_events
            .push(RecoveryEvent::VerifiersRegistered { verifiers });
        Ok(())
    }

    /// Record who takes over on the next successful finalization. Owner-only.
    pub fn record_pending_owner(
        &mut self,
        caller: &Address,
        candidate: Address,
    ) -> Result<(), RecoveryError> {
        let previous = self.state.record_pending_owner(caller, candidate)?;
        info!(%candidate, ?previous, "pending owner recorded");
        self.pending_events
            .push(RecoveryEvent::PendingOwnerRecorded { candidate });
        Ok(())
    }

    /// Discard an attempt's namespace. Owner-only. Returns whether anything
    /// was removed.
    pub fn abandon_attempt(
        &mut self,
        caller: &Address,
        attempt: AttemptId,
    ) -> Result<bool, RecoveryError> {
        self.state.ensure_owner(caller)?;
        if self.attempts.remove(&attempt).is_none() {
            return Ok(false);
        }
        info!(%attempt, "recovery attempt abandoned");
        self.pending_events
            .push(RecoveryEvent::AttemptAbandoned { attempt });
        Ok(true)
    }

    // ── Verifier-facing ─────────────────────────────────────────────────

    pub fn submit_qualification(
        &mut self,
        caller: &Address,
        attempt: AttemptId,
        guardian: Address,
        claim: bool,
    ) -> Result<(), RecoveryError> {
        let now = self.clock.now();
        self.qualifications
            .submit(
                &mut self.attempts,
                &self.registry,
                Judgment {
                    attempt,
                    guardian,
                    verifier: *caller,
                    claim,
                },
                now,
            )
            .inspect_err(|e| warn!(%attempt, %caller, "qualification rejected: {e}"))?;
        debug!(%attempt, %guardian, verifier = %caller, claim, "qualification recorded");
        self.pending_events.push(RecoveryEvent::QualificationSubmitted {
            attempt,
            guardian,
            verifier: *caller,
            claim,
        });
        Ok(())
    }

    // ── Guardian-facing ─────────────────────────────────────────────────

    pub fn submit_vote(
        &mut self,
        caller: &Address,
        attempt: AttemptId,
        agree: bool,
    ) -> Result<(), RecoveryError> {
        self.votes
            .cast(&mut self.attempts, &self.registry, *caller, attempt, agree)
            .inspect_err(|e| warn!(%attempt, %caller, "vote rejected: {e}"))?;
        debug!(%attempt, guardian = %caller, agree, "recovery vote recorded");
        self.pending_events
            .push(RecoveryEvent::RecoveryProposalSubmitted {
                attempt,
                guardian: *caller,
            });
        Ok(())
    }

    // ── Anyone ──────────────────────────────────────────────────────────

    /// Tally `candidates` and, on strict majority, install the pending owner
    /// and clear the attempt.
    pub fn finalize(
        &mut self,
        attempt: AttemptId,
        candidates: &[Address],
    ) -> Result<OwnerChange, RecoveryError> {
        let change = self
            .finalizer
            .finalize(
                &mut self.attempts,
                &self.registry,
                &mut self.state,
                attempt,
                candidates,
            )
            .inspect_err(|e| debug!(%attempt, "finalize did not apply: {e}"))?;
        info!(
            %attempt,
            old_owner = %change.old_owner,
            new_owner = %change.new_owner,
            "account owner changed"
        );
        self.pending_events.push(RecoveryEvent::OwnerChanged {
            old_owner: change.old_owner,
            new_owner: change.new_owner,
        });
        Ok(change)
    }

    /// Drop attempts older than the configured TTL, measured against the
    /// account clock. Does nothing when the TTL is zero.
    pub fn expire_attempts(&mut self) -> Vec<AttemptId> {
        if !self.params.attempts_expire() {
            return Vec::new();
        }
        let now = self.clock.now();
        let expired = self
            .attempts
            .remove_expired(self.params.attempt_ttl_secs, now);
        for attempt in &expired {
            info!(%attempt, "recovery attempt expired");
            self.pending_events
                .push(RecoveryEvent::AttemptExpired { attempt: *attempt });
        }
        expired
    }

    /// Dispatch `op` and return exactly the events it emitted.
    ///
    /// Those events are taken out of the pending buffer, so they are not
    /// returned again by [`Self::drain_events`].
    pub fn apply(&mut self, op: Operation) -> Result<Vec<RecoveryEvent>, RecoveryError> {
        let mark = self.pending_events.len();
        match op {
            Operation::RegisterVerifiers { caller, verifiers } => {
                self.register_verifiers(&caller, verifiers)?
            }
            Operation::RecordPendingOwner { caller, candidate } => {
                self.record_pending_owner(&caller, candidate)?
            }
            Operation::SubmitQualification {
                caller,
                attempt,
                guardian,
                claim,
            } => self.submit_qualification(&caller, attempt, guardian, claim)?,
            Operation::SubmitVote {
                caller,
                attempt,
                agree,
            } => self.submit_vote(&caller, attempt, agree)?,
            Operation::Finalize {
                attempt,
                candidates,
            } => {
                self.finalize(attempt, &candidates)?;
            }
            Operation::AbandonAttempt { caller, attempt } => {
                self.abandon_attempt(&caller, attempt)?;
            }
            Operation::ExpireAttempts => {
                self.expire_attempts();
            }
        }
        Ok(self.pending_events.split_off(mark))
    }

    // ── Read accessors ──────────────────────────────────────────────────

    pub fn owner(&self) -> Address {
        self.state.owner()
    }

    pub fn pending_owner(&self) -> Option<Address> {
        self.state.pending_owner()
    }

    /// Used by the execution layer to authorize a transaction signer.
    pub fn is_owner(&self, identity: &Address) -> bool {
        self.state.is_owner(identity)
    }

    pub fn is_verifier(&self, identity: &Address) -> bool {
        self.registry.is_verifier(identity)
    }

    pub fn verifier(&self, index: usize) -> Option<Address> {
        self.registry.verifier(index)
    }

    pub fn verifiers(&self) -> Option<&VerifierSet> {
        self.registry.active()
    }

    pub fn is_qualified(&self, attempt: AttemptId, guardian: &Address, verifier: &Address) -> bool {
        self.qualifications
            .is_qualified(self.attempts.get(&attempt), guardian, verifier)
    }

    pub fn is_guardian(&self, attempt: AttemptId, guardian: &Address) -> bool {
        self.qualifications
            .is_guardian(self.attempts.get(&attempt), &self.registry, guardian)
    }

    pub fn vote_of(&self, attempt: AttemptId, guardian: &Address) -> bool {
        self.votes.vote_of(self.attempts.get(&attempt), guardian)
    }

    pub fn tally(&self, attempt: AttemptId, candidates: &[Address]) -> Tally {
        self.finalizer
            .tally(self.attempts.get(&attempt), &self.registry, candidates)
    }

    pub fn attempt(&self, attempt: AttemptId) -> Option<&AttemptState> {
        self.attempts.get(&attempt)
    }

    pub fn open_attempts(&self) -> usize {
        self.attempts.open_count()
    }

    pub fn attempt_ids(&self) -> Vec<AttemptId> {
        self.attempts.ids().collect()
    }

    pub fn params(&self) -> &RecoveryParams {
        &self.params
    }

    /// Take every notification emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<RecoveryEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ── Persistence ─────────────────────────────────────────────────────

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            params: self.params.clone(),
            state: self.state.clone(),
            registry: self.registry.clone(),
            attempts: self.attempts.clone(),
        }
    }

    pub fn restore(snapshot: AccountSnapshot, clock: Arc<dyn Clock>) -> Self {
        Self {
            qualifications: QualificationLedger,
            votes: VoteBook,
            finalizer: Finalizer,
            params: snapshot.params,
            state: snapshot.state,
            registry: snapshot.registry,
            attempts: snapshot.attempts,
            clock,
            pending_events: Vec::new(),
        }
    }
}
