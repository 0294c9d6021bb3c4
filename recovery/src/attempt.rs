//! Per-attempt namespaces.
//!
//! Every qualification and vote record lives inside the [`AttemptState`] of
//! its attempt. A namespace is created by the first write that targets it and
//! removed whole when the attempt is finalized, abandoned or expires.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zkid_types::{Address, AttemptId, Timestamp};

/// Records belonging to a single recovery attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptState {
    /// When the first record for this attempt was written.
    pub opened_at: Timestamp,
    /// guardian -> verifier -> judgment.
    pub qualifications: BTreeMap<Address, BTreeMap<Address, bool>>,
    /// guardian -> agree.
    pub votes: BTreeMap<Address, bool>,
}

impl AttemptState {
    pub fn new(opened_at: Timestamp) -> Self {
        Self {
            opened_at,
            ..Self::default()
        }
    }

    /// Raw judgment of `verifier` about `guardian`; unset reads as `false`.
    pub fn qualification(&self, guardian: &Address, verifier: &Address) -> bool {
        self.qualifications
            .get(guardian)
            .and_then(|by_verifier| by_verifier.get(verifier))
            .copied()
            .unwrap_or(false)
    }

    /// Recorded vote of `guardian`; unset reads as `false`.
    pub fn vote(&self, guardian: &Address) -> bool {
        self.votes.get(guardian).copied().unwrap_or(false)
    }

    /// Every identity that left a record in this namespace.
    pub fn participants(&self) -> impl Iterator<Item = &Address> {
        self.qualifications.keys().chain(
            self.votes
                .keys()
                .filter(|g| !self.qualifications.contains_key(*g)),
        )
    }
}

/// All open attempt namespaces of one account, keyed by attempt id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttemptBook {
    attempts: BTreeMap<AttemptId, AttemptState>,
}

impl AttemptBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attempt: &AttemptId) -> Option<&AttemptState> {
        self.attempts.get(attempt)
    }

    pub fn get_mut(&mut self, attempt: &AttemptId) -> Option<&mut AttemptState> {
        self.attempts.get_mut(attempt)
    }

    /// The namespace for `attempt`, opening it at `now` if absent.
    pub fn open(&mut self, attempt: AttemptId, now: Timestamp) -> &mut AttemptState {
        self.attempts
            .entry(attempt)
            .or_insert_with(|| AttemptState::new(now))
    }

    /// Drop the namespace entirely so the id starts from a clean slate.
    pub fn remove(&mut self, attempt: &AttemptId) -> Option<AttemptState> {
        self.attempts.remove(attempt)
    }

    pub fn open_count(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = AttemptId> + '_ {
        self.attempts.keys().copied()
    }

    /// Remove every attempt opened at least `ttl_secs` before `now`.
    pub fn remove_expired(&mut self, ttl_secs: u64, now: Timestamp) -> Vec<AttemptId> {
        let expired: Vec<AttemptId> = self
            .attempts
            .iter()
            .filter(|(_, state)| state.opened_at.has_expired(ttl_secs, now))
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            self.attempts.remove(id);
        }
        expired
    }
}
