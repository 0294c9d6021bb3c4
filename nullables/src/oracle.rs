//! Nullable verification oracle: scripted credential judgments.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use zkid_recovery::VerificationOracle;
use zkid_types::{Address, AttemptId};

/// Returns pre-programmed judgments and remembers what it was asked.
///
/// Anything not scripted is judged `false`.
#[derive(Debug, Default)]
pub struct NullOracle {
    judgments: HashMap<(AttemptId, Address), bool>,
    asked: Mutex<HashSet<(AttemptId, Address)>>,
}

impl NullOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the answer for `guardian` in `attempt`.
    pub fn with(mut self, attempt: AttemptId, guardian: Address, claim: bool) -> Self {
        self.judgments.insert((attempt, guardian), claim);
        self
    }

    /// Whether the oracle has been consulted about `guardian` in `attempt`.
    pub fn was_asked(&self, attempt: AttemptId, guardian: &Address) -> bool {
        self.asked
            .lock()
            .map(|asked| asked.contains(&(attempt, *guardian)))
            .unwrap_or(false)
    }
}

impl VerificationOracle for NullOracle {
    fn judge(&self, attempt: AttemptId, guardian: &Address) -> bool {
        if let Ok(mut asked) = self.asked.lock() {
            asked.insert((attempt, *guardian));
        }
        self.judgments
            .get(&(attempt, *guardian))
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_guardians_are_rejected() {
        let g = Address::repeat_byte(1);
        let oracle = NullOracle::new().with(AttemptId::new(0), g, true);
        assert!(oracle.judge(AttemptId::new(0), &g));
        assert!(!oracle.judge(AttemptId::new(1), &g));
        assert!(oracle.was_asked(AttemptId::new(1), &g));
        assert!(!oracle.was_asked(AttemptId::new(2), &g));
    }
}
