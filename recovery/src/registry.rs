//! Verifier registry: the three trusted identities allowed to qualify guardians.

use crate::error::RecoveryError;
use serde::{Deserialize, Serialize};
use zkid_types::{Address, VERIFIER_COUNT};

/// An ordered triple of distinct, non-zero verifier identities.
///
/// Only constructible through [`VerifierSet::new`], so every value upholds the
/// invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Address; 3]", into = "[Address; 3]")]
pub struct VerifierSet([Address; VERIFIER_COUNT]);

impl VerifierSet {
    pub fn new(verifiers: [Address; VERIFIER_COUNT]) -> Result<Self, RecoveryError> {
        if verifiers.iter().any(Address::is_zero) {
            return Err(RecoveryError::ZeroVerifier);
        }
        for (i, v) in verifiers.iter().enumerate() {
            if verifiers[i + 1..].contains(v) {
                return Err(RecoveryError::DuplicateVerifier(*v));
            }
        }
        Ok(Self(verifiers))
    }

    pub fn contains(&self, identity: &Address) -> bool {
        self.0.contains(identity)
    }

    pub fn get(&self, index: usize) -> Option<Address> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }

    pub fn as_array(&self) -> &[Address; VERIFIER_COUNT] {
        &self.0
    }
}

impl TryFrom<[Address; VERIFIER_COUNT]> for VerifierSet {
    type Error = RecoveryError;

    fn try_from(verifiers: [Address; VERIFIER_COUNT]) -> Result<Self, Self::Error> {
        Self::new(verifiers)
    }
}

impl From<VerifierSet> for [Address; VERIFIER_COUNT] {
    fn from(set: VerifierSet) -> Self {
        set.0
    }
}

/// Holds the active verifier set, if one has been registered.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VerifierRegistry {
    active: Option<VerifierSet>,
}

impl VerifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active set. All three identities change together.
    pub fn register(&mut self, set: VerifierSet) -> Option<VerifierSet> {
        self.active.replace(set)
    }

    pub fn is_verifier(&self, identity: &Address) -> bool {
        self.active.as_ref().is_some_and(|set| set.contains(identity))
    }

    /// The verifier at `index`, or `None` when unregistered or out of range.
    pub fn verifier(&self, index: usize) -> Option<Address> {
        self.active.as_ref().and_then(|set| set.get(index))
    }

    pub fn active(&self) -> Option<&VerifierSet> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::repeat_byte(n)
    }

    #[test]
    fn accepts_three_distinct_nonzero() {
        let set = VerifierSet::new([addr(1), addr(2), addr(3)]).unwrap();
        assert!(set.contains(&addr(2)));
        assert_eq!(set.get(0), Some(addr(1)));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn rejects_duplicates_in_any_position() {
        for triple in [
            [addr(1), addr(1), addr(3)],
            [addr(1), addr(2), addr(1)],
            [addr(1), addr(2), addr(2)],
        ] {
            assert!(matches!(
                VerifierSet::new(triple),
                Err(RecoveryError::DuplicateVerifier(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_identity() {
        assert_eq!(
            VerifierSet::new([addr(1), Address::ZERO, addr(3)]),
            Err(RecoveryError::ZeroVerifier)
        );
    }

    #[test]
    fn empty_registry_has_no_verifiers() {
        let registry = VerifierRegistry::new();
        assert!(!registry.is_verifier(&addr(1)));
        assert!(!registry.is_verifier(&Address::ZERO));
        assert_eq!(registry.verifier(0), None);
    }

    #[test]
    fn register_replaces_whole_set() {
        let mut registry = VerifierRegistry::new();
        let first = VerifierSet::new([addr(1), addr(2), addr(3)]).unwrap();
        let second = VerifierSet::new([addr(4), addr(5), addr(6)]).unwrap();
        assert_eq!(registry.register(first), None);
        assert_eq!(registry.register(second), Some(first));
        assert!(!registry.is_verifier(&addr(1)));
        assert!(registry.is_verifier(&addr(6)));
        assert_eq!(registry.verifier(1), Some(addr(5)));
    }

    #[test]
    fn deserializing_invalid_set_fails() {
        let json = serde_json::to_string(&[addr(1), addr(1), addr(2)]).unwrap();
        assert!(serde_json::from_str::<VerifierSet>(&json).is_err());
    }
}
