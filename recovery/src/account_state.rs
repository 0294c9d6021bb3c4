//! Owner and pending-owner slots of the account.

use crate::error::RecoveryError;
use serde::{Deserialize, Serialize};
use zkid_types::Address;

/// The result of a successful recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerChange {
    pub old_owner: Address,
    pub new_owner: Address,
}

/// Who controls the account now, and who takes over on the next recovery.
///
/// `owner` is only replaced through [`AccountState::install_pending`], which
/// the finalizer calls after a majority approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    owner: Address,
    pending_owner: Option<Address>,
}

impl AccountState {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            pending_owner: None,
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn pending_owner(&self) -> Option<Address> {
        self.pending_owner
    }

    pub fn is_owner(&self, identity: &Address) -> bool {
        self.owner == *identity
    }

    /// Fail with `NotOwner` unless `caller` is the current owner.
    pub fn ensure_owner(&self, caller: &Address) -> Result<(), RecoveryError> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(RecoveryError::NotOwner { caller: *caller })
        }
    }

    /// Owner-only. Overwrites whatever was pending before.
    pub fn record_pending_owner(
        &mut self,
        caller: &Address,
        candidate: Address,
    ) -> Result<Option<Address>, RecoveryError> {
        self.ensure_owner(caller)?;
        if candidate.is_zero() {
            return Err(RecoveryError::ZeroPendingOwner);
        }
        Ok(self.pending_owner.replace(candidate))
    }

    /// Move the pending owner into the owner slot, emptying the pending slot.
    pub(crate) fn install_pending(&mut self) -> Option<OwnerChange> {
        let new_owner = self.pending_owner.take()?;
        let old_owner = std::mem::replace(&mut self.owner, new_owner);
        Some(OwnerChange {
            old_owner,
            new_owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::repeat_byte(n)
    }

    #[test]
    fn only_owner_records_pending() {
        let mut state = AccountState::new(addr(1));
        assert_eq!(
            state.record_pending_owner(&addr(2), addr(3)),
            Err(RecoveryError::NotOwner { caller: addr(2) })
        );
        assert_eq!(state.pending_owner(), None);
        assert_eq!(state.record_pending_owner(&addr(1), addr(3)), Ok(None));
        assert_eq!(state.record_pending_owner(&addr(1), addr(4)), Ok(Some(addr(3))));
        assert_eq!(state.pending_owner(), Some(addr(4)));
    }

    #[test]
    fn zero_pending_owner_rejected() {
        let mut state = AccountState::new(addr(1));
        state.record_pending_owner(&addr(1), addr(4)).unwrap();
        let err = state
            .record_pending_owner(&addr(1), Address::ZERO)
            .unwrap_err();
        assert_eq!(err, RecoveryError::ZeroPendingOwner);
        assert_eq!(err.kind(), crate::ErrorKind::InvalidInput);
        assert_eq!(state.pending_owner(), Some(addr(4)));
    }

    #[test]
    fn install_consumes_pending() {
        let mut state = AccountState::new(addr(1));
        assert_eq!(state.install_pending(), None);
        state.record_pending_owner(&addr(1), addr(2)).unwrap();
        let change = state.install_pending().unwrap();
        assert_eq!(change.old_owner, addr(1));
        assert_eq!(change.new_owner, addr(2));
        assert!(state.is_owner(&addr(2)));
        assert_eq!(state.pending_owner(), None);
    }
}
