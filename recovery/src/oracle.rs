//! The seam through which off-chain verification services deliver judgments.
//!
//! The account never decides whether a guardian's credential is valid. A
//! verification service does that work elsewhere and an [`OracleVerifier`]
//! relays the resulting boolean under the verifier's identity.

use crate::account::RecoveryAccount;
use crate::error::RecoveryError;
use crate::ledger::{Receipt, RecoveryLedger};
use crate::operation::Operation;
use zkid_types::{Address, AttemptId};

/// Decides whether `guardian` presented an acceptable credential for `attempt`.
pub trait VerificationOracle {
    fn judge(&self, attempt: AttemptId, guardian: &Address) -> bool;
}

impl<F> VerificationOracle for F
where
    F: Fn(AttemptId, &Address) -> bool,
{
    fn judge(&self, attempt: AttemptId, guardian: &Address) -> bool {
        self(attempt, guardian)
    }
}

/// A registered verifier identity backed by an oracle.
pub struct OracleVerifier<O> {
    identity: Address,
    oracle: O,
}

impl<O: VerificationOracle> OracleVerifier<O> {
    pub fn new(identity: Address, oracle: O) -> Self {
        Self { identity, oracle }
    }

    pub fn identity(&self) -> Address {
        self.identity
    }

    /// Ask the oracle and package the answer as a qualification operation.
    pub fn judgment(&self, attempt: AttemptId, guardian: Address) -> Operation {
        Operation::SubmitQualification {
            caller: self.identity,
            attempt,
            guardian,
            claim: self.oracle.judge(attempt, &guardian),
        }
    }

    /// Judge `guardian` and record the result directly on `account`.
    /// Returns the claim that was recorded.
    pub fn certify(
        &self,
        account: &mut RecoveryAccount,
        attempt: AttemptId,
        guardian: Address,
    ) -> Result<bool, RecoveryError> {
        let claim = self.oracle.judge(attempt, &guardian);
        account.submit_qualification(&self.identity, attempt, guardian, claim)?;
        Ok(claim)
    }

    /// Judge `guardian` and submit the result through the serialized ledger.
    pub async fn certify_via(
        &self,
        ledger: &RecoveryLedger,
        attempt: AttemptId,
        guardian: Address,
    ) -> Result<Receipt, RecoveryError> {
        ledger.submit(self.judgment(attempt, guardian)).await
    }
}
