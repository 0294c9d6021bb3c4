//! Serialized ledger: a shareable handle that applies operations to one
//! account strictly in submission order.
//!
//! `tokio::sync::Mutex` queues waiters first-in first-out, so concurrent
//! submitters observe a single total order. Each operation runs to
//! completion while the lock is held; nothing inside awaits.

use crate::account::RecoveryAccount;
use crate::error::RecoveryError;
use crate::events::RecoveryEvent;
use crate::finalizer::Tally;
use crate::operation::Operation;
use crate::snapshot::AccountSnapshot;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use zkid_types::{Address, AttemptId};

/// Proof that an operation was applied, and where it sits in the order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub sequence: u64,
    pub events: Vec<RecoveryEvent>,
}

struct LedgerInner {
    account: RecoveryAccount,
    /// Operations submitted so far, accepted or not.
    submitted: u64,
}

#[derive(Clone)]
pub struct RecoveryLedger {
    inner: Arc<Mutex<LedgerInner>>,
}

impl RecoveryLedger {
    pub fn new(account: RecoveryAccount) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LedgerInner {
                account,
                submitted: 0,
            })),
        }
    }

    /// Apply `op`. Rejected operations still consume a sequence number.
    pub async fn submit(&self, op: Operation) -> Result<Receipt, RecoveryError> {
        let mut inner = self.inner.lock().await;
        inner.submitted += 1;
        let sequence = inner.submitted;
        let name = op.name();
        let result = inner.account.apply(op);
        debug!(sequence, op = name, ok = result.is_ok(), "ledger operation applied");
        result.map(|events| Receipt { sequence, events })
    }

    /// Number of operations submitted so far.
    pub async fn submitted(&self) -> u64 {
        self.inner.lock().await.submitted
    }

    pub async fn owner(&self) -> Address {
        self.inner.lock().await.account.owner()
    }

    pub async fn pending_owner(&self) -> Option<Address> {
        self.inner.lock().await.account.pending_owner()
    }

    pub async fn is_qualified(&self, attempt: AttemptId, guardian: Address, verifier: Address) -> bool {
        self.inner
            .lock()
            .await
            .account
            .is_qualified(attempt, &guardian, &verifier)
    }

    pub async fn is_guardian(&self, attempt: AttemptId, guardian: Address) -> bool {
        self.inner.lock().await.account.is_guardian(attempt, &guardian)
    }

    pub async fn vote_of(&self, attempt: AttemptId, guardian: Address) -> bool {
        self.inner.lock().await.account.vote_of(attempt, &guardian)
    }

    pub async fn tally(&self, attempt: AttemptId, candidates: Vec<Address>) -> Tally {
        self.inner.lock().await.account.tally(attempt, &candidates)
    }

    pub async fn snapshot(&self) -> AccountSnapshot {
        self.inner.lock().await.account.snapshot()
    }

    /// Run `f` against the account under the ledger lock.
    pub async fn with_account<R>(&self, f: impl FnOnce(&RecoveryAccount) -> R) -> R {
        f(&self.inner.lock().await.account)
    }
}
