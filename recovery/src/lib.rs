//! Guardian qualification and threshold recovery for a self-custodial account.
//!
//! Ownership moves in two phases:
//! 1. **Qualification**: three trusted verifiers judge, per attempt, which
//!    identities may act as guardians. One affirming verifier is enough.
//! 2. **Voting**: qualified guardians approve or reject the ownership change.
//!
//! Finalization tallies the votes of a candidate guardian set and, on strict
//! majority, installs the pending owner and clears the attempt so its id can
//! be reused.
//!
//! Credential checks happen off-chain; verifiers hand the core a boolean
//! through [`oracle::VerificationOracle`].

pub mod account;
pub mod account_state;
pub mod attempt;
pub mod error;
pub mod events;
pub mod finalizer;
pub mod ledger;
pub mod operation;
pub mod oracle;
pub mod qualification;
pub mod registry;
pub mod snapshot;
pub mod votes;

pub use account::RecoveryAccount;
pub use account_state::{AccountState, OwnerChange};
pub use attempt::{AttemptBook, AttemptState};
pub use error::{ErrorKind, RecoveryError};
pub use events::RecoveryEvent;
pub use finalizer::{Finalizer, Tally};
pub use ledger::{Receipt, RecoveryLedger};
pub use operation::Operation;
pub use oracle::{OracleVerifier, VerificationOracle};
pub use qualification::{Judgment, QualificationLedger};
pub use registry::{VerifierRegistry, VerifierSet};
pub use snapshot::AccountSnapshot;
pub use votes::VoteBook;
