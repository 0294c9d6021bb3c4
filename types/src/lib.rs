//! Shared primitives for the zkid recoverable account.
//!
//! Identities, attempt identifiers, timestamps and the recovery policy live
//! here so every other crate in the workspace agrees on them.

pub mod address;
pub mod attempt;
pub mod error;
pub mod params;
pub mod time;

pub use address::Address;
pub use attempt::AttemptId;
pub use error::ZkidError;
pub use params::{RecoveryParams, VERIFIER_COUNT};
pub use time::{Clock, SystemClock, Timestamp};
