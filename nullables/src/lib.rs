//! Nullable infrastructure for deterministic testing.
//!
//! Time and verifier judgments are the two inputs the recovery core takes from
//! outside. These implementations are controlled programmatically and never
//! touch the system clock or an external service.

pub mod clock;
pub mod oracle;

pub use clock::NullClock;
pub use oracle::NullOracle;
