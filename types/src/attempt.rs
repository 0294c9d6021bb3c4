//! Recovery attempt identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-chosen number naming an independent recovery attempt.
///
/// Each attempt owns an isolated namespace of qualification and vote records.
/// The same id can be reused once its namespace has been cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptId(u64);

impl AttemptId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AttemptId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
