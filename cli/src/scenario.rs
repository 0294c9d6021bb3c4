//! Scenario files and replay.
//!
//! A scenario names the starting account (a fresh `owner`, or a saved
//! `state` snapshot) and a list of operations to submit in order. TOML and
//! JSON are both accepted; the file extension decides.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use zkid_recovery::{
    AccountSnapshot, ErrorKind, Operation, RecoveryAccount, RecoveryEvent, RecoveryLedger,
};
use zkid_types::{Address, RecoveryParams, SystemClock};

use crate::error::CliError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Owner of a freshly created account. Ignored when `state` is given.
    #[serde(default)]
    pub owner: Option<Address>,

    /// Snapshot to resume from instead of creating a fresh account.
    #[serde(default)]
    pub state: Option<PathBuf>,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        let mut scenario = if is_json(path) {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        // Relative snapshot paths are resolved next to the scenario file.
        if let (Some(state), Some(dir)) = (scenario.state.as_mut(), path.parent()) {
            if state.is_relative() {
                *state = dir.join(&*state);
            }
        }
        Ok(scenario)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Scenario(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self, CliError> {
        serde_json::from_str(s).map_err(|e| CliError::Scenario(e.to_string()))
    }

    /// Build the starting account. A resumed snapshot keeps its own params.
    pub fn build_account(&self, params: &RecoveryParams) -> Result<RecoveryAccount, CliError> {
        match (&self.state, self.owner) {
            (Some(path), _) => {
                let snapshot = load_snapshot(path)?;
                Ok(RecoveryAccount::restore(snapshot, Arc::new(SystemClock)))
            }
            (None, Some(owner)) => Ok(RecoveryAccount::new(owner, params.clone())),
            (None, None) => Err(CliError::Scenario(
                "scenario needs either `owner` or `state`".into(),
            )),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn is_binary(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bin"))
}

/// Read a snapshot; `.bin` files are bincode, everything else JSON.
pub fn load_snapshot(path: &Path) -> Result<AccountSnapshot, CliError> {
    if is_binary(path) {
        Ok(AccountSnapshot::from_bytes(&std::fs::read(path)?)?)
    } else {
        Ok(AccountSnapshot::from_json(&std::fs::read_to_string(path)?)?)
    }
}

pub fn save_snapshot(path: &Path, snapshot: &AccountSnapshot) -> Result<(), CliError> {
    if is_binary(path) {
        std::fs::write(path, snapshot.to_bytes()?)?;
    } else {
        std::fs::write(path, snapshot.to_json()?)?;
    }
    Ok(())
}

/// One line of replay output.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReplayLine {
    Applied {
        index: usize,
        op: String,
        sequence: u64,
        events: Vec<RecoveryEvent>,
    },
    Rejected {
        index: usize,
        op: String,
        kind: ErrorKind,
        error: String,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Submit `operations` in order, writing one JSON line per operation.
///
/// Stops at the first rejection unless `keep_going` is set.
pub async fn replay(
    ledger: &RecoveryLedger,
    operations: Vec<Operation>,
    keep_going: bool,
    out: &mut impl Write,
) -> Result<ReplaySummary, CliError> {
    let mut summary = ReplaySummary::default();
    for (index, op) in operations.into_iter().enumerate() {
        let name = op.name().to_string();
        let line = match ledger.submit(op).await {
            Ok(receipt) => {
                summary.applied += 1;
                ReplayLine::Applied {
                    index,
                    op: name,
                    sequence: receipt.sequence,
                    events: receipt.events,
                }
            }
            Err(e) => {
                summary.rejected += 1;
                tracing::warn!(index, op = %name, "operation rejected: {e}");
                ReplayLine::Rejected {
                    index,
                    op: name,
                    kind: e.kind(),
                    error: e.to_string(),
                }
            }
        };
        let json = serde_json::to_string(&line)
            .map_err(|e| CliError::Scenario(format!("encoding replay output: {e}")))?;
        writeln!(out, "{json}")?;

        if matches!(line, ReplayLine::Rejected { .. }) && !keep_going {
            break;
        }
    }
    Ok(summary)
}
