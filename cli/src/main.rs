//! zkid: operator tool for guardian-recoverable accounts.

mod config;
mod error;
mod scenario;

use anyhow::Context;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;

use config::CliConfig;
use scenario::{load_snapshot, replay, save_snapshot, Scenario};
use zkid_recovery::{RecoveryAccount, RecoveryLedger};
use zkid_types::{Address, AttemptId, SystemClock};
use zkid_utils::LogFormat;

#[derive(Parser)]
#[command(name = "zkid", about = "Guardian recovery account operator tool")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "ZKID_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ZKID_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ZKID_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Submit a scenario's operations to an account, printing one JSON line each.
    Replay {
        /// Scenario file (.toml or .json).
        #[arg(long)]
        scenario: PathBuf,

        /// Write the final account snapshot here (.json or .bin).
        #[arg(long)]
        state_out: Option<PathBuf>,

        /// Continue after a rejected operation.
        #[arg(long)]
        keep_going: bool,
    },
    /// Summarise a saved account snapshot.
    Inspect {
        /// Snapshot file (.json or .bin).
        #[arg(long)]
        state: PathBuf,

        /// Attempt to tally.
        #[arg(long)]
        attempt: Option<u64>,

        /// Candidate guardians for the tally (comma-separated).
        #[arg(long, value_delimiter = ',')]
        candidates: Vec<Address>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    zkid_utils::init_logging(config.log_format, &config.log_level)
        .context("installing log subscriber")?;

    match cli.command {
        Command::Replay {
            scenario,
            state_out,
            keep_going,
        } => {
            let loaded = Scenario::from_path(&scenario)
                .with_context(|| format!("loading scenario {}", scenario.display()))?;
            let ledger = RecoveryLedger::new(loaded.build_account(&config.params)?);
            tracing::info!(
                operations = loaded.operations.len(),
                "replaying {}",
                scenario.display()
            );

            let mut stdout = std::io::stdout().lock();
            let summary = replay(
                &ledger,
                loaded.operations,
                keep_going || config.keep_going,
                &mut stdout,
            )
            .await?;
            tracing::info!(
                applied = summary.applied,
                rejected = summary.rejected,
                "replay finished"
            );

            if let Some(path) = state_out {
                save_snapshot(&path, &ledger.snapshot().await)
                    .with_context(|| format!("writing snapshot {}", path.display()))?;
                tracing::info!("snapshot written to {}", path.display());
            }
            if summary.rejected > 0 && !(keep_going || config.keep_going) {
                anyhow::bail!("replay stopped after a rejected operation");
            }
        }
        Command::Inspect {
            state,
            attempt,
            candidates,
        } => {
            let snapshot = load_snapshot(&state)
                .with_context(|| format!("reading snapshot {}", state.display()))?;
            let account = RecoveryAccount::restore(snapshot, std::sync::Arc::new(SystemClock));

            let attempts: Vec<_> = account
                .attempt_ids()
                .into_iter()
                .filter_map(|id| {
                    account.attempt(id).map(|s| {
                        json!({
                            "attempt": id,
                            "opened_at": s.opened_at,
                            "participants": s.participants().collect::<Vec<_>>(),
                        })
                    })
                })
                .collect();
            let mut summary = json!({
                "owner": account.owner(),
                "pending_owner": account.pending_owner(),
                "verifiers": account.verifiers(),
                "params": account.params(),
                "open_attempts": attempts,
            });
            if let Some(id) = attempt {
                let id = AttemptId::new(id);
                let tally = account.tally(id, &candidates);
                summary["tally"] = json!({
                    "attempt": id,
                    "agree": tally.agree,
                    "total": tally.total,
                    "approved": tally.is_approved(),
                });
            }
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
