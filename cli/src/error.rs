use thiserror::Error;
use zkid_recovery::RecoveryError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("recovery error: {0}")]
    Recovery(#[from] RecoveryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
