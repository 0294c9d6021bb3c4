//! Error type for the shared primitives.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZkidError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
