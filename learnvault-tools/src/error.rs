// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    config::ConfigurationError,
    core::{
        artifact::ArtifactError, configuration::TransactionError, deployment::DeploymentError,
        network::NetworkError,
    },
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Process exit code reported for any failed deployment.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Any failure of a deployment run, by the step it originated from.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Transaction(#[from] TransactionError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Exit code for the process. Every kind of failure exits with the same code.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

impl From<ArtifactError> for Error {
    fn from(err: ArtifactError) -> Self {
        Self::Deployment(err.into())
    }
}
