// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type DeployResult<T = ()> = Result<T, DeployError>;

#[derive(Debug)]
pub struct DeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl DeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for DeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for DeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<learnvault_tools::Error> for DeployError {
    fn from(err: learnvault_tools::Error) -> Self {
        let exit_code = ExitCode::from(err.exit_code());
        Self {
            error: err.into(),
            exit_code,
        }
    }
}

impl From<learnvault_tools::config::ConfigurationError> for DeployError {
    fn from(err: learnvault_tools::config::ConfigurationError) -> Self {
        learnvault_tools::Error::from(err).into()
    }
}
