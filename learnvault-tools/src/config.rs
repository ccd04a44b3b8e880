// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment parameters.
//!
//! Parameters come from three layers: command line flags, environment variables (both handled by
//! the CLI) and an optional TOML file. [`PlanOverrides`] holds one layer; [`DeployPlan`] is the
//! resolved result.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;
use serde::Deserialize;
use typed_builder::TypedBuilder;

pub const DEFAULT_CONTRACT: &str = "LearnToEarnToken";
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
pub const DEFAULT_SETTER: &str = "setDeFiProtocol";

/// Fully resolved description of what to deploy and how to configure it.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct DeployPlan {
    #[builder(default = DEFAULT_CONTRACT.to_owned())]
    pub contract: String,
    #[builder(default = PathBuf::from(DEFAULT_ARTIFACTS_DIR))]
    pub artifacts: PathBuf,
    /// Constructor argument: the reward token contract.
    pub reward_token: Address,
    /// Argument of the post-deployment setter.
    pub defi_protocol: Address,
    #[builder(default = DEFAULT_SETTER.to_owned())]
    pub setter: String,
}

/// One layer of deployment parameters, any of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlanOverrides {
    pub contract: Option<String>,
    pub artifacts: Option<PathBuf>,
    pub reward_token: Option<String>,
    pub defi_protocol: Option<String>,
    pub setter: Option<String>,
}

impl PlanOverrides {
    /// Reads a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| ConfigurationError::File {
            path: path.to_owned(),
            reason: err.to_string(),
        })?;
        toml::from_str(&text).map_err(|err| ConfigurationError::File {
            path: path.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Fills every unset field from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            contract: self.contract.or(fallback.contract),
            artifacts: self.artifacts.or(fallback.artifacts),
            reward_token: self.reward_token.or(fallback.reward_token),
            defi_protocol: self.defi_protocol.or(fallback.defi_protocol),
            setter: self.setter.or(fallback.setter),
        }
    }

    /// Applies defaults and validates the addresses.
    pub fn resolve(self) -> Result<DeployPlan, ConfigurationError> {
        let reward_token = parse_address("reward token", self.reward_token)?;
        let defi_protocol = parse_address("DeFi protocol", self.defi_protocol)?;
        let mut plan = DeployPlan::builder()
            .reward_token(reward_token)
            .defi_protocol(defi_protocol)
            .build();
        if let Some(contract) = self.contract {
            plan.contract = contract;
        }
        if let Some(artifacts) = self.artifacts {
            plan.artifacts = artifacts;
        }
        if let Some(setter) = self.setter {
            plan.setter = setter;
        }
        Ok(plan)
    }
}

fn parse_address(what: &'static str, value: Option<String>) -> Result<Address, ConfigurationError> {
    let value = value.ok_or(ConfigurationError::Missing(what))?;
    value
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidAddress { what, value })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no signer available: configure a private key or keystore, or use a node with unlocked accounts")]
    NoSigner,
    #[error("failed to list node accounts: {0}")]
    NodeAccounts(alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("invalid signer: {0}")]
    InvalidSigner(String),
    #[error("missing {0} address")]
    Missing(&'static str),
    #[error("invalid {what} address: {value:?}")]
    InvalidAddress { what: &'static str, value: String },
    #[error("could not read config file {}: {reason}", .path.display())]
    File { path: PathBuf, reason: String },
}
