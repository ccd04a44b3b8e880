// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy the contract and point it at its DeFi protocol.

use std::{fs, io::Write, path::Path};

use alloy::primitives::{Address, TxHash, U256};
use serde::Serialize;

use crate::{
    config::DeployPlan,
    core::{artifact::ContractArtifact, chain::Chain, network::NetworkError},
    utils::{color::DebugColor, format_ether},
    Result,
};

/// Record of a completed deployment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub contract: String,
    pub deployer: Address,
    pub balance: U256,
    pub address: Address,
    pub deployment_tx: TxHash,
    pub defi_protocol: Address,
    pub configuration_tx: TxHash,
}

/// Loads the contract named by `plan` from its artifacts directory and deploys it.
pub async fn deploy(
    chain: &impl Chain,
    plan: &DeployPlan,
    out: &mut impl Write,
) -> Result<Deployment> {
    let artifact = ContractArtifact::find(&plan.artifacts, &plan.contract)?;
    deploy_contract(chain, plan, &artifact, out).await
}

/// Deploys `artifact` with the reward token as its constructor argument, then calls the setter
/// with the DeFi protocol address.
///
/// One progress line is written to `out` after each step. Nothing is retried and nothing is
/// rolled back: if the setter fails the contract stays deployed. Every call deploys a new
/// instance.
pub async fn deploy_contract(
    chain: &impl Chain,
    plan: &DeployPlan,
    artifact: &ContractArtifact,
    out: &mut impl Write,
) -> Result<Deployment> {
    // Both encodings are checked before anything touches the chain.
    let initcode = artifact.initcode(&[plan.reward_token.to_string()])?;
    let calldata = artifact.calldata(&plan.setter, &[plan.defi_protocol.to_string()])?;

    let deployer = chain.signer().await?;
    writeln!(out, "Deploying contracts with the account: {deployer}")?;

    let balance = chain.balance(deployer).await?;
    let balance_ether = format_ether(balance).map_err(NetworkError::from)?;
    writeln!(out, "Account balance: {balance_ether} ETH")?;

    let deployed = chain.deploy(deployer, initcode).await?;
    writeln!(out, "{} deployed to: {}", artifact.name(), deployed.address)?;
    debug!(@grey, "deployment tx: {}", deployed.tx_hash.debug_lavender());

    let configuration_tx = chain
        .transact(deployer, deployed.address, calldata)
        .await?;
    writeln!(out, "DeFi Protocol set to: {}", plan.defi_protocol)?;
    debug!(@grey, "{} tx: {}", plan.setter, configuration_tx.debug_lavender());

    Ok(Deployment {
        contract: artifact.name().to_owned(),
        deployer,
        balance,
        address: deployed.address,
        deployment_tx: deployed.tx_hash,
        defi_protocol: plan.defi_protocol,
        configuration_tx,
    })
}

/// Writes the deployment record as JSON.
pub fn write_record(deployment: &Deployment, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(deployment)?;
    fs::write(path, json)?;
    info!(@grey, "wrote deployment record to {}", path.display());
    Ok(())
}
