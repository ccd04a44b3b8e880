// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation.

use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
};
use serde::Serialize;

use crate::{
    core::{
        artifact::ArtifactError,
        request::{Request, RequestConfig, RequestError},
    },
    utils::{color::Color, format_ether},
};

/// A freshly created contract instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: TxHash,
}

/// Deploys `initcode` from `sender` and waits for the contract address.
///
/// The sender balance is checked against the estimated cost first so that an underfunded account
/// fails before anything is broadcast.
pub async fn deploy(
    sender: Address,
    initcode: Bytes,
    config: &RequestConfig,
    provider: &impl Provider,
) -> Result<DeployedContract, DeploymentError> {
    let req = Request::deploy(sender, initcode, config)
        .prepare(provider)
        .await?;

    let cost = req.max_cost();
    let balance = provider.get_balance(sender).await.map_err(RequestError::from)?;
    if balance < cost {
        return Err(DeploymentError::NotEnoughFunds {
            from_address: sender,
            balance,
            cost,
        });
    }

    let receipt = req.exec(provider).await?;
    let address = receipt
        .contract_address
        .ok_or(DeploymentError::MissingReceiptAddress)?;
    Ok(DeployedContract {
        address,
        tx_hash: receipt.transaction_hash,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("deployment failed: {0}")]
    Request(#[from] RequestError),
    #[error(
        "not enough funds in account {} to deploy\nbalance {} < {}",
        .from_address.red(),
        display_ether(.balance).red(),
        display_ether(.cost).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },
    #[error("missing contract address in deployment receipt")]
    MissingReceiptAddress,
}

fn display_ether(wei: &U256) -> String {
    match format_ether(*wei) {
        Ok(ether) => format!("{ether} ETH"),
        Err(_) => format!("{wei} wei"),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256, bytes, utils::parse_ether, U128, U64};

    use super::*;
    use crate::utils::testing::{mocked_provider, receipt, DEPLOYER};

    const TX_HASH: TxHash =
        b256!("0x2222222222222222222222222222222222222222222222222222222222222222");
    const CONTRACT: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    fn deploy_config() -> RequestConfig {
        RequestConfig {
            confirmation_timeout: Some(std::time::Duration::from_secs(5)),
            ..Default::default()
        }
    }

    /// Gas estimate, gas price and tip: 100k gas at 1 gwei.
    fn push_fees(asserter: &alloy::transports::mock::Asserter) {
        asserter.push_success(&U64::from(100_000));
        asserter.push_success(&U128::from(1_000_000_000u64));
        asserter.push_success(&U128::from(1u64));
    }

    #[test]
    fn not_enough_funds_message() {
        let err = DeploymentError::NotEnoughFunds {
            from_address: address!("0x00000000000000000000000000000000000000aa"),
            balance: parse_ether("0.5").unwrap(),
            cost: parse_ether("1.25").unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("0.5 ETH"));
        assert!(msg.contains("1.25 ETH"));
    }

    #[tokio::test]
    async fn returns_receipt_contract_address() {
        let (asserter, provider) = mocked_provider();
        push_fees(&asserter);
        asserter.push_success(&parse_ether("1").unwrap());
        asserter.push_success(&TX_HASH);
        asserter.push_success(&receipt(TX_HASH, true, Some(CONTRACT)));

        let deployed = deploy(DEPLOYER, bytes!("6080"), &deploy_config(), &provider)
            .await
            .unwrap();
        assert_eq!(deployed.address, CONTRACT);
        assert_eq!(deployed.tx_hash, TX_HASH);
    }

    #[tokio::test]
    async fn underfunded_sender_is_rejected_before_sending() {
        let (asserter, provider) = mocked_provider();
        push_fees(&asserter);
        asserter.push_success(&U256::from(1_000u64));

        let err = deploy(DEPLOYER, bytes!("6080"), &deploy_config(), &provider)
            .await
            .unwrap_err();
        match err {
            DeploymentError::NotEnoughFunds {
                from_address,
                balance,
                cost,
            } => {
                assert_eq!(from_address, DEPLOYER);
                assert_eq!(balance, U256::from(1_000u64));
                assert_eq!(cost, U256::from(100_000_000_000_000u64));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn receipt_without_address_is_an_error() {
        let (asserter, provider) = mocked_provider();
        push_fees(&asserter);
        asserter.push_success(&parse_ether("1").unwrap());
        asserter.push_success(&TX_HASH);
        asserter.push_success(&receipt(TX_HASH, true, None));

        let err = deploy(DEPLOYER, bytes!("6080"), &deploy_config(), &provider)
            .await
            .unwrap_err();
        assert!(matches!(err, DeploymentError::MissingReceiptAddress));
    }

    #[tokio::test]
    async fn reverted_creation_is_a_request_error() {
        let (asserter, provider) = mocked_provider();
        push_fees(&asserter);
        asserter.push_success(&parse_ether("1").unwrap());
        asserter.push_success(&TX_HASH);
        asserter.push_success(&receipt(TX_HASH, false, None));

        let err = deploy(DEPLOYER, bytes!("6080"), &deploy_config(), &provider)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DeploymentError::Request(RequestError::Reverted { tx_hash }) if tx_hash == TX_HASH
        ));
    }
}
