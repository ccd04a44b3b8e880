// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Post-deployment configuration calls.

use alloy::{
    primitives::{Address, Bytes, TxHash},
    providers::Provider,
};

use crate::core::request::{Request, RequestConfig, RequestError};

/// Sends one configuration call to `contract` and waits for it to be confirmed.
pub async fn configure(
    sender: Address,
    contract: Address,
    calldata: Bytes,
    config: &RequestConfig,
    provider: &impl Provider,
) -> Result<TxHash, TransactionError> {
    let receipt = Request::call(sender, contract, calldata, config)
        .exec(provider)
        .await?;
    Ok(receipt.transaction_hash)
}

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("invalid call: {0}")]
    InvalidCall(String),
    #[error("configuration tx failed: {0}")]
    Request(#[from] RequestError),
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256, bytes, U128, U64};

    use super::*;
    use crate::utils::testing::{mocked_provider, receipt, DEPLOYER};

    const TX_HASH: TxHash =
        b256!("0x3333333333333333333333333333333333333333333333333333333333333333");
    const CONTRACT: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    #[tokio::test]
    async fn confirmed_call_returns_tx_hash() {
        let (asserter, provider) = mocked_provider();
        asserter.push_success(&U64::from(30_000));
        asserter.push_success(&U128::from(1_000_000_000u64));
        asserter.push_success(&U128::from(1u64));
        asserter.push_success(&TX_HASH);
        asserter.push_success(&receipt(TX_HASH, true, None));

        let config = RequestConfig::default();
        let tx_hash = configure(DEPLOYER, CONTRACT, bytes!("deadbeef"), &config, &provider)
            .await
            .unwrap();
        assert_eq!(tx_hash, TX_HASH);
    }

    #[tokio::test]
    async fn rejected_call_is_a_transaction_error() {
        let (asserter, provider) = mocked_provider();
        asserter.push_failure_msg("execution reverted");

        let config = RequestConfig::default();
        let err = configure(DEPLOYER, CONTRACT, bytes!("deadbeef"), &config, &provider)
            .await
            .unwrap_err();
        assert!(matches!(err, TransactionError::Request(RequestError::Rpc(_))));
    }
}
