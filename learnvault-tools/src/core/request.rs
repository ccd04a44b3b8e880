// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Sending a single transaction and waiting for its receipt.

use std::time::Duration;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{PendingTransactionError, Provider, WatchTxError},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::utils::color::DebugColor;

/// Fee and confirmation settings shared by every transaction sent to the chain.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Overrides the node gas price when set.
    pub max_fee_per_gas_wei: Option<u128>,
    /// Upper bound on how long to wait for a receipt.
    pub confirmation_timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct Request {
    tx: TransactionRequest,
    config: RequestConfig,
}

impl Request {
    /// Contract creation request carrying the given initcode.
    pub fn deploy(sender: Address, initcode: Bytes, config: &RequestConfig) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(initcode),
            config: config.clone(),
        }
    }

    /// Call request against an existing contract.
    pub fn call(sender: Address, to: Address, calldata: Bytes, config: &RequestConfig) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_to(to)
                .with_input(calldata),
            config: config.clone(),
        }
    }

    /// Asks the node for the gas limit, fee cap and tip of this request.
    ///
    /// The values are fixed on the request, so what is checked against the sender balance is
    /// exactly what gets sent.
    pub async fn prepare(self, provider: &impl Provider) -> Result<Self, RequestError> {
        let gas = provider.estimate_gas(self.tx.clone()).await?;
        let max_fee_per_gas = match self.config.max_fee_per_gas_wei {
            Some(wei) => wei,
            None => provider.get_gas_price().await?,
        };
        let priority_fee = provider.get_max_priority_fee_per_gas().await?;
        debug!(@grey, "gas: {gas}, max fee: {max_fee_per_gas} wei, tip: {priority_fee} wei");
        Ok(self.with_fees(gas, max_fee_per_gas, priority_fee))
    }

    fn with_fees(mut self, gas: u64, max_fee_per_gas: u128, priority_fee: u128) -> Self {
        self.tx.gas = Some(gas);
        self.tx.max_fee_per_gas = Some(max_fee_per_gas);
        // The tip can never exceed the fee cap.
        self.tx.max_priority_fee_per_gas = Some(priority_fee.min(max_fee_per_gas));
        self
    }

    /// Most the request can cost once prepared: gas limit times fee cap.
    pub fn max_cost(&self) -> U256 {
        let gas = self.tx.gas.unwrap_or_default();
        let fee = self.tx.max_fee_per_gas.unwrap_or_default();
        U256::from(gas) * U256::from(fee)
    }

    /// Sends the transaction and blocks until it is confirmed, reverted or timed out.
    ///
    /// An unprepared request is prepared first.
    pub async fn exec(self, provider: &impl Provider) -> Result<TransactionReceipt, RequestError> {
        let req = match self.tx.gas {
            Some(_) => self,
            None => self.prepare(provider).await?,
        };

        let pending = provider.send_transaction(req.tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent tx: {}", tx_hash.debug_lavender());

        let receipt = wait_for_receipt(provider, tx_hash, req.config.confirmation_timeout).await?;
        if !receipt.status() {
            return Err(RequestError::Reverted { tx_hash });
        }
        debug!(@grey, "gas used: {}", receipt.gas_used);
        Ok(receipt)
    }
}

async fn wait_for_receipt(
    provider: &impl Provider,
    tx_hash: TxHash,
    timeout: Option<Duration>,
) -> Result<TransactionReceipt, RequestError> {
    let Some(timeout) = timeout else {
        return poll_receipt(provider, tx_hash).await;
    };
    match tokio::time::timeout(timeout, poll_receipt(provider, tx_hash)).await {
        Ok(res) => res,
        Err(_) => Err(PendingTransactionError::TxWatcher(WatchTxError::Timeout).into()),
    }
}

async fn poll_receipt(
    provider: &impl Provider,
    tx_hash: TxHash,
) -> Result<TransactionReceipt, RequestError> {
    let interval = provider.client().poll_interval();
    loop {
        if let Some(receipt) = provider.get_transaction_receipt(tx_hash).await? {
            return Ok(receipt);
        }
        tokio::time::sleep(interval).await;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("tx failed to complete: {0}")]
    FailedToComplete(#[from] PendingTransactionError),
    #[error("tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
}
