// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The chain the deployment talks to.
//!
//! [`Chain`] is the seam between the deployment driver and the network: [`RpcChain`] implements
//! it over a JSON-RPC provider, and tests substitute an in-memory double.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder, WalletProvider},
};

use crate::{
    config::ConfigurationError,
    core::{
        configuration::{self, TransactionError},
        deployment::{self, DeployedContract, DeploymentError},
        network::{check_endpoint, NetworkError},
        request::RequestConfig,
    },
    utils::color::DebugColor,
};

/// Signer identities, balances and transaction submission.
#[allow(async_fn_in_trait)]
pub trait Chain {
    /// Address of the default signing identity.
    async fn signer(&self) -> Result<Address, ConfigurationError>;

    /// Current balance of `account` in wei.
    async fn balance(&self, account: Address) -> Result<U256, NetworkError>;

    /// Creates a contract from `initcode`, returning once the creation is confirmed.
    async fn deploy(
        &self,
        sender: Address,
        initcode: Bytes,
    ) -> Result<DeployedContract, DeploymentError>;

    /// Sends one call to `to`, returning once it is confirmed.
    async fn transact(
        &self,
        sender: Address,
        to: Address,
        calldata: Bytes,
    ) -> Result<TxHash, TransactionError>;
}

/// [`Chain`] backed by a JSON-RPC node.
///
/// Transactions are signed by the local wallet when one is configured. Without a wallet the node
/// is asked to sign for its first unlocked account, the way development nodes hand out default
/// signers.
pub struct RpcChain {
    provider: DynProvider,
    wallet_signer: Option<Address>,
    config: RequestConfig,
}

impl RpcChain {
    pub async fn connect(
        endpoint: &str,
        wallet: Option<EthereumWallet>,
        config: RequestConfig,
    ) -> Result<Self, NetworkError> {
        check_endpoint(endpoint)?;
        let connect_err = |source| NetworkError::Connect {
            endpoint: endpoint.to_owned(),
            source,
        };
        debug!(@grey, "connecting to {endpoint}");
        let chain = match wallet {
            Some(wallet) => {
                let provider = ProviderBuilder::new()
                    .wallet(wallet)
                    .connect(endpoint)
                    .await
                    .map_err(connect_err)?;
                let signer = provider.default_signer_address();
                Self {
                    provider: provider.erased(),
                    wallet_signer: Some(signer),
                    config,
                }
            }
            None => {
                let provider = ProviderBuilder::new()
                    .connect(endpoint)
                    .await
                    .map_err(connect_err)?;
                Self {
                    provider: provider.erased(),
                    wallet_signer: None,
                    config,
                }
            }
        };
        Ok(chain)
    }

    pub async fn chain_id(&self) -> Result<u64, NetworkError> {
        Ok(self.provider.get_chain_id().await?)
    }
}

impl Chain for RpcChain {
    async fn signer(&self) -> Result<Address, ConfigurationError> {
        if let Some(signer) = self.wallet_signer {
            return Ok(signer);
        }
        debug!(@grey, "no wallet configured, using node accounts");
        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(ConfigurationError::NodeAccounts)?;
        accounts.first().copied().ok_or(ConfigurationError::NoSigner)
    }

    async fn balance(&self, account: Address) -> Result<U256, NetworkError> {
        Ok(self.provider.get_balance(account).await?)
    }

    async fn deploy(
        &self,
        sender: Address,
        initcode: Bytes,
    ) -> Result<DeployedContract, DeploymentError> {
        let deployed = deployment::deploy(sender, initcode, &self.config, &self.provider).await?;
        debug!(@grey, "deployment tx hash: {}", deployed.tx_hash.debug_lavender());
        Ok(deployed)
    }

    async fn transact(
        &self,
        sender: Address,
        to: Address,
        calldata: Bytes,
    ) -> Result<TxHash, TransactionError> {
        let tx_hash =
            configuration::configure(sender, to, calldata, &self.config, &self.provider).await?;
        debug!(@grey, "configuration tx hash: {}", tx_hash.debug_lavender());
        Ok(tx_hash)
    }
}
