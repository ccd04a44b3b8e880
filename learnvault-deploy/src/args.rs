// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf, time::Duration};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use learnvault_tools::{
    config::{ConfigurationError, DeployPlan, PlanOverrides},
    core::{chain::RpcChain, request::RequestConfig},
};

use crate::{
    constants::{DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_ENDPOINT},
    utils::{convert_gwei_to_wei, decode0x},
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Whether a local wallet was requested. Without one the node's accounts sign.
    pub fn has_wallet(&self) -> bool {
        self.private_key.is_some() || self.private_key_path.is_some() || self.keystore_path.is_some()
    }

    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return wallet_from_hex(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return wallet_from_hex(key, chain_id);
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no keystore"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn wallet_from_hex(key: impl AsRef<str>, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key)?;
    if key.len() != 32 {
        return Err(ConfigurationError::InvalidSigner(format!(
            "private key must be 32 bytes, got {}",
            key.len()
        ))
        .into());
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct PlanArgs {
    /// Name of the contract to deploy, as found in the artifacts directory
    #[arg(long, env = "CONTRACT_NAME")]
    contract: Option<String>,
    /// Directory holding compiled contract artifacts (Hardhat or Foundry layout)
    #[arg(long, env = "ARTIFACTS_DIR")]
    artifacts: Option<PathBuf>,
    /// Reward token address passed to the contract constructor
    #[arg(long, env = "REWARD_TOKEN_ADDRESS")]
    reward_token: Option<String>,
    /// DeFi protocol address set on the contract after deployment
    #[arg(long, env = "DEFI_PROTOCOL_ADDRESS")]
    defi_protocol: Option<String>,
    /// Setter called with the DeFi protocol address
    #[arg(long, env = "DEFI_PROTOCOL_SETTER")]
    setter: Option<String>,
    /// TOML file with defaults for any of the options above
    #[arg(long)]
    config: Option<PathBuf>,
}

impl PlanArgs {
    pub fn resolve(self) -> Result<DeployPlan, ConfigurationError> {
        let file = match &self.config {
            Some(path) => PlanOverrides::from_file(path)?,
            None => PlanOverrides::default(),
        };
        let flags = PlanOverrides {
            contract: self.contract,
            artifacts: self.artifacts,
            reward_token: self.reward_token,
            defi_protocol: self.defi_protocol,
            setter: self.setter,
        };
        flags.or(file).resolve()
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Seconds to wait for each transaction to be confirmed (0 waits forever)
    #[arg(long, default_value = DEFAULT_CONFIRMATION_TIMEOUT_SECS)]
    pub confirmation_timeout: u64,
}

impl ProviderArgs {
    pub async fn build_chain(&self, auth: &AuthArgs) -> eyre::Result<RpcChain> {
        let config = RequestConfig {
            max_fee_per_gas_wei: auth.get_max_fee_per_gas_wei()?,
            confirmation_timeout: match self.confirmation_timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        };
        let chain = RpcChain::connect(&self.endpoint, None, config.clone()).await?;
        if !auth.has_wallet() {
            return Ok(chain);
        }
        let chain_id = chain.chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let chain = RpcChain::connect(&self.endpoint, Some(wallet), config).await?;
        Ok(chain)
    }
}
