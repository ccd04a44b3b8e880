// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! In-memory [`Chain`] for exercising the deployment driver, and a scripted JSON-RPC provider
//! for the code that talks to a node.

use alloy::{
    primitives::{address, keccak256, utils::parse_ether, Address, Bloom, Bytes, TxHash, B256, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::{mock::Asserter, RpcError, TransportErrorKind},
};
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::{
    config::ConfigurationError,
    core::{
        chain::Chain,
        configuration::TransactionError,
        deployment::{DeployedContract, DeploymentError},
        network::NetworkError,
        request::RequestError,
    },
};

pub const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Chain double that records every deployment and call it receives.
///
/// Contract addresses are derived from the deployer nonce, so every deployment lands at a new
/// address, as it would on a real chain.
pub struct MockChain {
    pub signer: Option<Address>,
    pub balance: U256,
    pub fail_balance: bool,
    pub fail_deploy: bool,
    pub fail_transact: bool,
    pub(crate) state: Mutex<MockState>,
}

#[derive(Default)]
pub(crate) struct MockState {
    nonce: u64,
    signer_requests: usize,
    deploys: Vec<Bytes>,
    calls: Vec<(Address, Bytes)>,
}

impl MockChain {
    /// A chain where [`DEPLOYER`] holds one ether and everything succeeds.
    pub fn funded() -> Self {
        Self {
            signer: Some(DEPLOYER),
            balance: parse_ether("1").unwrap(),
            fail_balance: false,
            fail_deploy: false,
            fail_transact: false,
            state: Mutex::default(),
        }
    }

    pub fn signer_requests(&self) -> usize {
        self.state.lock().signer_requests
    }

    /// Initcode of every attempted deployment.
    pub fn deploys(&self) -> Vec<Bytes> {
        self.state.lock().deploys.clone()
    }

    /// Target and calldata of every attempted call.
    pub fn calls(&self) -> Vec<(Address, Bytes)> {
        self.state.lock().calls.clone()
    }

    fn next_tx_hash(state: &mut MockState) -> TxHash {
        let hash = keccak256(state.nonce.to_be_bytes());
        state.nonce += 1;
        hash
    }
}

impl Chain for MockChain {
    async fn signer(&self) -> Result<Address, ConfigurationError> {
        self.state.lock().signer_requests += 1;
        self.signer.ok_or(ConfigurationError::NoSigner)
    }

    async fn balance(&self, _account: Address) -> Result<U256, NetworkError> {
        if self.fail_balance {
            return Err(RpcError::Transport(TransportErrorKind::BackendGone).into());
        }
        Ok(self.balance)
    }

    async fn deploy(
        &self,
        sender: Address,
        initcode: Bytes,
    ) -> Result<DeployedContract, DeploymentError> {
        let mut state = self.state.lock();
        state.deploys.push(initcode);
        let address = sender.create(state.nonce);
        let tx_hash = Self::next_tx_hash(&mut state);
        if self.fail_deploy {
            return Err(RequestError::Reverted { tx_hash }.into());
        }
        Ok(DeployedContract { address, tx_hash })
    }

    async fn transact(
        &self,
        _sender: Address,
        to: Address,
        calldata: Bytes,
    ) -> Result<TxHash, TransactionError> {
        let mut state = self.state.lock();
        state.calls.push((to, calldata));
        let tx_hash = Self::next_tx_hash(&mut state);
        if self.fail_transact {
            return Err(RequestError::Reverted { tx_hash }.into());
        }
        Ok(tx_hash)
    }
}

/// Provider answering each request with the next queued [`Asserter`] response, in order.
pub fn mocked_provider() -> (Asserter, DynProvider) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone())
        .erased();
    (asserter, provider)
}

/// JSON-RPC receipt for a mined EIP-1559 transaction sent by [`DEPLOYER`].
pub fn receipt(tx_hash: TxHash, status: bool, contract_address: Option<Address>) -> Value {
    json!({
        "type": "0x2",
        "status": if status { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x5208",
        "logs": [],
        "logsBloom": Bloom::ZERO,
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0x22),
        "blockNumber": "0x1",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "from": DEPLOYER,
        "to": Value::Null,
        "contractAddress": contract_address,
    })
}
