// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::utils::color::Color;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("could not connect to {}: {source}", .endpoint.red())]
    Connect {
        endpoint: String,
        source: alloy::transports::RpcError<alloy::transports::TransportErrorKind>,
    },
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("failed to format balance: {0}")]
    Units(#[from] alloy::primitives::utils::UnitsError),
}

/// Rejects endpoints that are obviously not JSON-RPC URLs before a connection is attempted.
pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    let supported = ["http://", "https://", "ws://", "wss://"];
    if supported.iter().any(|scheme| endpoint.starts_with(scheme)) || endpoint.ends_with(".ipc") {
        Ok(())
    } else {
        Err(NetworkError::Connect {
            endpoint: endpoint.to_owned(),
            source: alloy::transports::TransportErrorKind::custom_str("unsupported url scheme"),
        })
    }
}
