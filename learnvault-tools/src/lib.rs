// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying and configuring LearnVault contracts.
//!
//! The [`ops::deploy()`] driver deploys the `LearnToEarnToken` contract with its reward token as
//! constructor argument, then points it at a DeFi protocol, talking to the chain through the
//! [`Chain`](core::chain::Chain) trait.

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result, FAILURE_EXIT_CODE};
