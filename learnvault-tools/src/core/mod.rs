// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Core building blocks of a deployment.

pub mod artifact;
pub mod chain;
pub mod configuration;
pub mod deployment;
pub mod network;
pub mod request;
