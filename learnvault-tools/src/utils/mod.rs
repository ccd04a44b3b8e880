// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{
    utils::{format_units, UnitsError},
    U256,
};

pub mod color;

#[cfg(test)]
pub(crate) mod testing;

/// Formats a wei amount as ether, without trailing zeros.
///
/// At least one fractional digit is kept, so one ether prints as `1.0`.
pub fn format_ether(wei: U256) -> Result<String, UnitsError> {
    let text = format_units(wei, "ether")?;
    let Some((whole, fraction)) = text.split_once('.') else {
        return Ok(format!("{text}.0"));
    };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        Ok(format!("{whole}.0"))
    } else {
        Ok(format!("{whole}.{fraction}"))
    }
}
