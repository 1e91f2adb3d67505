//! # Value conversion
//!
//! Converts a raw asset amount into its USD value, expressed as an
//! 18-decimal fixed-point integer.
//!
//! ```text
//! usd = amount * price * 10^18 / 10^(price.decimals + asset_decimals)
//! ```
//!
//! For an 18-decimal asset this reduces to
//! `amount * (price * 10^(18 - price.decimals)) / 10^18`.
//!
//! The intermediate product is computed with the host's unsigned 256-bit
//! integer, and the division (if any) always comes after every
//! multiplication so no precision is lost before the final step.
//!
//! Every path returns a typed error instead of trapping: the scale-up is
//! done in `u128` once the product is known to fit, and a divisor too large
//! for 256 bits is never built.

use soroban_sdk::{Env, U256};

use crate::oracle::PriceData;
use crate::Error;

/// Fixed-point precision of every USD value produced by this module.
pub const USD_DECIMALS: u32 = 18;

/// Largest `n` with `10^n` representable in a `U256`. Any `amount * price`
/// product (both below 2^127) is smaller than `10^MAX_U256_EXP10`.
const MAX_U256_EXP10: u32 = 77;

/// Value `amount` (in the asset's smallest unit) in 18-decimal USD.
pub fn to_usd(
    env: &Env,
    amount: i128,
    asset_decimals: u32,
    price: &PriceData,
) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if price.price <= 0 {
        return Err(Error::OracleUnavailable);
    }

    let product =
        U256::from_u128(env, amount as u128).mul(&U256::from_u128(env, price.price as u128));

    let source_decimals = price
        .decimals
        .checked_add(asset_decimals)
        .ok_or(Error::Overflow)?;

    let scaled = if source_decimals <= USD_DECIMALS {
        // A product past u128 can only grow, so it cannot fit i128 either.
        product
            .to_u128()
            .and_then(|value| value.checked_mul(10u128.pow(USD_DECIMALS - source_decimals)))
            .ok_or(Error::Overflow)?
    } else {
        let exp = source_decimals - USD_DECIMALS;
        if exp >= MAX_U256_EXP10 {
            0
        } else {
            product
                .div(&U256::from_u32(env, 10).pow(exp))
                .to_u128()
                .ok_or(Error::Overflow)?
        }
    };

    i128::try_from(scaled).map_err(|_| Error::Overflow)
}
