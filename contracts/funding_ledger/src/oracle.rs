//! # Price oracle interface
//!
//! The ledger values deposits through an external oracle contract that
//! reports the asset's USD price as a fixed-point integer. Any contract that
//! implements [`PriceOracle`] can be used as the price feed.

use soroban_sdk::{contractclient, contracttype, log, Address, Env};

use crate::Error;

/// Oldest price (in seconds, relative to the ledger timestamp) still accepted.
pub const MAX_PRICE_AGE: u64 = 3_600;

/// Finest price precision accepted from a feed.
pub const MAX_PRICE_DECIMALS: u32 = 18;

/// A single price report.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// USD per whole asset unit, scaled by `10^decimals`.
    pub price: i128,
    /// Fixed-point precision of `price`.
    pub decimals: u32,
    /// Ledger timestamp at which the price was last updated.
    pub timestamp: u64,
}

#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    /// Return the most recent asset/USD price.
    fn latest_price(env: Env) -> PriceData;
}

/// Query `feed` and validate the report.
///
/// A failed call, a non-positive price, a report older than
/// [`MAX_PRICE_AGE`] or one with more than [`MAX_PRICE_DECIMALS`] decimals
/// all surface as `Error::OracleUnavailable`.
pub fn latest_price(env: &Env, feed: &Address) -> Result<PriceData, Error> {
    let client = PriceOracleClient::new(env, feed);
    let report = match client.try_latest_price() {
        Ok(Ok(report)) => report,
        _ => {
            log!(env, "price feed call failed");
            return Err(Error::OracleUnavailable);
        }
    };

    if report.price <= 0 {
        log!(env, "non-positive price: {}", report.price);
        return Err(Error::OracleUnavailable);
    }

    if report.decimals > MAX_PRICE_DECIMALS {
        log!(env, "unsupported price precision: {}", report.decimals);
        return Err(Error::OracleUnavailable);
    }

    let age = env.ledger().timestamp().saturating_sub(report.timestamp);
    if age > MAX_PRICE_AGE {
        log!(env, "stale price, age {}s", age);
        return Err(Error::OracleUnavailable);
    }

    Ok(report)
}
