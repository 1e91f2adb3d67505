//! # Ledger
//!
//! Deposit path and read-side queries over the contribution records.
//!
//! A deposit is valued in USD before anything is written. Only when it
//! clears the configured minimum are the tokens pulled in and the three
//! records (contribution, funder list, balance) updated together. Any
//! error returned from here aborts the whole invocation, which Soroban
//! rolls back, so a rejected deposit leaves no trace.

use soroban_sdk::{log, token, Address, Env};

use crate::{converter, oracle, storage, Error};

/// Value `amount` of the ledger's asset in 18-decimal USD at the current
/// oracle price.
pub fn usd_value(env: &Env, amount: i128) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let price = oracle::latest_price(env, &storage::get_price_feed(env))?;
    let asset_decimals = token::Client::new(env, &storage::get_asset(env)).decimals();
    converter::to_usd(env, amount, asset_decimals, &price)
}

/// Accept `amount` from `funder` and record it.
///
/// Returns the USD value the deposit was accepted at.
pub fn fund(env: &Env, funder: &Address, amount: i128) -> Result<i128, Error> {
    let usd = usd_value(env, amount)?;
    let minimum = storage::get_minimum_usd(env);
    if amount == 0 || usd < minimum {
        log!(env, "deposit below minimum: {} < {}", usd, minimum);
        return Err(Error::InsufficientFunds);
    }

    let asset = token::Client::new(env, &storage::get_asset(env));
    match asset.try_transfer(funder, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => return Err(Error::TransferFailed),
    }

    storage::add_to_contribution(env, funder, amount)?;
    storage::push_funder(env, funder)?;
    storage::add_to_balance(env, amount)?;

    Ok(usd)
}

/// Cumulative amount funded by `funder` since the last withdrawal.
pub fn amount_funded_by(env: &Env, funder: &Address) -> i128 {
    storage::get_contribution(env, funder)
}

/// The funder recorded at position `index`.
pub fn funder_at(env: &Env, index: u32) -> Result<Address, Error> {
    storage::funder_at(env, index).ok_or(Error::FunderNotFound)
}

pub fn funder_count(env: &Env) -> u32 {
    storage::funder_count(env)
}
