//! # Withdrawals
//!
//! Both withdrawal variants drain the whole tracked balance to the owner and
//! reset every contribution record. They differ only in how the funder list
//! is walked:
//!
//! - [`WithdrawMode::Standard`] re-reads the stored list length on every
//!   step, then reads that one position through the bounds-checked accessor.
//! - [`WithdrawMode::Cheaper`] reads the length once and walks the positions
//!   directly.
//!
//! Each step touches a single list entry, so both variants are linear in the
//! number of deposits.
//!
//! The end state is identical. Ordering within a withdrawal is fixed:
//!
//! ```text
//! clear records ─► clear list ─► zero balance ─► transfer to owner
//! ```
//!
//! The transfer is the only external call and runs last. If it fails the
//! error aborts the invocation and every staged write above is rolled back.

use soroban_sdk::{log, token, Address, Env};

use crate::events::WithdrawMode;
use crate::{storage, Error};

/// Outcome of a completed withdrawal.
pub struct Settlement {
    pub amount: i128,
    pub funders_cleared: u32,
}

/// Reset the ledger and pay its balance to `owner`.
///
/// The caller must already have passed the owner check and hold the lock.
pub fn settle(env: &Env, owner: &Address, mode: &WithdrawMode) -> Result<Settlement, Error> {
    let funders_cleared = match mode {
        WithdrawMode::Standard => reset_records(env),
        WithdrawMode::Cheaper => reset_records_cached(env),
    };
    storage::clear_funders(env);

    let amount = storage::get_balance(env);
    storage::set_balance(env, 0);

    payout(env, owner, amount)?;

    Ok(Settlement {
        amount,
        funders_cleared,
    })
}

/// Clear every record, re-reading the list length once per step.
fn reset_records(env: &Env) -> u32 {
    let mut index = 0;
    while index < storage::funder_count(env) {
        if let Some(funder) = storage::funder_at(env, index) {
            storage::clear_contribution(env, &funder);
        }
        index += 1;
    }
    index
}

/// Clear every record with the list length read once up front.
fn reset_records_cached(env: &Env) -> u32 {
    let count = storage::funder_count(env);
    for index in 0..count {
        if let Some(funder) = storage::funder_slot(env, index) {
            storage::clear_contribution(env, &funder);
        }
    }
    count
}

/// Transfer `amount` of the ledger asset to `owner`.
fn payout(env: &Env, owner: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let asset = token::Client::new(env, &storage::get_asset(env));
    match asset.try_transfer(&env.current_contract_address(), owner, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "payout of {} failed", amount);
            Err(Error::TransferFailed)
        }
    }
}
