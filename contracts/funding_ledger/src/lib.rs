//! # Funding Ledger Contract
//!
//! A crowdfunding ledger for a single Soroban token. Anyone may deposit as
//! long as the deposit is worth at least a minimum USD amount, priced through
//! an external oracle. A single owner, fixed at deployment, may withdraw the
//! whole balance, which also resets every contribution record.
//!
//! | Phase        | Entry Point(s)                                            |
//! |--------------|-----------------------------------------------------------|
//! | Bootstrap    | `__constructor`                                           |
//! | Funding      | [`FundingLedger::fund`]                                   |
//! | Withdrawal   | [`FundingLedger::withdraw`], [`FundingLedger::cheaper_withdraw`] |
//! | Queries      | `amount_funded_by`, `funder_at`, `funder_count`, `owner`, `price_feed`, `asset`, `minimum_usd`, `balance`, `usd_value` |
//!
//! ## Architecture
//!
//! Pricing lives in [`oracle`] and [`converter`]. Deposits are handled by
//! [`ledger`], withdrawals by [`withdraw`], the owner gate by [`access`] and
//! the withdrawal lock by [`guard`]. Storage access is fully delegated to
//! `storage`. This file contains only the public entry points and event
//! emissions.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

pub mod access;
pub mod converter;
pub mod events;
pub mod guard;
pub mod ledger;
pub mod oracle;
mod storage;
pub mod withdraw;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod mock_oracle;
#[cfg(test)]
mod test_events;

pub use events::WithdrawMode;
pub use oracle::{PriceData, PriceOracle, PriceOracleClient};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientFunds = 1,
    NotOwner = 2,
    TransferFailed = 3,
    OracleUnavailable = 4,
    InvalidAmount = 5,
    FunderNotFound = 6,
    Overflow = 7,
    Reentrancy = 8,
    InvalidConfig = 9,
}

#[contract]
pub struct FundingLedger;

#[contractimpl]
impl FundingLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Deploy the ledger.
    ///
    /// - `owner` becomes the only address allowed to withdraw. It cannot change.
    /// - `price_feed` is the oracle contract queried on every deposit.
    /// - `asset` is the token accepted as deposits and paid out on withdrawal.
    /// - `minimum_usd` is the smallest accepted deposit in 18-decimal USD.
    pub fn __constructor(
        env: Env,
        owner: Address,
        price_feed: Address,
        asset: Address,
        minimum_usd: i128,
    ) {
        if minimum_usd < 0 {
            panic_with_error!(&env, Error::InvalidConfig);
        }
        storage::init_config(&env, &owner, &price_feed, &asset, minimum_usd);
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Deposit `amount` of the ledger asset from `funder`.
    ///
    /// Fails with `InsufficientFunds` when the deposit is worth less than the
    /// configured minimum and with `OracleUnavailable` when no usable price
    /// can be read. A failed deposit changes nothing.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        funder.require_auth();
        guard::ensure_unlocked(&env)?;

        let usd_value = ledger::fund(&env, &funder, amount)?;

        events::emit_funds_deposited(&env, funder, amount, usd_value);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Withdrawal
    // ─────────────────────────────────────────────────────────

    /// Pay the whole balance to the owner and reset every record.
    ///
    /// - `caller` must authorize and must be the owner.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        Self::withdraw_with(&env, caller, WithdrawMode::Standard)
    }

    /// Same as [`FundingLedger::withdraw`], reading the funder list length
    /// once instead of on every step.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), Error> {
        Self::withdraw_with(&env, caller, WithdrawMode::Cheaper)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Cumulative amount deposited by `funder` since the last withdrawal.
    pub fn amount_funded_by(env: Env, funder: Address) -> i128 {
        ledger::amount_funded_by(&env, &funder)
    }

    /// The funder at position `index`, in deposit order.
    pub fn funder_at(env: Env, index: u32) -> Result<Address, Error> {
        ledger::funder_at(&env, index)
    }

    /// Number of entries in the funder list, duplicates included.
    pub fn funder_count(env: Env) -> u32 {
        ledger::funder_count(&env)
    }

    /// The address allowed to withdraw.
    pub fn owner(env: Env) -> Address {
        access::owner(&env)
    }

    /// The oracle contract used to value deposits.
    pub fn price_feed(env: Env) -> Address {
        storage::get_price_feed(&env)
    }

    /// The token contract accepted as deposits.
    pub fn asset(env: Env) -> Address {
        storage::get_asset(&env)
    }

    /// Smallest accepted deposit value, in 18-decimal USD.
    pub fn minimum_usd(env: Env) -> i128 {
        storage::get_minimum_usd(&env)
    }

    /// Tracked balance: the sum of all live contributions.
    pub fn balance(env: Env) -> i128 {
        storage::get_balance(&env)
    }

    /// USD value (18 decimals) of `amount` at the current oracle price.
    pub fn usd_value(env: Env, amount: i128) -> Result<i128, Error> {
        ledger::usd_value(&env, amount)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn withdraw_with(env: &Env, caller: Address, mode: WithdrawMode) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(env, &caller)?;

        guard::acquire(env)?;
        let settlement = withdraw::settle(env, &caller, &mode)?;
        guard::release(env);

        events::emit_funds_withdrawn(
            env,
            caller,
            settlement.amount,
            settlement.funders_cleared,
            mode,
        );
        Ok(())
    }
}
