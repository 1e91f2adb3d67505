//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key          | Type      | Description                                   |
//! |--------------|-----------|-----------------------------------------------|
//! | `Owner`      | `Address` | The only address allowed to withdraw          |
//! | `PriceFeed`  | `Address` | Oracle contract queried on every deposit      |
//! | `Asset`      | `Address` | Token contract holding the deposits           |
//! | `MinimumUsd` | `i128`    | Smallest accepted deposit, 18-decimal USD     |
//! | `Balance`    | `i128`    | Sum of all live contributions                 |
//! | `Locked`     | `bool`    | Set while a withdrawal is in flight           |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type           | Description                     |
//! |----------------------|----------------|---------------------------------|
//! | `Contribution(addr)` | `i128`         | Cumulative amount from `addr`   |
//! | `FunderCount`        | `u32`          | Length of the funder list       |
//! | `FunderAt(i)`        | `Address`      | Funder at position `i`          |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! A missing `Contribution` entry reads as zero, so resetting a contributor
//! removes the entry instead of writing `0`.
//!
//! The funder list is one entry per position, so appending costs the same at
//! any length. Clearing the list only resets `FunderCount`; positions at or
//! past the count are never read and get overwritten by later deposits.

use soroban_sdk::{contracttype, Address, Env};

use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Ledger owner (Instance).
    Owner,
    /// Price oracle contract (Instance).
    PriceFeed,
    /// Deposited token contract (Instance).
    Asset,
    /// Minimum deposit value in 18-decimal USD (Instance).
    MinimumUsd,
    /// Tracked ledger balance (Instance).
    Balance,
    /// Withdrawal lock (Instance).
    Locked,
    /// Cumulative contribution of one funder (Persistent).
    Contribution(Address),
    /// Number of live funder list positions (Persistent).
    FunderCount,
    /// Funder list position (Persistent).
    FunderAt(u32),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_instance<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    bump_instance(env);
    env.storage().instance().get(key)
}

/// Persist the immutable configuration written by the constructor.
pub fn init_config(
    env: &Env,
    owner: &Address,
    price_feed: &Address,
    asset: &Address,
    minimum_usd: i128,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::PriceFeed, price_feed);
    instance.set(&DataKey::Asset, asset);
    instance.set(&DataKey::MinimumUsd, &minimum_usd);
    instance.set(&DataKey::Balance, &0i128);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Address {
    read_instance(env, &DataKey::Owner).expect("ledger not constructed")
}

pub fn get_price_feed(env: &Env) -> Address {
    read_instance(env, &DataKey::PriceFeed).expect("ledger not constructed")
}

pub fn get_asset(env: &Env) -> Address {
    read_instance(env, &DataKey::Asset).expect("ledger not constructed")
}

pub fn get_minimum_usd(env: &Env) -> i128 {
    read_instance(env, &DataKey::MinimumUsd).expect("ledger not constructed")
}

// ─────────────────────────────────────────────────────────
// Tracked balance
// ─────────────────────────────────────────────────────────

pub fn get_balance(env: &Env) -> i128 {
    read_instance(env, &DataKey::Balance).unwrap_or(0)
}

pub fn set_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::Balance, &balance);
    bump_instance(env);
}

/// Add `amount` to the tracked balance and return the new total.
pub fn add_to_balance(env: &Env, amount: i128) -> Result<i128, Error> {
    let updated = get_balance(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_balance(env, updated);
    Ok(updated)
}

// ─────────────────────────────────────────────────────────
// Withdrawal lock
// ─────────────────────────────────────────────────────────

pub fn is_locked(env: &Env) -> bool {
    read_instance(env, &DataKey::Locked).unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::Locked, &locked);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Cumulative amount funded by `funder`; zero when no entry exists.
pub fn get_contribution(env: &Env, funder: &Address) -> i128 {
    let key = DataKey::Contribution(funder.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Add `amount` to `funder`'s record, creating it if absent.
pub fn add_to_contribution(env: &Env, funder: &Address, amount: i128) -> Result<i128, Error> {
    let key = DataKey::Contribution(funder.clone());
    let updated = get_contribution(env, funder)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    env.storage().persistent().set(&key, &updated);
    bump_persistent(env, &key);
    Ok(updated)
}

/// Drop `funder`'s record so it reads as zero again.
pub fn clear_contribution(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Contribution(funder.clone()));
}

/// Number of funders recorded since the last withdrawal.
pub fn funder_count(env: &Env) -> u32 {
    let key = DataKey::FunderCount;
    match env.storage().persistent().get(&key) {
        Some(count) => {
            bump_persistent(env, &key);
            count
        }
        None => 0,
    }
}

/// The funder at position `index`, or `None` past the end of the list.
pub fn funder_at(env: &Env, index: u32) -> Option<Address> {
    if index >= funder_count(env) {
        return None;
    }
    funder_slot(env, index)
}

/// Raw read of list position `index`, without checking it against the count.
pub fn funder_slot(env: &Env, index: u32) -> Option<Address> {
    let key = DataKey::FunderAt(index);
    let funder = env.storage().persistent().get(&key);
    if funder.is_some() {
        bump_persistent(env, &key);
    }
    funder
}

/// Append `funder` to the list. Duplicates are kept.
pub fn push_funder(env: &Env, funder: &Address) -> Result<u32, Error> {
    let index = funder_count(env);
    let slot = DataKey::FunderAt(index);
    env.storage().persistent().set(&slot, funder);
    bump_persistent(env, &slot);

    let count = index.checked_add(1).ok_or(Error::Overflow)?;
    let key = DataKey::FunderCount;
    env.storage().persistent().set(&key, &count);
    bump_persistent(env, &key);
    Ok(count)
}

/// Empty the funder list.
pub fn clear_funders(env: &Env) {
    env.storage().persistent().remove(&DataKey::FunderCount);
}
