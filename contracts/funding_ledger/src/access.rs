//! # Access control
//!
//! The ledger has exactly one privileged identity, the owner, fixed by the
//! constructor and never reassigned. Every privileged entry point calls
//! [`require_owner`] after `require_auth` and before touching state.

use soroban_sdk::{log, Address, Env};

use crate::storage;
use crate::Error;

/// Returns the ledger owner.
pub fn owner(env: &Env) -> Address {
    storage::get_owner(env)
}

/// Returns `true` if `address` is the ledger owner.
pub fn is_owner(env: &Env, address: &Address) -> bool {
    &owner(env) == address
}

/// Fail with `Error::NotOwner` unless `caller` is the owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if is_owner(env, caller) {
        Ok(())
    } else {
        log!(env, "withdrawal rejected for non-owner {}", caller.clone());
        Err(Error::NotOwner)
    }
}
