//! Withdrawal lock.
//!
//! A withdrawal pays the owner through an external token call. While that
//! call is in flight the lock is held, and every state-changing entry point
//! refuses to run with `Error::Reentrancy`.

use soroban_sdk::{log, Env};

use crate::storage;
use crate::Error;

/// Fail if a withdrawal currently holds the lock.
pub fn ensure_unlocked(env: &Env) -> Result<(), Error> {
    if storage::is_locked(env) {
        log!(env, "reentrant call rejected");
        return Err(Error::Reentrancy);
    }
    Ok(())
}

/// Take the lock. An error return from the surrounding invocation rolls the
/// write back, so only the success path needs to call [`release`].
pub fn acquire(env: &Env) -> Result<(), Error> {
    ensure_unlocked(env)?;
    storage::set_locked(env, true);
    Ok(())
}

pub fn release(env: &Env) {
    storage::set_locked(env, false);
}
