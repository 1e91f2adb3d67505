//! Test price feed with a settable answer, modelled on a Chainlink-style
//! aggregator mock. Starts at $2000 with 8 decimals.

use soroban_sdk::{contract, contractimpl, contracttype, Env};

use crate::oracle::{PriceData, PriceOracle};

pub const DECIMALS: u32 = 8;
pub const INITIAL_ANSWER: i128 = 2_000_00000000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MockKey {
    Answer,
    Decimals,
    Offline,
}

#[contract]
pub struct MockPriceOracle;

#[contractimpl]
impl PriceOracle for MockPriceOracle {
    fn latest_price(env: Env) -> PriceData {
        if env.storage().instance().get(&MockKey::Offline).unwrap_or(false) {
            panic!("price feed offline");
        }
        env.storage()
            .instance()
            .get(&MockKey::Answer)
            .unwrap_or(PriceData {
                price: INITIAL_ANSWER,
                decimals: DECIMALS,
                timestamp: env.ledger().timestamp(),
            })
    }
}

#[contractimpl]
impl MockPriceOracle {
    /// Report `price` as of the current ledger timestamp.
    pub fn set_answer(env: Env, price: i128) {
        let timestamp = env.ledger().timestamp();
        Self::set_round(env, price, timestamp);
    }

    /// Report `price` as of an explicit timestamp.
    pub fn set_round(env: Env, price: i128, timestamp: u64) {
        let decimals = env
            .storage()
            .instance()
            .get(&MockKey::Decimals)
            .unwrap_or(DECIMALS);
        env.storage().instance().set(
            &MockKey::Answer,
            &PriceData {
                price,
                decimals,
                timestamp,
            },
        );
    }

    /// Change the reported precision, keeping the raw answer.
    pub fn set_decimals(env: Env, decimals: u32) {
        env.storage().instance().set(&MockKey::Decimals, &decimals);
        let current = Self::latest_price(env.clone());
        Self::set_round(env, current.price, current.timestamp);
    }

    pub fn set_offline(env: Env, offline: bool) {
        env.storage().instance().set(&MockKey::Offline, &offline);
    }
}
