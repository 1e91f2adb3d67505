use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDeposited {
    pub funder: Address,
    pub amount: i128,
    pub usd_value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WithdrawMode {
    Standard,
    Cheaper,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub owner: Address,
    pub amount: i128,
    pub funders_cleared: u32,
    pub mode: WithdrawMode,
}

pub fn emit_funds_deposited(env: &Env, funder: Address, amount: i128, usd_value: i128) {
    let topics = (symbol_short!("funded"), funder.clone());
    let data = FundsDeposited {
        funder,
        amount,
        usd_value,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_withdrawn(
    env: &Env,
    owner: Address,
    amount: i128,
    funders_cleared: u32,
    mode: WithdrawMode,
) {
    let topics = (symbol_short!("withdrawn"), owner.clone());
    let data = FundsWithdrawn {
        owner,
        amount,
        funders_cleared,
        mode,
    };
    env.events().publish(topics, data);
}
