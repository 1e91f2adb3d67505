extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{FundsDeposited, FundsWithdrawn, WithdrawMode};
use crate::mock_oracle::MockPriceOracle;
use crate::{FundingLedger, FundingLedgerClient};

const ONE_UNIT: i128 = 10_000_000;
const MINIMUM_USD: i128 = 50 * 1_000_000_000_000_000_000;

fn setup() -> (Env, FundingLedgerClient<'static>, token::StellarAssetClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let oracle_id = env.register(MockPriceOracle, ());
    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(
        FundingLedger,
        (owner.clone(), oracle_id, asset.clone(), MINIMUM_USD),
    );
    let client = FundingLedgerClient::new(&env, &contract_id);
    let sac = token::StellarAssetClient::new(&env, &asset);
    (env, client, sac, owner)
}

#[test]
fn test_funds_deposited_event() {
    let (env, client, sac, _owner) = setup();
    let funder = Address::generate(&env);
    sac.mint(&funder, &ONE_UNIT);

    client.fund(&funder, &ONE_UNIT);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("funded"), funder)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("funded").into_val(&env), funder.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: FundsDeposited struct, valued at $2000
    let event_data: FundsDeposited = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FundsDeposited {
        funder: funder.clone(),
        amount: ONE_UNIT,
        usd_value: 2_000 * 1_000_000_000_000_000_000,
    });
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client, sac, owner) = setup();
    let funder = Address::generate(&env);
    sac.mint(&funder, &(2 * ONE_UNIT));
    client.fund(&funder, &ONE_UNIT);
    client.fund(&funder, &ONE_UNIT);

    client.withdraw(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("withdrawn"), owner)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("withdrawn").into_val(&env), owner.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FundsWithdrawn {
        owner: owner.clone(),
        amount: 2 * ONE_UNIT,
        funders_cleared: 2,
        mode: WithdrawMode::Standard,
    });
}

#[test]
fn test_cheaper_withdraw_event_reports_mode() {
    let (env, client, sac, owner) = setup();
    let funder = Address::generate(&env);
    sac.mint(&funder, &ONE_UNIT);
    client.fund(&funder, &ONE_UNIT);

    client.cheaper_withdraw(&owner);

    let last_event = env.events().all().last().expect("No events found");
    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data.mode, WithdrawMode::Cheaper);
    assert_eq!(event_data.amount, ONE_UNIT);
    assert_eq!(event_data.funders_cleared, 1);
}
