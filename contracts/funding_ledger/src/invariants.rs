#![allow(dead_code)]

extern crate std;

use soroban_sdk::{token, Address};

use crate::FundingLedgerClient;

/// INV-1: the tracked balance equals the sum of every live contribution.
///
/// `funders` must name each contributor once.
pub fn assert_balance_matches_records(client: &FundingLedgerClient, funders: &[Address]) {
    let recorded: i128 = funders.iter().map(|f| client.amount_funded_by(f)).sum();
    assert_eq!(
        client.balance(),
        recorded,
        "INV-1 violated: balance {} != sum of records {}",
        client.balance(),
        recorded
    );
}

/// INV-2: the contract holds at least as many tokens as it tracks.
pub fn assert_custody_covers_balance(client: &FundingLedgerClient, asset: &token::Client) {
    let held = asset.balance(&client.address);
    assert!(
        held >= client.balance(),
        "INV-2 violated: holds {} but tracks {}",
        held,
        client.balance()
    );
}

/// INV-3: after a withdrawal nothing is left on the books.
pub fn assert_ledger_empty(client: &FundingLedgerClient, funders: &[Address]) {
    assert_eq!(client.balance(), 0, "INV-3 violated: balance not zero");
    assert_eq!(client.funder_count(), 0, "INV-3 violated: funder list not empty");
    for funder in funders {
        assert_eq!(
            client.amount_funded_by(funder),
            0,
            "INV-3 violated: record left for a funder"
        );
    }
}

/// INV-4: a deposit grows the funder's record by exactly `amount`.
pub fn assert_deposit_invariant(record_before: i128, record_after: i128, amount: i128) {
    assert_eq!(
        record_after,
        record_before + amount,
        "INV-4 violated: deposit invariant broken: {} + {} != {}",
        record_before,
        amount,
        record_after
    );
}

/// INV-5: the funder list mirrors deposit order, duplicates included.
pub fn assert_funder_order(client: &FundingLedgerClient, expected: &[Address]) {
    assert_eq!(client.funder_count(), expected.len() as u32);
    for (i, funder) in expected.iter().enumerate() {
        assert_eq!(
            &client.funder_at(&(i as u32)),
            funder,
            "INV-5 violated: funder {} out of order",
            i
        );
    }
}
