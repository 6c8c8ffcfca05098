mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_invalid_reference_ids_are_reported() {
    let file = common::charges_csv(&[
        "P01-1,charge-1,1.00,USD",
        "Z01-2,charge-2,1.00,USD", // unknown prefix
        ",charge-3,1.00,USD",      // missing reference
        "S01-4,charge-4,2.00,USD",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("pay-charge"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading charge request"))
        .stderr(predicate::str::contains("Invalid Amazon Reference ID"))
        .stderr(predicate::str::contains(
            "Amazon Reference ID is a required field",
        ))
        .stdout(predicate::str::contains("amazon_reference_id=P01-1,"))
        .stdout(predicate::str::contains("amazon_reference_id=S01-4,"))
        .stdout(predicate::str::contains("Z01-2").not());
}

#[test]
fn test_invalid_data_types() {
    let file = common::charges_csv(&[
        "P01-1,charge-1,1.00,BTC",           // unknown currency
        "P01-2,charge-2,1.00,USD,0,perhaps", // not a bool
        "P01-3,charge-3,5.00,GBP",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("pay-charge"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unknown currency code: BTC"))
        .stdout(predicate::str::contains("charge_reference_id=charge-3"))
        .stdout(predicate::str::contains("charge_reference_id=charge-1").not())
        .stdout(predicate::str::contains("charge_reference_id=charge-2").not());
}

#[test]
fn test_duplicate_charge_reference_ids_are_skipped() {
    let file = common::charges_csv(&[
        "P01-1,charge-1,1.00,USD",
        "B01-2,charge-1,9.00,USD",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("pay-charge"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Duplicate charge reference ID"))
        .stdout(predicate::str::contains("amount=1.00"))
        .stdout(predicate::str::contains("amount=9.00").not());
}
