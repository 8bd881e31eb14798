use common::decimal::{dec, MAX_AMOUNT};
use common::model::account::{Account, AccountClass};
use common::Error;

fn standard(balance: common::Amount) -> Account {
    Account::open("alice", "1234", balance, AccountClass::Standard).unwrap()
}

fn vip(balance: common::Amount) -> Account {
    Account::open("victor", "9876", balance, AccountClass::Vip).unwrap()
}

#[test]
fn test_new_account_defaults() {
    let account = Account::new(AccountClass::Vip);
    assert_eq!(account.name, "");
    assert_eq!(account.balance(), dec!(0));
    assert!(account.passcode_matches("0000"));
    assert_eq!(account.class, AccountClass::Vip);
}

#[test]
fn test_deposit() {
    let mut account = standard(dec!(100));

    account.deposit(dec!(50.25)).unwrap();
    assert_eq!(account.balance(), dec!(150.25));

    account.deposit(dec!(0)).unwrap();
    assert_eq!(account.balance(), dec!(150.25));
}

#[test]
fn test_negative_deposit_rejected() {
    let mut account = standard(dec!(100));

    let result = account.deposit(dec!(-1));
    assert!(matches!(result, Err(Error::ArithmeticOverflow)));
    assert_eq!(account.balance(), dec!(100));
}

#[test]
fn test_overflowing_deposit_rejected() {
    let mut account = standard(dec!(1));

    let result = account.deposit(MAX_AMOUNT);
    assert!(matches!(result, Err(Error::ArithmeticOverflow)));
    assert_eq!(account.balance(), dec!(1));

    // Filling up to exactly the maximum is allowed
    account.deposit(MAX_AMOUNT - dec!(1)).unwrap();
    assert_eq!(account.balance(), MAX_AMOUNT);
}

#[test]
fn test_withdraw() {
    let mut account = standard(dec!(100));

    let remaining = account.withdraw(dec!(40.5)).unwrap();
    assert_eq!(remaining, "59.50");
    assert_eq!(account.balance(), dec!(59.5));

    // Draining the account completely is fine
    let remaining = account.withdraw(dec!(59.5)).unwrap();
    assert_eq!(remaining, "0.00");
}

#[test]
fn test_withdraw_insufficient_funds() {
    let mut account = standard(dec!(100));

    let result = account.withdraw(dec!(100.01));
    assert!(matches!(result, Err(Error::InsufficientFunds)));
    assert_eq!(account.balance(), dec!(100));
}

#[test]
fn test_negative_withdraw_rejected() {
    let mut account = standard(dec!(100));

    assert!(matches!(account.withdraw(dec!(-5)), Err(Error::InvalidAmount(_))));
    assert_eq!(account.balance(), dec!(100));
}

#[test]
fn test_negative_starting_balance_rejected() {
    let result = Account::open("bob", "1234", dec!(-10), AccountClass::Standard);
    assert!(matches!(result, Err(Error::InvalidAmount(_))));
}

#[test]
fn test_invalid_passcode_rejected_at_open() {
    let result = Account::open("bob", "12a4", dec!(10), AccountClass::Standard);
    assert!(matches!(result, Err(Error::InvalidPasscodeFormat)));
}

#[test]
fn test_passcode_round_trip() {
    let mut account = standard(dec!(0));
    account.set_passcode("1234").unwrap();
    assert!(account.passcode_matches("1234"));
    assert!(!account.passcode_matches("1235"));
    assert!(matches!(account.set_passcode("12a4"), Err(Error::InvalidPasscodeFormat)));
    assert!(matches!(account.set_passcode("12"), Err(Error::InvalidPasscodeFormat)));
}

#[test]
fn test_standard_interest() {
    assert_eq!(standard(dec!(1000)).calculate_interest(12).unwrap(), dec!(60.00));
    assert_eq!(standard(dec!(1000)).calculate_interest(0).unwrap(), dec!(0));
    // 123.45 * 0.005 * 3 = 1.85175
    assert_eq!(standard(dec!(123.45)).calculate_interest(3).unwrap(), dec!(1.85));
}

#[test]
fn test_vip_interest() {
    assert_eq!(vip(dec!(1000)).calculate_interest(12).unwrap(), dec!(126.83));
    assert_eq!(vip(dec!(1000)).calculate_interest(1).unwrap(), dec!(10.00));
    assert_eq!(vip(dec!(1000)).calculate_interest(0).unwrap(), dec!(0));
}

#[test]
fn test_vip_interest_overflow() {
    let result = vip(dec!(1000)).calculate_interest(100_000);
    assert!(matches!(result, Err(Error::InterestOverflow)));
}

#[test]
fn test_balance_string_rounds_to_cents() {
    assert_eq!(standard(dec!(10.005)).balance_string(), "10.01");
    assert_eq!(standard(dec!(10.004)).balance_string(), "10.00");
    assert_eq!(standard(dec!(7)).balance_string(), "7.00");
}
