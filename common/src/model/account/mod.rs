//! Account models and related types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::decimal::{dec, precision, Amount, MAX_AMOUNT};
use crate::error::{Error, Result};

/// Monthly rate for simple interest on standard accounts
pub const STANDARD_RATE: Decimal = dec!(0.005);

/// Monthly rate for compound interest on VIP accounts
pub const VIP_RATE: Decimal = dec!(0.01);

/// Account class, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountClass {
    /// Simple interest at 0.5% per month
    Standard,
    /// Compound interest at 1% per month
    Vip,
}

impl fmt::Display for AccountClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccountClass::Standard => write!(f, "Standard"),
            AccountClass::Vip => write!(f, "VIP"),
        }
    }
}

/// Four digit passcode, kept as text so leading zeros survive
#[derive(Clone, PartialEq, Eq)]
pub struct Passcode(String);

impl Passcode {
    /// Exact comparison against a user-entered candidate
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl FromStr for Passcode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPasscodeFormat);
        }
        Ok(Self(code.to_string()))
    }
}

impl Default for Passcode {
    fn default() -> Self {
        Self("0000".to_string())
    }
}

// Never print the digits, not even in debug logs
impl fmt::Debug for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Passcode(****)")
    }
}

/// Account model
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID, used to correlate log lines
    pub id: Uuid,
    /// Account holder name, the directory key
    pub name: String,
    /// Account class
    pub class: AccountClass,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    passcode: Passcode,
    balance: Amount,
}

impl Account {
    /// Create an empty account of the given class with passcode `0000`
    pub fn new(class: AccountClass) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            class,
            created_at: now,
            updated_at: now,
            passcode: Passcode::default(),
            balance: Amount::ZERO,
        }
    }

    /// Create a fully specified account
    pub fn open(name: impl Into<String>, passcode: &str, balance: Amount, class: AccountClass) -> Result<Self> {
        let mut account = Self::new(class);
        account.set_name(name);
        account.set_passcode(passcode)?;
        account.set_balance(balance)?;
        Ok(account)
    }

    /// Set the account holder name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the passcode, rejecting anything that is not four digits
    pub fn set_passcode(&mut self, code: &str) -> Result<()> {
        self.passcode = code.parse()?;
        Ok(())
    }

    /// Check a candidate passcode
    pub fn passcode_matches(&self, candidate: &str) -> bool {
        self.passcode.matches(candidate)
    }

    /// Current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Overwrite the balance
    pub fn set_balance(&mut self, value: Amount) -> Result<()> {
        if value < Amount::ZERO {
            return Err(Error::InvalidAmount(format!("balance cannot be negative: {}", value)));
        }
        self.balance = value;
        self.touch();
        Ok(())
    }

    /// Add funds to the balance
    pub fn deposit(&mut self, amount: Amount) -> Result<()> {
        if amount < Amount::ZERO || amount > MAX_AMOUNT - self.balance {
            return Err(Error::ArithmeticOverflow);
        }

        self.balance += amount;
        self.touch();
        Ok(())
    }

    /// Remove funds from the balance, returning the new balance as text
    pub fn withdraw(&mut self, amount: Amount) -> Result<String> {
        if amount < Amount::ZERO {
            return Err(Error::InvalidAmount(format!("cannot withdraw a negative amount: {}", amount)));
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds);
        }

        self.balance -= amount;
        self.touch();
        Ok(self.balance_string())
    }

    /// Balance rounded to cents
    pub fn balance_string(&self) -> String {
        precision::format_cents(self.balance)
    }

    /// Interest expected after `months`, rounded to cents
    ///
    /// Standard accounts earn simple interest, `balance * 0.005 * months`.
    /// VIP accounts compound monthly, `balance * (1.01^months - 1)`.
    pub fn calculate_interest(&self, months: u32) -> Result<Amount> {
        let interest = match self.class {
            AccountClass::Standard => self.balance
                .checked_mul(STANDARD_RATE)
                .and_then(|per_month| per_month.checked_mul(Decimal::from(months))),
            AccountClass::Vip => growth_factor(Decimal::ONE + VIP_RATE, months)
                .and_then(|factor| self.balance.checked_mul(factor - Decimal::ONE)),
        };

        interest
            .map(precision::round_cents)
            .ok_or(Error::InterestOverflow)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// `base^periods`, or None once the factor no longer fits
fn growth_factor(base: Decimal, periods: u32) -> Option<Decimal> {
    (0..periods).try_fold(Decimal::ONE, |factor, _| factor.checked_mul(base))
}
