//! Account service implementation

use common::decimal::Amount;
use common::error::{Error, ErrorExt, Result};
use common::model::account::{Account, AccountClass};
use tracing::{debug, info, warn};

use crate::config::AccountServiceConfig;
use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Account service, the single owner of the account directory
pub struct AccountService {
    /// Repository for account data
    repo: Box<dyn AccountRepository>,
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountService {
    /// Create a new account service that rejects duplicate names
    pub fn new() -> Self {
        Self {
            repo: Box::new(InMemoryAccountRepository::new()),
        }
    }

    /// Create a new account service with a specific repository
    pub fn with_repository(repo: Box<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Create a new account service with a configuration
    pub fn with_config(config: &AccountServiceConfig) -> Self {
        Self::with_repository(Box::new(InMemoryAccountRepository::with_policy(config.duplicate_names)))
    }

    /// Open a new account
    pub fn open_account(
        &mut self,
        class: AccountClass,
        name: &str,
        passcode: &str,
        starting_balance: Amount,
    ) -> Result<&Account> {
        let account = Account::open(name, passcode, starting_balance, class)
            .with_context(|| format!("Opening account for {}", name))?;
        let id = account.id;

        if let Err(e) = self.repo.insert(account) {
            warn!(name, "Rejected account: {}", e);
            return Err(e);
        }

        info!(name, %id, %class, balance = %starting_balance, "Opened account");
        self.repo.find(name)
    }

    /// Get an account by name
    pub fn account(&self, name: &str) -> Result<&Account> {
        self.repo.find(name)
    }

    /// Check that the account exists and the passcode matches
    pub fn authorize(&self, name: &str, passcode: &str) -> Result<&Account> {
        let account = self.repo.find(name)?;
        if !account.passcode_matches(passcode) {
            warn!(name, id = %account.id, "Wrong passcode");
            return Err(Error::WrongPasscode);
        }
        Ok(account)
    }

    /// Deposit funds into an account
    pub fn deposit(&mut self, name: &str, amount: Amount) -> Result<&Account> {
        let account = self.repo.find_mut(name)?;
        account.deposit(amount)?;

        info!(name, id = %account.id, %amount, balance = %account.balance(), "Deposit");
        Ok(account)
    }

    /// Withdraw funds from a passcode-protected account
    pub fn withdraw(&mut self, name: &str, passcode: &str, amount: Amount) -> Result<&Account> {
        self.authorize(name, passcode)?;

        let account = self.repo.find_mut(name)?;
        account.withdraw(amount)?;

        info!(name, id = %account.id, %amount, balance = %account.balance(), "Withdrawal");
        Ok(account)
    }

    /// Remove a passcode-protected account
    pub fn remove_account(&mut self, name: &str, passcode: &str) -> Result<Account> {
        self.authorize(name, passcode)?;

        let account = self.repo.remove(name)?;
        info!(name, id = %account.id, "Removed account");
        Ok(account)
    }

    /// Accounts of one class, in directory order
    pub fn accounts_by_class(&self, class: AccountClass) -> impl Iterator<Item = &Account> + '_ {
        self.repo.list_by_class(class)
    }

    /// Interest an account would earn over `months`
    pub fn interest(&self, name: &str, months: u32) -> Result<Amount> {
        let account = self.repo.find(name)?;
        let interest = account.calculate_interest(months)?;

        debug!(name, id = %account.id, months, %interest, "Calculated interest");
        Ok(interest)
    }

    /// Number of open accounts
    pub fn account_count(&self) -> usize {
        self.repo.len()
    }
}
