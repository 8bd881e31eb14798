//! Repository for account data

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use common::error::{Error, Result};
use common::model::account::{Account, AccountClass};
use tracing::{debug, warn};

use crate::config::DuplicateNamePolicy;

/// Account repository trait defining the interface for account data storage
pub trait AccountRepository {
    /// Store an account under its name
    fn insert(&mut self, account: Account) -> Result<()>;

    /// Get an account by name
    fn find(&self, name: &str) -> Result<&Account>;

    /// Get an account by name for mutation
    fn find_mut(&mut self, name: &str) -> Result<&mut Account>;

    /// Remove an account, returning it
    fn remove(&mut self, name: &str) -> Result<Account>;

    /// Accounts of one class, in directory order
    fn list_by_class<'a>(&'a self, class: AccountClass) -> Box<dyn Iterator<Item = &'a Account> + 'a>;

    /// Number of stored accounts
    fn len(&self) -> usize;

    /// Whether the directory holds no accounts
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository for account data
///
/// Accounts are keyed by name and kept in name order, so listings come out
/// alphabetically.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    /// Accounts by name
    pub accounts: BTreeMap<String, Account>,
    /// What to do on a name collision
    policy: DuplicateNamePolicy,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository that rejects duplicate names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new in-memory account repository with a duplicate name policy
    pub fn with_policy(policy: DuplicateNamePolicy) -> Self {
        Self {
            accounts: BTreeMap::new(),
            policy,
        }
    }

    /// Duplicate name policy in effect
    pub fn policy(&self) -> DuplicateNamePolicy {
        self.policy
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn insert(&mut self, account: Account) -> Result<()> {
        match self.accounts.entry(account.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(account);
            }
            Entry::Occupied(mut slot) => match self.policy {
                DuplicateNamePolicy::Reject => {
                    return Err(Error::NameAlreadyExists(account.name));
                }
                DuplicateNamePolicy::Overwrite => {
                    warn!(name = %account.name, replaced = %slot.get().id, "Overwriting existing account");
                    slot.insert(account);
                }
            },
        }

        Ok(())
    }

    fn find(&self, name: &str) -> Result<&Account> {
        debug!(name, "Looking up account");
        self.accounts
            .get(name)
            .ok_or_else(|| Error::AccountNotFound(name.to_string()))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(name)
            .ok_or_else(|| Error::AccountNotFound(name.to_string()))
    }

    fn remove(&mut self, name: &str) -> Result<Account> {
        self.accounts
            .remove(name)
            .ok_or_else(|| Error::AccountNotFound(name.to_string()))
    }

    fn list_by_class<'a>(&'a self, class: AccountClass) -> Box<dyn Iterator<Item = &'a Account> + 'a> {
        Box::new(self.accounts.values().filter(move |account| account.class == class))
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::decimal::dec;

    fn account(name: &str, class: AccountClass) -> Account {
        Account::open(name, "1234", dec!(10), class).unwrap()
    }

    #[test]
    fn test_list_by_class_is_filtered_and_ordered() {
        let mut repo = InMemoryAccountRepository::new();
        repo.insert(account("carol", AccountClass::Standard)).unwrap();
        repo.insert(account("bob", AccountClass::Vip)).unwrap();
        repo.insert(account("alice", AccountClass::Standard)).unwrap();

        let standard: Vec<&str> = repo
            .list_by_class(AccountClass::Standard)
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(standard, vec!["alice", "carol"]);

        let vip: Vec<&str> = repo.list_by_class(AccountClass::Vip).map(|a| a.name.as_str()).collect();
        assert_eq!(vip, vec!["bob"]);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut repo = InMemoryAccountRepository::new();
        repo.insert(account("alice", AccountClass::Standard)).unwrap();

        repo.find_mut("alice").unwrap().deposit(dec!(5)).unwrap();
        assert_eq!(repo.find("alice").unwrap().balance(), dec!(15));
    }

    #[test]
    fn test_policy_accessor() {
        let repo = InMemoryAccountRepository::with_policy(DuplicateNamePolicy::Overwrite);
        assert_eq!(repo.policy(), DuplicateNamePolicy::Overwrite);
        assert!(repo.is_empty());
    }
}
