//! Configuration for the account service

use std::env;
use std::fmt;
use std::str::FromStr;

use common::error::{Error, IntoError, Result};

/// Environment variable selecting the duplicate name policy
pub const DUPLICATE_NAMES_VAR: &str = "MYBANK_DUPLICATE_NAMES";

/// What the directory does when an account is opened under a taken name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateNamePolicy {
    /// Fail with `NameAlreadyExists`, keeping the existing account
    #[default]
    Reject,
    /// Replace the existing account
    Overwrite,
}

impl FromStr for DuplicateNamePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(Error::ConfigurationError(format!(
                "unknown duplicate name policy '{}', expected 'reject' or 'overwrite'",
                other
            ))),
        }
    }
}

impl fmt::Display for DuplicateNamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// Configuration for the account service
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    /// Policy applied when opening an account under an existing name
    pub duplicate_names: DuplicateNamePolicy,
}

impl AccountServiceConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Result<Self> {
        let duplicate_names = match env::var(DUPLICATE_NAMES_VAR) {
            Ok(value) => value.parse()?,
            Err(env::VarError::NotPresent) => DuplicateNamePolicy::default(),
            Err(e) => return Err(e.into_error(DUPLICATE_NAMES_VAR)),
        };

        Ok(Self { duplicate_names })
    }

    /// Create a new configuration with custom values
    pub fn new(duplicate_names: DuplicateNamePolicy) -> Self {
        Self { duplicate_names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("reject".parse::<DuplicateNamePolicy>().unwrap(), DuplicateNamePolicy::Reject);
        assert_eq!(" Overwrite ".parse::<DuplicateNamePolicy>().unwrap(), DuplicateNamePolicy::Overwrite);
        assert!(matches!(
            "merge".parse::<DuplicateNamePolicy>(),
            Err(Error::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_default_rejects_duplicates() {
        assert_eq!(AccountServiceConfig::default().duplicate_names, DuplicateNamePolicy::Reject);
    }
}
