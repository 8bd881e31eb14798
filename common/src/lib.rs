//! Common types and utilities for the bank
//!
//! This library contains the shared error type, money helpers and the account
//! domain model used by the account service and the console front end.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt, IntoError};
pub use decimal::*;
