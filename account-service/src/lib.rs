//! Account service for managing the in-memory account directory

pub mod service;
pub mod repository;
pub mod config;

pub use service::AccountService;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use config::{AccountServiceConfig, DuplicateNamePolicy};
