//! In-memory console bank
//!
//! Metapackage re-exporting the workspace crates.

pub use account_service;
pub use bank_console;
pub use common;
