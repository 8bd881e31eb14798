//! Interactive console front end for the bank
//!
//! The [`CommandLoop`] renders a numbered menu, reads choices and operands
//! line by line from any `BufRead`, and drives an
//! [`AccountService`](account_service::AccountService).

pub mod command;
pub mod command_loop;

pub use command::{ClassChoice, Command};
pub use command_loop::CommandLoop;
