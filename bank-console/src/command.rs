//! Menu commands

use std::str::FromStr;

use common::error::{Error, Result};
use common::model::account::AccountClass;

/// Main menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Display,
    Withdraw,
    Deposit,
    DisplayAll,
    Remove,
    CalculateInterest,
    Exit,
}

impl Command {
    /// All commands in menu order
    pub const ALL: [Command; 8] = [
        Command::Create,
        Command::Display,
        Command::Withdraw,
        Command::Deposit,
        Command::DisplayAll,
        Command::Remove,
        Command::CalculateInterest,
        Command::Exit,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Command::Create => "Create Account",
            Command::Display => "Display",
            Command::Withdraw => "Withdraw",
            Command::Deposit => "Deposit",
            Command::DisplayAll => "Display All",
            Command::Remove => "Remove Account",
            Command::CalculateInterest => "Calculate Interest",
            Command::Exit => "Exit",
        }
    }
}

impl TryFrom<u32> for Command {
    type Error = Error;

    fn try_from(choice: u32) -> Result<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Command::ALL.get(index as usize).copied())
            .ok_or(Error::InvalidMenuChoice)
    }
}

/// Menu choice as typed: a number, then a range check
impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(s).and_then(Command::try_from)
    }
}

/// Account class sub-menu shown when creating an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassChoice(pub AccountClass);

impl FromStr for ClassChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match parse_choice(s)? {
            1 => Ok(Self(AccountClass::Standard)),
            2 => Ok(Self(AccountClass::Vip)),
            _ => Err(Error::InvalidMenuChoice),
        }
    }
}

fn parse_choice(s: &str) -> Result<u32> {
    let s = s.trim();
    s.parse::<u32>()
        .map_err(|_| Error::MalformedNumericInput(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!("1".parse::<Command>().unwrap(), Command::Create);
        assert_eq!(" 5 ".parse::<Command>().unwrap(), Command::DisplayAll);
        assert_eq!("8".parse::<Command>().unwrap(), Command::Exit);
    }

    #[test]
    fn test_out_of_range_choice() {
        assert!(matches!("0".parse::<Command>(), Err(Error::InvalidMenuChoice)));
        assert!(matches!("9".parse::<Command>(), Err(Error::InvalidMenuChoice)));
    }

    #[test]
    fn test_non_numeric_choice() {
        assert!(matches!("two".parse::<Command>(), Err(Error::MalformedNumericInput(_))));
        assert!(matches!("-1".parse::<Command>(), Err(Error::MalformedNumericInput(_))));
    }

    #[test]
    fn test_class_choice() {
        assert_eq!("1".parse::<ClassChoice>().unwrap().0, AccountClass::Standard);
        assert_eq!("2".parse::<ClassChoice>().unwrap().0, AccountClass::Vip);
        assert!(matches!("3".parse::<ClassChoice>(), Err(Error::InvalidMenuChoice)));
    }
}
