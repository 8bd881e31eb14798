//! Menu-driven command loop

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use account_service::AccountService;
use common::decimal::{parse_amount, precision, Amount};
use common::error::{Error, Result};
use common::model::account::{Account, AccountClass};
use tracing::{debug, info};

use crate::command::{ClassChoice, Command};

/// Interactive session over a line-oriented input and an output sink
pub struct CommandLoop<R, W> {
    service: AccountService,
    input: R,
    output: W,
    running: bool,
}

impl<R: BufRead, W: Write> CommandLoop<R, W> {
    /// Create a new session that owns the given service
    pub fn new(service: AccountService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            running: true,
        }
    }

    /// Run until the user exits or the input is exhausted
    ///
    /// Domain errors are printed and the menu is shown again. Only console
    /// I/O failures are returned.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");

        while self.running {
            self.print_main_menu()?;

            match self.step() {
                Ok(()) => {}
                Err(Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    debug!("Input closed");
                    self.running = false;
                }
                Err(e) if e.is_recoverable() => {
                    debug!(error = ?e, "Command failed");
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        self.output.flush()?;
        info!(accounts = self.service.account_count(), "Session ended");
        Ok(())
    }

    /// The service backing this session
    pub fn service(&self) -> &AccountService {
        &self.service
    }

    /// Consume the session, returning the service and output sink
    pub fn into_parts(self) -> (AccountService, W) {
        (self.service, self.output)
    }

    fn step(&mut self) -> Result<()> {
        let command: Command = self.read_value()?;
        debug!(?command, "Dispatching");

        match command {
            Command::Create => self.create_account(),
            Command::Display => self.display_account(),
            Command::Withdraw => self.withdraw(),
            Command::Deposit => self.deposit(),
            Command::DisplayAll => self.display_all(),
            Command::Remove => self.remove_account(),
            Command::CalculateInterest => self.calculate_interest(),
            Command::Exit => {
                self.running = false;
                Ok(())
            }
        }
    }

    fn create_account(&mut self) -> Result<()> {
        writeln!(self.output, "\n**Create New Account**")?;
        writeln!(self.output, "1. Create Standard Account")?;
        writeln!(self.output, "2. Create VIP Account")?;
        self.prompt("Enter your choice: ")?;
        let ClassChoice(class) = self.read_value()?;

        self.prompt("Enter name: ")?;
        let name = self.read_line()?;

        self.prompt("Enter passcode: ")?;
        let passcode = self.read_line()?;

        self.prompt("Starting balance: ")?;
        let balance = self.read_amount()?;

        self.service.open_account(class, &name, &passcode, balance)?;
        writeln!(self.output, "Account created!!")?;
        Ok(())
    }

    fn display_account(&mut self) -> Result<()> {
        self.prompt("Enter your name: ")?;
        let name = self.read_line()?;

        let account = self.service.account(&name)?;
        write_details(&mut self.output, account)
    }

    fn withdraw(&mut self) -> Result<()> {
        writeln!(self.output, "\n**Transaction - Withdraw**")?;
        self.prompt("Enter your name: ")?;
        let name = self.read_line()?;
        self.service.account(&name)?;

        self.prompt("Enter passcode: ")?;
        let passcode = self.read_line()?;
        self.service.authorize(&name, &passcode)?;

        self.prompt("Enter amount to withdraw: ")?;
        let amount = self.read_amount()?;

        let account = self.service.withdraw(&name, &passcode, amount)?;
        write_balance(&mut self.output, account)
    }

    fn deposit(&mut self) -> Result<()> {
        writeln!(self.output, "\n** Transaction - Deposit**")?;
        self.prompt("Enter your name: ")?;
        let name = self.read_line()?;
        self.service.account(&name)?;

        self.prompt("Enter amount to deposit: ")?;
        let amount = self.read_amount()?;

        let account = self.service.deposit(&name, amount)?;
        write_balance(&mut self.output, account)
    }

    fn display_all(&mut self) -> Result<()> {
        for (heading, class) in [
            ("Standard Account Details", AccountClass::Standard),
            ("VIP Account Details", AccountClass::Vip),
        ] {
            writeln!(self.output, "\n{}", heading)?;
            for account in self.service.accounts_by_class(class) {
                write_details(&mut self.output, account)?;
            }
        }
        Ok(())
    }

    fn remove_account(&mut self) -> Result<()> {
        writeln!(self.output, "\n**Transaction - Remove Account**")?;
        self.prompt("Enter your name: ")?;
        let name = self.read_line()?;
        self.service.account(&name)?;

        self.prompt("Enter passcode: ")?;
        let passcode = self.read_line()?;

        self.service.remove_account(&name, &passcode)?;
        writeln!(self.output, "Account has been removed!!")?;
        Ok(())
    }

    fn calculate_interest(&mut self) -> Result<()> {
        writeln!(self.output, "\n**Transaction - Calculate Interest")?;
        self.prompt("Enter your name: ")?;
        let name = self.read_line()?;
        self.service.account(&name)?;

        self.prompt("Enter the number of months: ")?;
        let months: u32 = self.read_value_with(|text| {
            text.parse()
                .map_err(|_| Error::MalformedNumericInput(text.to_string()))
        })?;

        let interest = self.service.interest(&name, months)?;
        writeln!(self.output, "The expected interest is: {}", precision::format_cents(interest))?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n*** Menu ***")?;
        for (number, command) in Command::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, command.label())?;
        }
        writeln!(self.output)?;
        self.prompt("Enter your choice: ")
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line without its terminator
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the session.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")));
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn read_value<T>(&mut self) -> Result<T>
    where
        T: FromStr<Err = Error>,
    {
        self.read_value_with(|text| text.parse::<T>())
    }

    /// Read a whole line and parse it, so a bad value never leaves input behind
    fn read_value_with<T, F>(&mut self, parse: F) -> Result<T>
    where
        F: FnOnce(&str) -> Result<T>,
    {
        let line = self.read_line()?;
        parse(line.trim())
    }

    fn read_amount(&mut self) -> Result<Amount> {
        self.read_value_with(parse_amount)
    }
}

fn write_details(output: &mut impl Write, account: &Account) -> Result<()> {
    writeln!(output, "**Account Details**")?;
    writeln!(output, "Name: {}", account.name)?;
    writeln!(output, "Account Type: {}", account.class)?;
    writeln!(output, "Balance: {}", account.balance_string())?;
    writeln!(output, "Opened: {}", account.created_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(output, "Last updated: {}", account.updated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    Ok(())
}

fn write_balance(output: &mut impl Write, account: &Account) -> Result<()> {
    writeln!(output, "Name: {}", account.name)?;
    writeln!(output, "Balance: {}", account.balance_string())?;
    Ok(())
}
