use crate::{
    account::format_amount,
    error::BankError,
    operation::Operation,
    registry::Registry,
};
use rust_decimal::Decimal;
use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

const MENU: &str = "
[1] Register customer
[2] Open account
[3] Deposit
[4] Withdraw
[5] Statement
[6] List accounts
[0] Quit
=> ";

/// Interactive menu loop. Reads one command at a time from `input` and writes
/// every prompt and outcome to `output`.
pub struct Shell<R, W> {
    registry: Registry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(choice) = self.prompt(MENU)? else {
                break;
            };

            match choice.as_str() {
                "1" => self.register_customer()?,
                "2" => self.open_account()?,
                "3" => self.deposit()?,
                "4" => self.withdraw()?,
                "5" => self.statement()?,
                "6" => self.list_accounts()?,
                "0" => break,
                _ => writeln!(self.output, "\nInvalid option, try again.")?,
            }
        }

        writeln!(self.output, "\nThank you for using minibank!")?;
        self.output.flush()
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn prompt_amount(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        let Some(text) = self.prompt(label)? else {
            return Ok(None);
        };

        match Decimal::from_str(&text) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "\nInvalid amount, enter a number.")?;
                Ok(None)
            }
        }
    }

    fn register_customer(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Tax id (digits only): ")? else {
            return Ok(());
        };
        if self.registry.find_customer(&tax_id).is_some() {
            return self.report(Err(BankError::DuplicateCustomer(tax_id)), "");
        }

        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Date of birth (DD/MM/YYYY): ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(());
        };

        let result = Operation::Register {
            tax_id,
            name,
            birth_date,
            address,
        }
        .execute(&mut self.registry);
        self.report(result, "Customer registered.")
    }

    fn open_account(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Account holder tax id: ")? else {
            return Ok(());
        };

        let opened = self.registry.open_account(&tax_id).map(|account| {
            format!(
                "Account opened. Branch: {} | Account: {}",
                account.branch(),
                account.number()
            )
        });
        match opened {
            Ok(message) => self.report(Ok(()), &message),
            Err(error) => self.report(Err(error), ""),
        }
    }

    fn deposit(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt_account_holder()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Deposit amount: ")? else {
            return Ok(());
        };

        let result = Operation::Deposit { tax_id, amount }.execute(&mut self.registry);
        self.report(result, &format!("Deposited {}.", format_amount(amount)))
    }

    fn withdraw(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt_account_holder()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Withdrawal amount: ")? else {
            return Ok(());
        };

        let result = Operation::Withdraw { tax_id, amount }.execute(&mut self.registry);
        self.report(result, &format!("Withdrew {}.", format_amount(amount)))
    }

    fn statement(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt_account_holder()? else {
            return Ok(());
        };

        let statement = self
            .registry
            .find_account_by_tax_id(&tax_id)
            .map(|account| account.statement().to_string());
        match statement {
            Ok(statement) => writeln!(self.output, "\n{statement}"),
            Err(error) => self.report(Err(error), ""),
        }
    }

    fn list_accounts(&mut self) -> io::Result<()> {
        if self.registry.accounts().is_empty() {
            return writeln!(self.output, "\nNo accounts opened yet.");
        }

        writeln!(self.output)?;
        for account in self.registry.accounts() {
            let holder = self
                .registry
                .find_customer(account.owner())
                .map_or_else(|| account.owner().to_string(), ToString::to_string);
            writeln!(
                self.output,
                "Branch: {} | Account: {} | Holder: {} | Balance: {}",
                account.branch(),
                account.number(),
                holder,
                format_amount(account.balance())
            )?;
        }

        Ok(())
    }

    /// Asks for a tax id and reports a missing account straight away.
    fn prompt_account_holder(&mut self) -> io::Result<Option<String>> {
        let Some(tax_id) = self.prompt("Account holder tax id: ")? else {
            return Ok(None);
        };

        let found = self.registry.find_account_by_tax_id(&tax_id).map(|_| ());
        if let Err(error) = found {
            self.report(Err(error), "")?;
            return Ok(None);
        }

        Ok(Some(tax_id))
    }

    fn report(&mut self, result: Result<(), BankError>, success: &str) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "\nSuccess: {success}"),
            Err(error) => writeln!(self.output, "\nError: {error}."),
        }
    }
}
