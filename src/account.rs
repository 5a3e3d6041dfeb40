use crate::{config::Limits, error::BankError};
use rust_decimal::Decimal;
use std::fmt;

pub const BRANCH_CODE: &str = "0001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: u32,
    owner: String,
    balance: Decimal,
    withdrawals: u32,
    transactions: Vec<String>,
    limits: Limits,
}

impl Account {
    /// `owner` is the tax id of the customer holding the account.
    pub fn new(number: u32, owner: impl Into<String>, limits: Limits) -> Self {
        Self {
            number,
            owner: owner.into(),
            balance: Decimal::ZERO,
            withdrawals: 0,
            transactions: Vec::new(),
            limits,
        }
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    pub fn transactions(&self) -> &[String] {
        &self.transactions
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::AmountTooLarge)?;
        self.transactions
            .push(format!("Deposit: {}", format_amount(amount)));

        tracing::info!(account = self.number, amount = %format_amount(amount), "deposit");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }
        if self.withdrawals >= self.limits.max_withdrawals {
            return Err(BankError::WithdrawalLimitReached);
        }
        if amount > self.balance {
            return Err(BankError::InsufficientBalance);
        }
        if amount > self.limits.withdrawal_ceiling {
            return Err(BankError::ExceedsWithdrawalCeiling(
                self.limits.withdrawal_ceiling,
            ));
        }

        self.balance -= amount;
        self.withdrawals += 1;
        self.transactions
            .push(format!("Withdrawal: {}", format_amount(amount)));

        tracing::info!(account = self.number, amount = %format_amount(amount), "withdrawal");
        Ok(())
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement {
            transactions: &self.transactions,
            balance: self.balance,
        }
    }
}

/// Read-only snapshot of an account's history and balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    pub transactions: &'a [String],
    pub balance: Decimal,
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(30);

        writeln!(f, "Statement")?;
        writeln!(f, "{rule}")?;
        if self.transactions.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for transaction in self.transactions {
            writeln!(f, "{transaction}")?;
        }
        writeln!(f, "{rule}")?;
        write!(f, "Balance: {}", format_amount(self.balance))
    }
}

/// Amounts are always shown with exactly two fractional digits.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
