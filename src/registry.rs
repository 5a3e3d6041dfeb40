use crate::{account::Account, config::Limits, customer::Customer, error::BankError};

/// The bank: every customer and account, in the order they were created.
#[derive(Debug, Default)]
pub struct Registry {
    customers: Vec<Customer>,
    accounts: Vec<Account>,
    last_account_number: u32,
    limits: Limits,
}

impl Registry {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn register_customer(
        &mut self,
        tax_id: &str,
        name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<&Customer, BankError> {
        if self.find_customer(tax_id).is_some() {
            return Err(BankError::DuplicateCustomer(tax_id.to_string()));
        }

        self.customers
            .push(Customer::new(tax_id, name, birth_date, address));
        tracing::info!(tax_id, name, "customer registered");

        Ok(&self.customers[self.customers.len() - 1])
    }

    pub fn open_account(&mut self, tax_id: &str) -> Result<&Account, BankError> {
        if self.find_customer(tax_id).is_none() {
            return Err(BankError::CustomerNotFound(tax_id.to_string()));
        }

        self.last_account_number += 1;
        let account = Account::new(self.last_account_number, tax_id, self.limits);
        tracing::info!(
            tax_id,
            branch = account.branch(),
            account = account.number(),
            "account opened"
        );
        self.accounts.push(account);

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.tax_id == tax_id)
    }

    /// First account opened for the customer with `tax_id`.
    pub fn find_account_by_tax_id(&self, tax_id: &str) -> Result<&Account, BankError> {
        self.accounts
            .iter()
            .find(|account| account.owner() == tax_id)
            .ok_or_else(|| BankError::AccountNotFound(tax_id.to_string()))
    }

    pub fn find_account_by_tax_id_mut(
        &mut self,
        tax_id: &str,
    ) -> Result<&mut Account, BankError> {
        self.accounts
            .iter_mut()
            .find(|account| account.owner() == tax_id)
            .ok_or_else(|| BankError::AccountNotFound(tax_id.to_string()))
    }
}
