use crate::{account::format_amount, error::BankError, registry::Registry};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::{fs::File, io::Write, path::Path};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Register,
    Open,
    Deposit,
    Withdraw,
}

#[derive(Deserialize, Debug, Clone)]
struct OperationRow {
    operation: Kind,
    tax_id: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    amount: Option<Decimal>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    birth_date: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

/// A single request against the bank, built by the shell from prompts or
/// read from a batch file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "OperationRow")]
pub enum Operation {
    Register {
        tax_id: String,
        name: String,
        birth_date: String,
        address: String,
    },
    Open {
        tax_id: String,
    },
    Deposit {
        tax_id: String,
        amount: Decimal,
    },
    Withdraw {
        tax_id: String,
        amount: Decimal,
    },
}

impl Operation {
    pub fn tax_id(&self) -> &str {
        use Operation::*;

        match self {
            Register { tax_id, .. } => tax_id,
            Open { tax_id } => tax_id,
            Deposit { tax_id, .. } => tax_id,
            Withdraw { tax_id, .. } => tax_id,
        }
    }

    pub fn execute(&self, registry: &mut Registry) -> Result<(), BankError> {
        use Operation::*;

        match self {
            Register {
                tax_id,
                name,
                birth_date,
                address,
            } => registry
                .register_customer(tax_id, name, birth_date, address)
                .map(|_| ()),
            Open { tax_id } => registry.open_account(tax_id).map(|_| ()),
            Deposit { tax_id, amount } => registry
                .find_account_by_tax_id_mut(tax_id)?
                .deposit(*amount),
            Withdraw { tax_id, amount } => registry
                .find_account_by_tax_id_mut(tax_id)?
                .withdraw(*amount),
        }
    }
}

impl TryFrom<OperationRow> for Operation {
    type Error = &'static str;

    fn try_from(value: OperationRow) -> Result<Self, Self::Error> {
        use Kind::*;

        let operation = match value.operation {
            Register => Operation::Register {
                tax_id: value.tax_id,
                name: value.name.ok_or("Missing name")?,
                birth_date: value.birth_date.unwrap_or_default(),
                address: value.address.unwrap_or_default(),
            },
            Open => Operation::Open {
                tax_id: value.tax_id,
            },
            Deposit => Operation::Deposit {
                tax_id: value.tax_id,
                amount: value.amount.ok_or("Missing amount")?,
            },
            Withdraw => Operation::Withdraw {
                tax_id: value.tax_id,
                amount: value.amount.ok_or("Missing amount")?,
            },
        };

        Ok(operation)
    }
}

/// Replays every operation in a CSV file. Rows that cannot be read or that the
/// bank refuses are logged and skipped.
pub fn replay<P>(registry: &mut Registry, path: P) -> Result<(), std::io::Error>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    for (row, operation) in reader.deserialize::<Operation>().enumerate() {
        let line = row + 2;

        match operation {
            Ok(operation) => {
                if let Err(error) = operation.execute(registry) {
                    tracing::warn!(line, tax_id = operation.tax_id(), %error, "operation rejected");
                }
            }
            Err(error) => tracing::warn!(line, %error, "skipping unreadable row"),
        }
    }

    Ok(())
}

pub fn write_accounts<W: Write>(registry: &Registry, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["branch", "account", "tax_id", "balance", "withdrawals"])?;

    for account in registry.accounts() {
        wtr.serialize((
            account.branch(),
            account.number(),
            account.owner(),
            format_amount(account.balance()),
            account.withdrawals(),
        ))?;
    }

    wtr.flush()?;
    Ok(())
}
