//! A small in-memory bank: customers keyed by tax id, accounts with a
//! withdrawal allowance per session, and an interactive shell driving them.

pub mod account;
pub mod config;
pub mod customer;
pub mod error;
pub mod operation;
pub mod registry;
pub mod shell;

pub use account::{Account, Statement, BRANCH_CODE};
pub use config::{ConfigError, Limits};
pub use customer::Customer;
pub use error::BankError;
pub use operation::Operation;
pub use registry::Registry;
pub use shell::Shell;
