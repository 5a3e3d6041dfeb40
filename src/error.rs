use rust_decimal::Decimal;
use thiserror::Error;

/// Every way a bank operation can be refused. None of these are fatal, the
/// caller decides whether to ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("amount must be positive")]
    InvalidAmount,

    #[error("amount would take the balance past the largest supported value")]
    AmountTooLarge,

    #[error("daily withdrawal limit reached")]
    WithdrawalLimitReached,

    #[error("insufficient balance")]
    InsufficientBalance,

    #[error("withdrawal exceeds maximum allowed amount of {:.2}", .0.round_dp(2))]
    ExceedsWithdrawalCeiling(Decimal),

    #[error("customer {0} not found, register first")]
    CustomerNotFound(String),

    #[error("no account found for customer {0}")]
    AccountNotFound(String),

    #[error("customer {0} is already registered")]
    DuplicateCustomer(String),
}
