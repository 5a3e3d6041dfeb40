//! Withdrawal limits, loaded from the environment.
//!
//! `MINIBANK_MAX_WITHDRAWALS` sets how many withdrawals an account accepts in a
//! session and `MINIBANK_WITHDRAWAL_CEILING` the largest single withdrawal.
//! Unset variables keep their defaults.

use rust_decimal::Decimal;
use std::{env, str::FromStr};
use thiserror::Error;

pub const MAX_WITHDRAWALS_VAR: &str = "MINIBANK_MAX_WITHDRAWALS";
pub const WITHDRAWAL_CEILING_VAR: &str = "MINIBANK_WITHDRAWAL_CEILING";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {message}")]
    InvalidValue {
        key: &'static str,
        value: String,
        message: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_withdrawals: u32,
    pub withdrawal_ceiling: Decimal,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_withdrawals: 3,
            withdrawal_ceiling: Decimal::new(500_00, 2),
        }
    }
}

impl Limits {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds limits from any key/value source, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut limits = Self::default();

        if let Some(value) = lookup(MAX_WITHDRAWALS_VAR) {
            let parsed = value.trim().parse::<u32>();
            let max_withdrawals = parsed.map_err(|_| ConfigError::InvalidValue {
                key: MAX_WITHDRAWALS_VAR,
                value: value.clone(),
                message: "expected a whole number",
            })?;

            if max_withdrawals == 0 {
                return Err(ConfigError::InvalidValue {
                    key: MAX_WITHDRAWALS_VAR,
                    value,
                    message: "must be positive",
                });
            }

            limits.max_withdrawals = max_withdrawals;
        }

        if let Some(value) = lookup(WITHDRAWAL_CEILING_VAR) {
            let parsed = Decimal::from_str(value.trim());
            let ceiling = parsed.map_err(|_| ConfigError::InvalidValue {
                key: WITHDRAWAL_CEILING_VAR,
                value: value.clone(),
                message: "expected a decimal amount",
            })?;

            if ceiling <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    key: WITHDRAWAL_CEILING_VAR,
                    value,
                    message: "must be positive",
                });
            }

            limits.withdrawal_ceiling = ceiling;
        }

        Ok(limits)
    }
}
