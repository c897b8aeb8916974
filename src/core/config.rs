//! Banker configuration.
//!
//! - `currency`: how balances are displayed
//! - `mode`: which operation rules the ledger uses

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::currency::CurrencyConfig;
use crate::rules::OperationMode;

/// Session-wide settings, fixed when the session is created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankerConfig {
    /// Display locale and currency.
    pub currency: CurrencyConfig,

    /// Add/subtract/transfer semantics.
    pub mode: OperationMode,
}

impl BankerConfig {
    /// Set the display locale and currency.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyConfig) -> Self {
        self.currency = currency;
        self
    }

    /// Set the operation rules.
    #[must_use]
    pub fn with_mode(mut self, mode: OperationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.currency.validate()
    }
}
