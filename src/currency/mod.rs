//! Currency display.
//!
//! Balances are plain `f64` values; this module only renders them. A fixed
//! table of locale conventions covers the locales the banker ships with.

mod format;
mod locale;

pub use format::{format_balance, CurrencyConfig};
pub use locale::supported_locales;
