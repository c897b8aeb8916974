//! Balance formatting.

use serde::{Deserialize, Serialize};

use super::locale::{fallback_style, fraction_digits, style_for, symbol_for, SymbolPosition, NBSP};
use crate::core::ConfigError;

/// Locale and currency used to display balances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// BCP 47 tag, e.g. `pt-BR`.
    pub locale: String,

    /// ISO 4217 code, e.g. `BRL`.
    pub currency_code: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            locale: "pt-BR".to_string(),
            currency_code: "BRL".to_string(),
        }
    }
}

impl CurrencyConfig {
    pub fn new(locale: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Check the locale is supported and the currency code is well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if style_for(&self.locale).is_none() {
            return Err(ConfigError::UnknownLocale(self.locale.clone()));
        }
        let code = &self.currency_code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidCurrencyCode(code.clone()));
        }
        Ok(())
    }
}

/// Render a balance as a currency string.
///
/// Rounds half away from zero to the currency's minor unit. Amounts that
/// round to zero are shown without a sign. Unknown locales use `en-US`
/// conventions.
///
/// ```
/// use banker::currency::{format_balance, CurrencyConfig};
///
/// let brl = CurrencyConfig::default();
/// assert_eq!(format_balance(1234.5, &brl), "R$\u{a0}1.234,50");
///
/// let usd = CurrencyConfig::new("en-US", "USD");
/// assert_eq!(format_balance(-20.0, &usd), "-$20.00");
/// ```
#[must_use]
pub fn format_balance(value: f64, config: &CurrencyConfig) -> String {
    let style = style_for(&config.locale).unwrap_or_else(fallback_style);
    let symbol = symbol_for(&config.currency_code, style);
    let digits = fraction_digits(&config.currency_code);

    let (number, negative) = if value.is_finite() {
        let scale = 10u128.pow(digits);
        let scaled = (value.abs() * scale as f64).round();

        // Beyond u128 the value is a whole number; print its exact digits.
        let (whole, fraction) = if scaled < u128::MAX as f64 {
            let minor = scaled as u128;
            ((minor / scale).to_string(), minor % scale)
        } else {
            (format!("{:.0}", value.abs()), 0)
        };

        let mut number = group_digits(&whole, style.group);
        if digits > 0 {
            number.push_str(style.decimal);
            number.push_str(&format!("{:0width$}", fraction, width = digits as usize));
        }
        (number, value < 0.0 && scaled > 0.0)
    } else if value.is_nan() {
        ("NaN".to_string(), false)
    } else {
        ("∞".to_string(), value < 0.0)
    };

    let body = match style.position {
        SymbolPosition::Prefix { spaced } => {
            let code_like = symbol.ends_with(|c: char| c.is_ascii_alphabetic());
            let gap = if spaced || code_like { NBSP } else { "" };
            format!("{symbol}{gap}{number}")
        }
        SymbolPosition::Suffix => format!("{number}{NBSP}{symbol}"),
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Insert `separator` between groups of three digits.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
