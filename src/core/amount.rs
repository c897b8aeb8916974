//! Amount text parsing.
//!
//! Players type amounts by hand, with either `.` or `,` as the decimal
//! separator. At most one separator may appear, so grouped input such as
//! `1,234.5` is rejected rather than guessed at.

use super::error::InvalidInput;

/// Parse user-entered amount text into a finite number.
///
/// ```
/// use banker::core::parse_amount;
///
/// assert_eq!(parse_amount("12,5"), Ok(12.5));
/// assert_eq!(parse_amount(" -30 "), Ok(-30.0));
/// assert!(parse_amount("12.3.4").is_err());
/// assert!(parse_amount("").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<f64, InvalidInput> {
    let trimmed = text.trim();
    let separators = trimmed.chars().filter(|c| matches!(c, '.' | ',')).count();
    if trimmed.is_empty() || separators > 1 {
        return Err(InvalidInput::Amount(text.to_string()));
    }

    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidInput::Amount(text.to_string())),
    }
}
