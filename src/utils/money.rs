//! Decimal dollar amount parsing.
//!
//! Amounts arrive as text (`"12.34"`, `"6.5"`, `"12"`) and are converted to
//! integer cents so that no scoring rule ever touches floating point.

/// Errors that can occur while parsing a dollar amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Invalid dollar amount: '{0}' contains a non-digit character")]
    InvalidDollars(String),

    #[error("Invalid cents format: '{0}' must be one or two digits")]
    InvalidCents(String),

    #[error("Amount is too large")]
    Overflow,
}

/// Converts a dollar amount string to cents.
///
/// # Format
///
/// - Optional whole-dollar digits
/// - Optionally followed by `.` and one or two digits
///
/// The text is split on the first `.`. A single fractional digit is read as
/// tenths of a dollar (`"0.5"` is 50 cents). An empty whole part counts as
/// zero dollars.
///
/// # Errors
///
/// Returns [`AmountError::InvalidDollars`] if the whole part contains a non-digit.
/// Returns [`AmountError::InvalidCents`] if the fractional part contains a
/// non-digit or has more than two digits.
/// Returns [`AmountError::Overflow`] if the amount does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use receipt_processor::utils::money::parse_cents;
///
/// assert_eq!(parse_cents("35.35").unwrap(), 3535);
/// assert_eq!(parse_cents("6.5").unwrap(), 650);
/// assert_eq!(parse_cents("12").unwrap(), 1200);
/// assert!(parse_cents("1.234").is_err());
/// ```
pub fn parse_cents(text: &str) -> Result<u64, AmountError> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    let dollars = parse_digits(whole).map_err(|e| match e {
        DigitsError::NonDigit => AmountError::InvalidDollars(whole.to_string()),
        DigitsError::Overflow => AmountError::Overflow,
    })?;

    let cents = match fraction {
        None => 0,
        Some(fraction) if fraction.len() > 2 => {
            return Err(AmountError::InvalidCents(fraction.to_string()));
        }
        Some(fraction) => {
            let value = parse_digits(fraction)
                .map_err(|_| AmountError::InvalidCents(fraction.to_string()))?;
            if fraction.len() == 1 { value * 10 } else { value }
        }
    };

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or(AmountError::Overflow)
}

enum DigitsError {
    NonDigit,
    Overflow,
}

/// Parses a run of ASCII digits. An empty string is zero.
fn parse_digits(s: &str) -> Result<u64, DigitsError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DigitsError::NonDigit);
    }

    s.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or(DigitsError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_fraction_digits() {
        assert_eq!(parse_cents("6.49").unwrap(), 649);
        assert_eq!(parse_cents("12.25").unwrap(), 1225);
        assert_eq!(parse_cents("35.35").unwrap(), 3535);
        assert_eq!(parse_cents("0.05").unwrap(), 5);
    }

    #[test]
    fn test_parse_one_fraction_digit_is_tenths() {
        assert_eq!(parse_cents("6.5").unwrap(), 650);
        assert_eq!(parse_cents(".5").unwrap(), 50);
        assert_eq!(parse_cents("0.1").unwrap(), 10);
    }

    #[test]
    fn test_parse_whole_dollars() {
        assert_eq!(parse_cents("12").unwrap(), 1200);
        assert_eq!(parse_cents("0").unwrap(), 0);
        assert_eq!(parse_cents("007").unwrap(), 700);
    }

    #[test]
    fn test_parse_empty_parts() {
        assert_eq!(parse_cents("").unwrap(), 0);
        assert_eq!(parse_cents("5.").unwrap(), 500);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            parse_cents("1a.00"),
            Err(AmountError::InvalidDollars("1a".to_string()))
        );
        assert_eq!(
            parse_cents("1.0x"),
            Err(AmountError::InvalidCents("0x".to_string()))
        );
        assert!(parse_cents("-1.00").is_err());
        assert!(parse_cents("$5").is_err());
        assert!(parse_cents(" 5").is_err());
        assert!(parse_cents("1,000").is_err());
    }

    #[test]
    fn test_parse_rejects_second_separator() {
        assert!(matches!(
            parse_cents("1.2.3"),
            Err(AmountError::InvalidCents(_))
        ));
    }

    #[test]
    fn test_parse_rejects_three_fraction_digits() {
        assert_eq!(
            parse_cents("1.234"),
            Err(AmountError::InvalidCents("234".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert!(parse_cents("١٢").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(parse_cents("99999999999999999999"), Err(AmountError::Overflow));
        assert_eq!(parse_cents("184467440737095517"), Err(AmountError::Overflow));
        assert_eq!(
            parse_cents("184467440737095516").unwrap(),
            18_446_744_073_709_551_600
        );
    }
}
