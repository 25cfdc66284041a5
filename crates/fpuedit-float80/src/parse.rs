//! User-entered decimal text to [`Float80`].

use thiserror::Error;

use crate::special;
use crate::value::Float80;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a decimal literal or special-value keyword")]
    Unrecognized,
}

/// Parse a decimal/scientific literal, or one of the special-value
/// keywords, into a value. A literal wins over a keyword; anything else is
/// rejected whole (no partial or trailing-garbage matches).
///
/// Decimal parsing alone cannot reach signaling NaNs or pick a NaN sign, so
/// the keyword table is the only path to those patterns.
pub fn parse(text: &str) -> Result<Float80, ParseError> {
    let text = text.trim().to_ascii_lowercase();

    if is_decimal_literal(&text) {
        // The grammar above is a strict subset of what `f64::from_str`
        // accepts; the explicit check keeps `f64`'s own "inf"/"nan"
        // spellings from bypassing the keyword table's bit patterns.
        let value: f64 = text.parse().map_err(|_| ParseError::Unrecognized)?;
        return Ok(Float80::from_f64(value));
    }

    special::lookup(&text).ok_or(ParseError::Unrecognized)
}

/// `sign? (digits ('.' digits?)? | '.' digits) ('e' sign? digits)?`,
/// consuming the entire string.
fn is_decimal_literal(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (mantissa, exponent) = match s.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (s, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            !(int.is_empty() && frac.is_empty())
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => !mantissa.is_empty() && mantissa.bytes().all(|b| b.is_ascii_digit()),
    };

    let exponent_ok = match exponent {
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => true,
    };

    mantissa_ok && exponent_ok
}
