use crate::{error::Error, FixedDecimal};

use alloc::string::String;
use core::fmt;

/// Parses a decimal literal the way the reference generator does: the text
/// is split at the first `.`, the fractional length becomes the places
/// count, and the two halves are concatenated and parsed as one integer.
///
/// The concatenation is deliberate. A sign prefix stays attached to the
/// leading digits, so it applies to the whole concatenated string
/// (`"-0.5"` -> `"-05"` -> -5 at 1 place). Substituting a "safer"
/// scale-and-add parse here would change conformance behavior.
pub(crate) fn parse_decimal_str(text: &str) -> Result<FixedDecimal, Error> {
    match text.find('.') {
        None => Ok(FixedDecimal::new(parse_mantissa(text)?, 0)),
        Some(point) => {
            let integer = &text[..point];
            let fraction = &text[point + 1..];
            let mut digits = String::with_capacity(text.len() - 1);
            digits.push_str(integer);
            digits.push_str(fraction);
            Ok(FixedDecimal::new(
                parse_mantissa(&digits)?,
                fraction.len() as i32,
            ))
        }
    }
}

// The reference parses the digit string through a 32 bit integer and only
// then widens into its 64 bit mantissa field, so digit strings beyond i32
// range are parse errors even though the field itself would hold them.
fn parse_mantissa(digits: &str) -> Result<i64, Error> {
    digits
        .parse::<i32>()
        .map(i64::from)
        .map_err(|source| Error::MalformedNumber {
            input: digits.into(),
            source,
        })
}

/// Float-mediated rendering: the mantissa is taken to `f64`, divided by
/// `10.0` once per place, and pushed through the fixed-point formatter with
/// exactly `places` fractional digits. Lossy for extreme places counts by
/// design; the reference stringifies the same way.
pub(crate) fn fmt_fixed_point(value: &FixedDecimal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut approx = value.mantissa() as f64;
    for _ in 0..value.places() {
        approx /= 10.0;
    }
    // A negative places count never enters the loop; render it with no
    // fractional digits rather than feeding the formatter a negative
    // precision.
    let places = if value.places() > 0 {
        value.places() as usize
    } else {
        0
    };
    let precision = f.precision().unwrap_or(places);
    write!(f, "{approx:.precision$}")
}

#[cfg(test)]
mod tests {
    // Tests on crate-private parsing internals. Public API tests live under
    // `tests/`.

    use super::*;

    #[test]
    fn concatenated_parse_keeps_sign_on_leading_digits() {
        let parsed = parse_decimal_str("-0.5").unwrap();
        assert_eq!(parsed.mantissa(), -5);
        assert_eq!(parsed.places(), 1);
    }

    #[test]
    fn empty_fraction_yields_zero_places() {
        let parsed = parse_decimal_str("7.").unwrap();
        assert_eq!(parsed.mantissa(), 7);
        assert_eq!(parsed.places(), 0);
    }

    #[test]
    fn bare_fraction_parses() {
        let parsed = parse_decimal_str(".25").unwrap();
        assert_eq!(parsed.mantissa(), 25);
        assert_eq!(parsed.places(), 2);
    }

    #[test]
    fn leading_zeros_extend_places_past_mantissa_width() {
        // 21 fractional digits but a tiny mantissa; the concatenation still
        // fits in i64 thanks to the leading zeros.
        let parsed = parse_decimal_str("0.000000000000000000001").unwrap();
        assert_eq!(parsed.mantissa(), 1);
        assert_eq!(parsed.places(), 21);
    }

    #[test]
    fn second_dot_lands_in_the_mantissa_and_fails() {
        let err = parse_decimal_str("1.2.3").unwrap_err();
        let Error::MalformedNumber { input, .. } = err;
        assert_eq!(input, "12.3");
    }

    #[test]
    fn lone_dot_fails() {
        assert!(parse_decimal_str(".").is_err());
    }
}
