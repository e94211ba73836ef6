use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Plain decimal with optional sign and exponent. Rejects "inf", "NaN", hex and trailing junk.
    static ref DECIMAL: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap();
}

/// Parse a numeric text field. Empty, malformed or negative input is an error.
pub fn parse_dimension(field: &'static str, raw: &str) -> Result<f64, CalcError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CalcError::MissingField(field));
    }
    if !DECIMAL.is_match(text) {
        return Err(CalcError::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }

    let value: f64 = text.parse().map_err(|_| CalcError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;

    // Exponents like 1e400 pass the pattern but overflow.
    if !value.is_finite() {
        return Err(CalcError::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(CalcError::NegativeValue { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_dimension("radius", "2").unwrap(), 2.0);
        assert_eq!(parse_dimension("radius", " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_dimension("radius", ".5").unwrap(), 0.5);
        assert_eq!(parse_dimension("radius", "3.").unwrap(), 3.0);
        assert_eq!(parse_dimension("radius", "1e2").unwrap(), 100.0);
        assert_eq!(parse_dimension("radius", "+4").unwrap(), 4.0);
    }

    #[test]
    fn test_reject_malformed() {
        for raw in ["abc", "12abc", "1,5", "NaN", "inf", "0x10", "1e400", "."] {
            assert!(
                matches!(
                    parse_dimension("height", raw),
                    Err(CalcError::InvalidNumber { field: "height", .. })
                ),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_reject_empty_and_negative() {
        assert_eq!(
            parse_dimension("radius", "   "),
            Err(CalcError::MissingField("radius"))
        );
        assert!(matches!(
            parse_dimension("radius", "-1"),
            Err(CalcError::NegativeValue { field: "radius", .. })
        ));
    }
}
