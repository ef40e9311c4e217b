//! Normalization of the currency strings the subscription sheet carries
//! (COP-style, e.g. `$100.000` for one hundred thousand pesos).

/// Strips `$` and the thousands/decimal separators, then parses the rest as a
/// plain number. Anything unparseable is coerced to `0.0`, matching how the
/// ledger has always treated malformed amounts.
pub fn parse_currency(value: &str) -> f64 {
    let clean: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | '.' | ','))
        .collect();

    match clean.trim().parse::<f64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::debug!("Unparseable currency value {:?}, coercing to 0.0", value);
            0.0
        }
    }
}

/// Renders an amount with comma thousands separators and no decimals,
/// e.g. `100000.0` -> `"100,000"`. The sign is dropped; callers prepend it.
pub fn format_thousands(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cop_with_dot_grouping() {
        assert_eq!(parse_currency("$100.000"), 100000.0);
    }

    #[test]
    fn test_parse_with_comma_grouping() {
        assert_eq!(parse_currency("$100,000"), 100000.0);
    }

    #[test]
    fn test_parse_small_amount() {
        assert_eq!(parse_currency("$25"), 25.0);
    }

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_currency("42"), 42.0);
    }

    #[test]
    fn test_unparseable_coerces_to_zero() {
        assert_eq!(parse_currency("abc"), 0.0);
        assert_eq!(parse_currency(""), 0.0);
    }

    #[test]
    fn test_format_thousands_grouping() {
        assert_eq!(format_thousands(100000.0), "100,000");
        assert_eq!(format_thousands(1000000.0), "1,000,000");
        assert_eq!(format_thousands(1234.0), "1,234");
    }

    #[test]
    fn test_format_thousands_small_values() {
        assert_eq!(format_thousands(25.0), "25");
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
    }

    #[test]
    fn test_format_thousands_drops_sign() {
        assert_eq!(format_thousands(-100000.0), "100,000");
    }
}
