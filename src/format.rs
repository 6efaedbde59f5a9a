//! Compact value formatting for terminal output.

/// Format a value with a K/M/B suffix and at most two decimals.
///
/// `950` → `950`, `1_200` → `1.2K`, `3_450_000` → `3.45M`, `2e9` → `2B`.
/// Non-finite input prints as `0`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= 1e9 {
        (value / 1e9, "B")
    } else if magnitude >= 1e6 {
        (value / 1e6, "M")
    } else if magnitude >= 1e3 {
        (value / 1e3, "K")
    } else {
        (value, "")
    };

    format!("{}{}", trim_decimals(scaled), suffix)
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_suffixes() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(950.0), "950");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(1_200.0), "1.2K");
        assert_eq!(format_value(3_450_000.0), "3.45M");
        assert_eq!(format_value(2_000_000_000.0), "2B");
        assert_eq!(format_value(-1_500.0), "-1.5K");
    }

    #[test]
    fn test_format_value_non_finite() {
        assert_eq!(format_value(f64::NAN), "0");
        assert_eq!(format_value(f64::INFINITY), "0");
    }
}
