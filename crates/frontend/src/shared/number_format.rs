//! Number formatting utilities for charts and tiles.

/// Formats a number with a thousands separator (space) and the given number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // insert a space every 3 digits, counting from the end
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Short axis-label form: 1.2M / 34.5k / 120.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if abs >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Metric-aware display form used by the region tiles and chart tooltips.
pub fn format_metric(value: f64, metric: &str) -> String {
    match metric {
        "revenue" => format!("{} UAH", format_number_with_decimals(value, 0)),
        "orders" => format_number_with_decimals(value, 0),
        "avg_order_value" => format!("{} UAH", format_number_with_decimals(value, 2)),
        "completion_rate" => format!("{:.1}%", value),
        _ => format_number_with_decimals(value, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1 234");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(1_250_000.0), "1.2M");
        assert_eq!(format_compact(34_500.0), "34.5k");
        assert_eq!(format_compact(120.0), "120");
        assert_eq!(format_compact(7.25), "7.2");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(12345.0, "revenue"), "12 345 UAH");
        assert_eq!(format_metric(42.0, "orders"), "42");
        assert_eq!(format_metric(687.5, "avg_order_value"), "687.50 UAH");
        assert_eq!(format_metric(92.35, "completion_rate"), "92.3%");
    }
}
