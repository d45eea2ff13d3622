//! Display formatting helpers.
//!
//! Pure functions mapping market numbers to the strings the dashboard
//! renders. All money formatters prefix `$`; the display currency symbol is
//! a view concern and the core keeps the upstream convention of quoting
//! everything with a dollar prefix.

/// Format a number with comma thousands separators
/// (e.g., 1234567.89 → "1,234,567.89").
///
/// # Examples
///
/// ```rust
/// use cryptotracker_core::format::group_thousands;
///
/// assert_eq!(group_thousands(1234567.89, 2), "1,234,567.89");
/// assert_eq!(group_thousands(100.0, 2), "100.00");
/// ```
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (unsigned, ""),
    };

    // Insert commas into the integer part, right to left
    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{sign}{integer_with_commas}")
    } else {
        format!("{sign}{integer_with_commas}.{decimal_part}")
    }
}

/// Format a coin price, bucketed by magnitude:
/// below 1 → 6 decimals, below 100 → 4 decimals, else 2 decimals with grouping.
///
/// # Examples
///
/// ```rust
/// use cryptotracker_core::format::format_price;
///
/// assert_eq!(format_price(0.8723), "$0.872300");
/// assert_eq!(format_price(67543.21), "$67,543.21");
/// ```
pub fn format_price(price: f64) -> String {
    if price < 1.0 {
        format!("${price:.6}")
    } else if price < 100.0 {
        format!("${price:.4}")
    } else {
        format!("${}", group_thousands(price, 2))
    }
}

/// Format a large magnitude (market cap, volume) with the largest applicable
/// suffix among T (1e12), B (1e9), M (1e6), falling back to a grouped integer.
///
/// # Examples
///
/// ```rust
/// use cryptotracker_core::format::format_magnitude;
///
/// assert_eq!(format_magnitude(2_456_789_012_345.0), "$2.46T");
/// assert_eq!(format_magnitude(28_456_789_012.0), "$28.46B");
/// ```
pub fn format_magnitude(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${}", group_thousands(value, 0))
    }
}

/// Format a percentage change with sign: fixed 2 decimals, explicit leading
/// `+` for non-negative values.
pub fn format_change(change: f64) -> String {
    // Normalize -0.0 so it prints as "+0.00%"
    let change = if change == 0.0 { 0.0 } else { change };
    if change >= 0.0 {
        format!("+{change:.2}%")
    } else {
        format!("{change:.2}%")
    }
}

/// Format an unsigned percentage value (e.g., BTC dominance): fixed 2 decimals.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// Format a plain count (e.g., active cryptocurrencies) with grouping.
pub fn format_count(count: u32) -> String {
    group_thousands(f64::from(count), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_thousands_basic() {
        assert_eq!(group_thousands(1234567.89, 2), "1,234,567.89");
        assert_eq!(group_thousands(100.0, 2), "100.00");
        assert_eq!(group_thousands(0.0, 0), "0");
    }

    #[test]
    fn group_thousands_negative() {
        assert_eq!(group_thousands(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn change_normalizes_negative_zero() {
        assert_eq!(format_change(-0.0), "+0.00%");
    }
}
