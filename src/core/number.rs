//! Conversions between display text and numeric values.

/// Parse display text into a number.
///
/// Parsing is lenient: the longest leading prefix that is a valid float
/// wins, and text with no such prefix yields `NaN`. Repeated decimal points
/// or a lone sign therefore never fail.
///
/// # Example
///
/// ```rust
/// use calcbook::core::parse_number;
///
/// assert_eq!(parse_number("42"), 42.0);
/// assert_eq!(parse_number("1.2.3"), 1.2);
/// assert_eq!(parse_number("5."), 5.0);
/// assert!(parse_number("-").is_nan());
/// assert_eq!(parse_number("inf"), f64::INFINITY);
/// ```
pub fn parse_number(text: &str) -> f64 {
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }

    text.char_indices()
        .map(|(idx, _)| idx)
        .filter(|&idx| idx > 0)
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Format a number for the display and expression strings.
///
/// Uses the shortest representation that round-trips, so integral values
/// have no fractional part (`7`, not `7.0`). Special values render as
/// `inf`, `-inf` and `NaN`, all of which [`parse_number`] accepts back.
/// Negative zero keeps its sign and renders as `-0`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}
