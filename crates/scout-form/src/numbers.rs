//! Number list parsing and formatting.
//!
//! Values are formatted with the shortest text that parses back to the same
//! `f64`: `1` not `1.0`, `2.5`, `0.1`, never exponent notation. Formatting
//! then parsing a finite value always returns it unchanged.

/// Separator placed between numbers when rendering a list.
pub const LIST_SEPARATOR: &str = ", ";

/// Parse comma-separated numbers, dropping tokens that don't parse.
///
/// Tokens are trimmed before parsing. Non-finite values (`nan`, `inf`) are
/// dropped as well since they cannot be stored.
///
/// # Examples
/// ```
/// use scout_form::parse_number_list;
/// assert_eq!(parse_number_list("1, 2.5, abc, 3"), vec![1.0, 2.5, 3.0]);
/// assert!(parse_number_list("").is_empty());
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn parse_number_list(input: &str) -> Vec<f64> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}

/// Format one number.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn format_number(value: f64) -> String {
    // Display for f64 is shortest round-trip and never uses an exponent.
    if value == 0.0 {
        // Collapse -0 so it doesn't render as "-0".
        return "0".to_string();
    }
    value.to_string()
}

/// Format a list for the text field.
pub fn format_number_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}
