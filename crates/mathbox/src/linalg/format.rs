//! Value formatting and display policy for the matrix renderer.

/// Matrices with at least this many rows (or columns) render in truncated
/// form along that dimension.
pub const TRUNCATION_THRESHOLD: usize = 20;

/// How many leading and trailing rows/columns a truncated rendering keeps.
pub const SHOWN_EDGE: usize = 3;

/// Formats a single value as its shortest unambiguous decimal text.
///
/// Values that are mathematically integral print with no fractional part
/// (`2`, not `2.0`), which also collapses negative zero to `0`. Everything
/// else prints in full decimal form, never scientific notation.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value == value.trunc() && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
