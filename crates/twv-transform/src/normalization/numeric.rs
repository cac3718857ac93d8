//! Numeric formatting utilities.

/// Digits after the decimal point in rendered numbers.
pub const FIXED_DECIMALS: usize = 2;

/// Formats a number in fixed-point notation with [`FIXED_DECIMALS`] digits.
///
/// Non-finite values keep Rust's spelling (`NaN`, `inf`, `-inf`).
pub fn format_fixed(value: f64) -> String {
    format!("{value:.prec$}", prec = FIXED_DECIMALS)
}

/// Formats an integer exactly, padded with [`FIXED_DECIMALS`] zero digits.
pub fn format_fixed_integer(value: i64) -> String {
    format!("{value}.{:0<width$}", "", width = FIXED_DECIMALS)
}
