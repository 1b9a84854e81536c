//! Result formatting.
//!
//! Integer-valued results are rendered without a decimal point; anything
//! else gets fixed-point rendering with a configurable digit count.

/// Default number of digits after the decimal point.
pub const DEFAULT_PRECISION: usize = 2;

/// Render a numeric result for display.
///
/// A finite value whose fractional part is exactly zero is rendered as
/// its base-10 integer form (`5.0` → `"5"`, `-3.0` → `"-3"`). Everything
/// else uses fixed-point rendering with `precision` digits after the
/// decimal point. No separators, no scientific notation.
pub fn format_result(value: f64, precision: usize) -> String {
    if value == 0.0 {
        // Covers -0.0 as well; both render as plain "0".
        return "0".to_string();
    }

    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.*}", precision, value)
    }
}
