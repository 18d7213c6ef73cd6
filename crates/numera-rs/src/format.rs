//! Numeric rendering shared by the calculator and the unit converter.
//!
//! Both tools answer in plain text, so raw `f64` noise
//! (`62.13711922373339`, `100.0`) has to be collapsed into something a
//! person — or an LLM quoting the result verbatim — can use. Two renderers:
//!
//! - [`format_number`]: echo a value the way it was typed, dropping a
//!   spurious `.0` on integral values.
//! - [`format_significant`]: round to N significant digits and trim
//!   trailing zeros, `%g`-style.

/// Largest magnitude rendered in plain integer notation. Beyond this,
/// `f64` no longer represents every integer exactly.
const MAX_EXACT_INT: f64 = 1e15;

/// Render a value without a spurious fractional part.
///
/// `100.0` becomes `"100"`, `2.5` stays `"2.5"`. Non-finite values render
/// via the standard `Display` impl (`inf`, `NaN`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Render a value rounded to `digits` significant digits, trimming
/// trailing zeros — the behavior of C's `%g` conversion.
///
/// Values whose decimal exponent falls outside `[-4, digits)` switch to
/// exponential notation, again with a trimmed mantissa.
pub fn format_significant(value: f64, digits: usize) -> String {
    debug_assert!(digits >= 1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{value}");
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= digits as i32 {
        let rendered = format!("{:.*e}", digits.saturating_sub(1), value);
        match rendered.split_once('e') {
            Some((mantissa, exp)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{mantissa}e{exp}")
            }
            None => rendered,
        }
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let rendered = format!("{value:.decimals$}");
        if rendered.contains('.') {
            rendered
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            rendered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn fractional_values_keep_fraction() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.125), "-0.125");
    }

    #[test]
    fn significant_digits_round_and_trim() {
        assert_eq!(format_significant(62.137_119_223_733_39, 6), "62.1371");
        assert_eq!(format_significant(1.0, 6), "1");
        assert_eq!(format_significant(100.0, 6), "100");
        assert_eq!(format_significant(0.1 + 0.2, 10), "0.3");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_notation() {
        assert_eq!(format_significant(1.5e20, 6), "1.5e20");
        assert_eq!(format_significant(2.5e-7, 6), "2.5e-7");
    }

    #[test]
    fn zero_and_non_finite() {
        assert_eq!(format_significant(0.0, 6), "0");
        assert_eq!(format_significant(f64::INFINITY, 6), "inf");
    }
}
