//! Unit conversion engine.
//!
//! Maps values between named units inside fixed measurement categories.
//! Linear categories convert through a common base unit
//! (`base = value × from_factor; result = base ÷ to_factor`); temperature
//! is the affine special case and pivots through Celsius. A conversion
//! only succeeds when both units resolve to the same category.
//!
//! [`convert_query`] is the string-level entry point (free text in,
//! message out, never panics); [`convert_units`] is the typed inner API.

use std::fmt;

use tracing::debug;

pub mod categories;
pub mod query;
pub mod temperature;

use crate::format::{format_number, format_significant};
use temperature::TemperatureUnit;

/// Significant digits kept when rendering a linear conversion result.
pub const CONVERSION_SIGNIFICANT_DIGITS: usize = 6;

/// Everything that can go wrong while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No extraction rule matched the query text.
    UnparseableQuery,
    /// A unit spelling that is in no category.
    UnknownUnit(String),
    /// A unit spelling that exists in more than one category; carries the
    /// unit and the list of candidate categories.
    AmbiguousUnit(String, String),
    /// The two units belong to different categories.
    CategoryMismatch {
        from_unit: String,
        from_category: &'static str,
        to_unit: String,
        to_category: &'static str,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnparseableQuery => {
                write!(f, "could not understand the conversion query")
            }
            ConvertError::UnknownUnit(unit) => write!(f, "unknown unit '{unit}'"),
            ConvertError::AmbiguousUnit(unit, candidates) => write!(
                f,
                "unit '{unit}' is ambiguous ({candidates}); spell out the intended unit"
            ),
            ConvertError::CategoryMismatch {
                from_unit,
                from_category,
                to_unit,
                to_category,
            } => write!(
                f,
                "cannot convert {from_unit} ({from_category}) to {to_unit} ({to_category})"
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convert a value between two named units.
///
/// Returns the converted value and a ready-to-show message of the form
/// `"<value> <from> = <result> <to>"`. Temperature results carry two
/// decimals; linear results are rounded to
/// [`CONVERSION_SIGNIFICANT_DIGITS`] significant digits.
pub fn convert_units(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<(f64, String), ConvertError> {
    let from_unit = from_unit.trim();
    let to_unit = to_unit.trim();

    match (TemperatureUnit::parse(from_unit), TemperatureUnit::parse(to_unit)) {
        (Some(from), Some(to)) => {
            let result = temperature::convert(value, from, to);
            let message = format!(
                "{} {from_unit} = {result:.2} {to_unit}",
                format_number(value)
            );
            Ok((result, message))
        }
        (Some(_), None) => Err(mixed_temperature(from_unit, "temperature", to_unit)),
        (None, Some(_)) => {
            // Resolve the linear side first so a typo still reports as
            // unknown rather than as a mismatch.
            let (category, _) = categories::resolve(from_unit)?;
            Err(ConvertError::CategoryMismatch {
                from_unit: from_unit.to_string(),
                from_category: category.name,
                to_unit: to_unit.to_string(),
                to_category: "temperature",
            })
        }
        (None, None) => {
            let (from_category, from_factor) = categories::resolve(from_unit)?;
            let (to_category, to_factor) = categories::resolve(to_unit)?;
            if from_category.name != to_category.name {
                return Err(ConvertError::CategoryMismatch {
                    from_unit: from_unit.to_string(),
                    from_category: from_category.name,
                    to_unit: to_unit.to_string(),
                    to_category: to_category.name,
                });
            }
            let base = value * from_factor;
            let result = base / to_factor;
            debug!(
                "{value} {from_unit} -> {result} {to_unit} via {} ({})",
                from_category.base, from_category.name
            );
            let message = format!(
                "{} {from_unit} = {} {to_unit}",
                format_number(value),
                format_significant(result, CONVERSION_SIGNIFICANT_DIGITS)
            );
            Ok((result, message))
        }
    }
}

fn mixed_temperature(
    temp_unit: &str,
    temp_category: &'static str,
    other_unit: &str,
) -> ConvertError {
    match categories::resolve(other_unit) {
        Ok((category, _)) => ConvertError::CategoryMismatch {
            from_unit: temp_unit.to_string(),
            from_category: temp_category,
            to_unit: other_unit.to_string(),
            to_category: category.name,
        },
        Err(e) => e,
    }
}

/// Convert from a free-text query.
///
/// Always returns a string: the conversion message on success, an
/// `Error: ...` line otherwise. An unparseable query includes a short
/// usage hint.
pub fn convert_query(text: &str) -> String {
    match query::extract(text) {
        Some(q) => match convert_units(q.value, &q.from_unit, &q.to_unit) {
            Ok((_, message)) => message,
            Err(e) => format!("Error: {e}"),
        },
        None => format!(
            "Error: {}. Expected \"<value> <unit> a <unit>\", e.g. \
             \"100 km a millas\" or \"32 fahrenheit a celsius\"",
            ConvertError::UnparseableQuery
        ),
    }
}
