//! Canonical tool name constants.
//!
//! Tool-name string literals should reference these constants so a
//! rename touches one file only.

pub const CALCULATOR: &str = "calculator";
pub const CONVERT_UNITS: &str = "convert_units";
pub const TEXT_STATS: &str = "text_stats";
pub const TEXT_TRANSFORM: &str = "text_transform";
pub const DATETIME: &str = "datetime";
pub const RANDOM: &str = "random";
