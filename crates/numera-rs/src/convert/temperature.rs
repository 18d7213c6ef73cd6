//! Affine temperature conversions.
//!
//! Celsius, Fahrenheit, and Kelvin have different zero points, so they
//! cannot live in the linear category table: converting needs an offset
//! as well as a scale. Every conversion pivots through Celsius.

/// The three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Parse a spelling (trimmed, case-insensitive). Returns `None` for
    /// anything that is not a temperature unit.
    pub fn parse(unit: &str) -> Option<Self> {
        match unit.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Some(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

/// Convert a temperature between two scales.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::TemperatureUnit::{Celsius, Fahrenheit, Kelvin};
    use super::*;

    #[test]
    fn spellings_parse() {
        assert_eq!(TemperatureUnit::parse("°C"), Some(Celsius));
        assert_eq!(TemperatureUnit::parse(" fahrenheit "), Some(Fahrenheit));
        assert_eq!(TemperatureUnit::parse("K"), Some(Kelvin));
        assert_eq!(TemperatureUnit::parse("km"), None);
    }

    #[test]
    fn fixed_points() {
        assert!((convert(32.0, Fahrenheit, Celsius) - 0.0).abs() < 1e-9);
        assert!((convert(100.0, Celsius, Fahrenheit) - 212.0).abs() < 1e-9);
        assert!((convert(0.0, Celsius, Kelvin) - 273.15).abs() < 1e-9);
        assert!((convert(0.0, Kelvin, Celsius) + 273.15).abs() < 1e-9);
    }

    #[test]
    fn round_trip_is_identity() {
        for t in [-40.0, 0.0, 36.6, 451.0] {
            let back = convert(convert(t, Celsius, Fahrenheit), Fahrenheit, Celsius);
            assert!((back - t).abs() < 1e-9, "round trip of {t} gave {back}");
        }
    }

    #[test]
    fn minus_forty_is_the_crossover() {
        assert!((convert(-40.0, Celsius, Fahrenheit) + 40.0).abs() < 1e-9);
    }
}
