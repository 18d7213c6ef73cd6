//! The static measurement-category table.
//!
//! Each category names a base unit and maps unit spellings (English
//! abbreviations plus the Spanish names users actually type) to the
//! factor expressing "1 of this unit = factor × base unit". The table is
//! compiled-in and immutable; temperature is not here — its zero points
//! differ, so it lives in [`super::temperature`].

use super::ConvertError;

/// A set of mutually convertible units sharing one base unit.
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub base: &'static str,
    /// Lowercase unit spelling → scale factor relative to the base unit.
    pub units: &'static [(&'static str, f64)],
}

/// All linear categories. Every factor is strictly positive and every
/// base unit appears in its own map with factor 1.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "length",
        base: "metros",
        units: &[
            ("km", 1000.0),
            ("kilómetros", 1000.0),
            ("kilometros", 1000.0),
            ("m", 1.0),
            ("metros", 1.0),
            ("cm", 0.01),
            ("centímetros", 0.01),
            ("centimetros", 0.01),
            ("mm", 0.001),
            ("milímetros", 0.001),
            ("milimetros", 0.001),
            ("mi", 1609.344),
            ("millas", 1609.344),
            ("yd", 0.9144),
            ("yardas", 0.9144),
            ("ft", 0.3048),
            ("pies", 0.3048),
            ("in", 0.0254),
            ("pulgadas", 0.0254),
        ],
    },
    Category {
        name: "mass",
        base: "gramos",
        units: &[
            ("kg", 1000.0),
            ("kilogramos", 1000.0),
            ("kilos", 1000.0),
            ("g", 1.0),
            ("gramos", 1.0),
            ("mg", 0.001),
            ("miligramos", 0.001),
            ("lb", 453.592),
            ("libras", 453.592),
            ("oz", 28.3495),
            ("onzas", 28.3495),
            ("t", 1_000_000.0),
            ("toneladas", 1_000_000.0),
        ],
    },
    Category {
        name: "volume",
        base: "litros",
        units: &[
            ("l", 1.0),
            ("litros", 1.0),
            ("ml", 0.001),
            ("mililitros", 0.001),
            ("gal", 3.78541),
            ("galones", 3.78541),
            ("pt", 0.473176),
            ("pintas", 0.473176),
            ("fl oz", 0.0295735),
            ("oz líquidas", 0.0295735),
            ("m3", 1000.0),
            ("metros cúbicos", 1000.0),
            ("cm3", 0.001),
        ],
    },
    Category {
        name: "time",
        base: "segundos",
        units: &[
            ("s", 1.0),
            ("segundos", 1.0),
            ("min", 60.0),
            ("minutos", 60.0),
            ("h", 3600.0),
            ("horas", 3600.0),
            ("días", 86_400.0),
            ("dias", 86_400.0),
            ("semanas", 604_800.0),
            // Calendar approximations: 30-day months, 365-day years.
            ("meses", 2_592_000.0),
            ("años", 31_536_000.0),
        ],
    },
    Category {
        name: "speed",
        base: "m/s",
        units: &[
            ("m/s", 1.0),
            ("km/h", 0.277778),
            ("kmh", 0.277778),
            ("mph", 0.44704),
            ("millas/hora", 0.44704),
            ("nudos", 0.514444),
            ("knots", 0.514444),
        ],
    },
    Category {
        name: "area",
        base: "m²",
        units: &[
            ("km2", 1_000_000.0),
            ("km²", 1_000_000.0),
            ("m2", 1.0),
            ("m²", 1.0),
            ("metros cuadrados", 1.0),
            ("cm2", 0.0001),
            ("cm²", 0.0001),
            ("ha", 10_000.0),
            ("hectáreas", 10_000.0),
            ("hectareas", 10_000.0),
            ("acres", 4046.86),
            ("ft2", 0.092903),
            ("pies cuadrados", 0.092903),
        ],
    },
    Category {
        name: "data",
        base: "bytes",
        units: &[
            ("b", 1.0),
            ("bytes", 1.0),
            ("kb", 1024.0),
            ("kilobytes", 1024.0),
            ("mb", 1_048_576.0),
            ("megabytes", 1_048_576.0),
            ("gb", 1_073_741_824.0),
            ("gigabytes", 1_073_741_824.0),
            ("tb", 1_099_511_627_776.0),
            ("terabytes", 1_099_511_627_776.0),
        ],
    },
];

/// Resolve a unit spelling against the shipped category table.
pub fn resolve(unit: &str) -> Result<(&'static Category, f64), ConvertError> {
    resolve_in(CATEGORIES, unit)
}

/// Resolve a unit spelling against an explicit category slice.
///
/// Lookup is trimmed and case-insensitive. A spelling matching more than
/// one category is an [`ConvertError::AmbiguousUnit`] — never a silent
/// first-match winner.
pub fn resolve_in<'a>(
    categories: &'a [Category],
    unit: &str,
) -> Result<(&'a Category, f64), ConvertError> {
    let needle = unit.trim().to_lowercase();
    let matches: Vec<(&'a Category, f64)> = categories
        .iter()
        .filter_map(|category| {
            category
                .units
                .iter()
                .find(|(spelling, _)| *spelling == needle)
                .map(|&(_, factor)| (category, factor))
        })
        .collect();

    match matches.as_slice() {
        [] => Err(ConvertError::UnknownUnit(unit.trim().to_string())),
        [single] => Ok(*single),
        many => Err(ConvertError::AmbiguousUnit(
            unit.trim().to_string(),
            many.iter()
                .map(|(category, _)| category.name)
                .collect::<Vec<_>>()
                .join(", "),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let (category, factor) = resolve("  KM ").unwrap();
        assert_eq!(category.name, "length");
        assert_eq!(factor, 1000.0);
    }

    #[test]
    fn unknown_units_are_reported() {
        assert!(matches!(
            resolve("parsecs"),
            Err(ConvertError::UnknownUnit(u)) if u == "parsecs"
        ));
    }

    #[test]
    fn duplicated_spellings_are_ambiguous() {
        let table = [
            Category {
                name: "apples",
                base: "apple",
                units: &[("apple", 1.0), ("unit", 1.0)],
            },
            Category {
                name: "oranges",
                base: "orange",
                units: &[("orange", 1.0), ("unit", 1.0)],
            },
        ];
        assert!(matches!(
            resolve_in(&table, "unit"),
            Err(ConvertError::AmbiguousUnit(u, cats))
                if u == "unit" && cats.contains("apples") && cats.contains("oranges")
        ));
        assert!(resolve_in(&table, "apple").is_ok());
    }

    #[test]
    fn shipped_table_is_sane() {
        let mut seen: std::collections::HashMap<&str, &str> = std::collections::HashMap::new();
        for category in CATEGORIES {
            let base = category
                .units
                .iter()
                .find(|(spelling, _)| *spelling == category.base);
            assert!(
                matches!(base, Some(&(_, factor)) if factor == 1.0),
                "base unit of '{}' must map to factor 1",
                category.name
            );
            for &(spelling, factor) in category.units {
                assert!(factor > 0.0, "'{spelling}' has a non-positive factor");
                if let Some(other) = seen.insert(spelling, category.name) {
                    panic!("'{spelling}' appears in both '{other}' and '{}'", category.name);
                }
            }
        }
    }
}
