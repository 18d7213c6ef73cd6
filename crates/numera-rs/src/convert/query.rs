//! Extraction of a (value, from-unit, to-unit) triple from free text.
//!
//! An ordered list of tagged rules, each a compiled pattern, is tried in
//! priority order; the first match produces a typed [`ConversionQuery`].
//! The rules mirror the phrasings users actually write: the plain
//! "100 km a millas" form, an explicit "convertir ..." form, and the
//! "cuánto es / how much is ... en/in ..." question form.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// A typed conversion request extracted from free text.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionQuery {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

struct ExtractionRule {
    label: &'static str,
    pattern: Regex,
}

static RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    [
        // "100 km a millas", "5 lb to kg", "3 h en s", "2 kg = lb"
        ("plain", r"(?i)(\d+\.?\d*)\s*(\S+)\s+(?:a|to|en|=)\s+(\S+)"),
        // "convertir 100 km a millas"
        ("convert", r"(?i)convertir\s+(\d+\.?\d*)\s*(\S+)\s+a\s+(\S+)"),
        // "cuánto es 100 km en millas", "cuántos son 5 kg en lb"
        (
            "question-es",
            r"(?i)cu[aá]nt[oa]s?\s+(?:es|son)\s+(\d+\.?\d*)\s*(\S+)\s+en\s+(\S+)",
        ),
        // "how much is 100 km in millas"
        (
            "question-en",
            r"(?i)how\s+(?:much|many)\s+(?:is|are)\s+(\d+\.?\d*)\s*(\S+)\s+in\s+(\S+)",
        ),
    ]
    .into_iter()
    .map(|(label, pattern)| ExtractionRule {
        label,
        pattern: Regex::new(pattern).expect("extraction pattern compiles"),
    })
    .collect()
});

/// Try each rule in priority order; first match wins.
pub fn extract(query: &str) -> Option<ConversionQuery> {
    for rule in RULES.iter() {
        if let Some(captures) = rule.pattern.captures(query.trim()) {
            let value: f64 = captures.get(1)?.as_str().parse().ok()?;
            let parsed = ConversionQuery {
                value,
                from_unit: captures.get(2)?.as_str().to_string(),
                to_unit: captures.get(3)?.as_str().to_string(),
            };
            trace!("query matched rule '{}': {parsed:?}", rule.label);
            return Some(parsed);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(value: f64, from: &str, to: &str) -> ConversionQuery {
        ConversionQuery {
            value,
            from_unit: from.to_string(),
            to_unit: to.to_string(),
        }
    }

    #[test]
    fn plain_forms() {
        assert_eq!(extract("100 km a millas"), Some(q(100.0, "km", "millas")));
        assert_eq!(extract("5 lb to kg"), Some(q(5.0, "lb", "kg")));
        assert_eq!(extract("2.5 horas en minutos"), Some(q(2.5, "horas", "minutos")));
        assert_eq!(extract("3 kg = lb"), Some(q(3.0, "kg", "lb")));
    }

    #[test]
    fn value_glued_to_unit() {
        assert_eq!(extract("100km a millas"), Some(q(100.0, "km", "millas")));
    }

    #[test]
    fn explicit_and_question_forms() {
        assert_eq!(
            extract("convertir 10 metros a pies"),
            Some(q(10.0, "metros", "pies"))
        );
        assert_eq!(
            extract("cuánto es 100 km en millas"),
            Some(q(100.0, "km", "millas"))
        );
        assert_eq!(
            extract("cuantos son 5 kg en libras"),
            Some(q(5.0, "kg", "libras"))
        );
        assert_eq!(
            extract("how much is 100 km in millas"),
            Some(q(100.0, "km", "millas"))
        );
    }

    #[test]
    fn unmatchable_text_yields_none() {
        assert_eq!(extract("convert everything"), None);
        assert_eq!(extract(""), None);
        assert_eq!(extract("km a millas"), None);
    }
}
