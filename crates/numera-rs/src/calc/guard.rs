//! Injection denylist screened before any parsing.
//!
//! The actual sandbox is the restricted AST — the parser simply has no
//! syntax for attribute access, imports, or definitions. This screen
//! exists so that recognizable injection attempts are classified as
//! [`CalcError::SecurityViolation`] instead of surfacing as a generic
//! syntax or unknown-identifier error, and so that no partial evaluation
//! happens on such input.
//!
//! The pattern list does not cover attribute-access chains or every
//! alternate code-execution spelling; anything it misses still dies in
//! the tokenizer or parser.

use std::sync::LazyLock;

use regex::Regex;

use super::CalcError;

/// Denylist entries: a short label (reported in the error) and the
/// case-insensitive pattern that triggers it.
static DENYLIST: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("__", r"__"),
        ("import", r"import"),
        ("exec", r"exec"),
        ("eval", r"eval"),
        ("open", r"open"),
        ("os.", r"os\."),
        ("sys.", r"sys\."),
        ("subprocess", r"subprocess"),
        ("class", r"\bclass\b"),
        ("def", r"\bdef\b"),
        ("lambda", r"\blambda\b"),
    ]
    .into_iter()
    .map(|(label, pattern)| {
        let re = Regex::new(&format!("(?i){pattern}")).expect("denylist pattern compiles");
        (label, re)
    })
    .collect()
});

/// Reject the expression if any denylist pattern matches anywhere in it.
pub fn screen(expression: &str) -> Result<(), CalcError> {
    for (label, re) in DENYLIST.iter() {
        if re.is_match(expression) {
            return Err(CalcError::SecurityViolation((*label).to_string()));
        }
    }
    Ok(())
}

/// The denylist labels, for enumeration in tests and docs.
pub fn denylist_labels() -> Vec<&'static str> {
    DENYLIST.iter().map(|(label, _)| *label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_is_screened() {
        let samples = [
            "__import__('os')",
            "import os",
            "exec('x')",
            "eval('x')",
            "open('/etc/passwd')",
            "os.system('ls')",
            "sys.exit()",
            "subprocess.run('ls')",
            "class A: pass",
            "def f(): pass",
            "lambda x: x",
        ];
        assert_eq!(samples.len(), denylist_labels().len());
        for sample in samples {
            assert!(
                matches!(screen(sample), Err(CalcError::SecurityViolation(_))),
                "'{sample}' should be screened"
            );
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(screen("IMPORT os").is_err());
        assert!(screen("Lambda x: x").is_err());
    }

    #[test]
    fn word_boundaries_protect_legitimate_identifiers() {
        // 'defaults' and 'classic' contain 'def'/'class' as substrings only.
        assert!(screen("defaults + 1").is_ok());
        assert!(screen("classic * 2").is_ok());
    }

    #[test]
    fn plain_arithmetic_passes() {
        assert!(screen("25 * 4 + sqrt(2)").is_ok());
        assert!(screen("pi * e").is_ok());
    }
}
