//! Sandboxed arithmetic expression evaluator.
//!
//! Untrusted free-text expressions are evaluated against a fixed,
//! immutable registry of constants and unary functions — see [`symbols`].
//! There is no general-purpose evaluation path anywhere in the pipeline:
//! the input is normalized, screened against an injection denylist,
//! tokenized, parsed into a restricted AST (literals, registered names,
//! arithmetic operators, parentheses), and that tree is evaluated
//! directly. An expression can therefore produce a number or an error,
//! never an effect.
//!
//! Pipeline: [`token::normalize`] → [`guard::screen`] → [`token::tokenize`]
//! → [`parser::parse`] → [`eval::eval`] → [`crate::format`].
//!
//! The string-level entry point is [`evaluate`], which upholds the tool
//! contract of always returning a string. [`eval_expression`] is the typed
//! variant for programmatic callers.

use std::fmt;

use tracing::debug;

pub mod eval;
pub mod guard;
pub mod parser;
pub mod symbols;
pub mod token;

use crate::format::{format_number, format_significant};

/// Significant digits kept when rendering a non-integral result.
pub const RESULT_SIGNIFICANT_DIGITS: usize = 10;

/// Everything that can go wrong while evaluating an expression.
///
/// Every variant renders as a short human-readable message; the
/// string-level API prepends `Error: ` and nothing ever propagates past
/// the tool boundary as a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The expression matched an injection-denylist pattern. Carries the
    /// pattern label that matched.
    SecurityViolation(String),
    /// An identifier that is not in the symbol registry.
    UnknownSymbol(String),
    /// A lexical or syntactic problem, including over-deep nesting.
    MalformedExpression(String),
    /// Arithmetic that is undefined over the reals (division by zero,
    /// `sqrt(-1)`, `factorial(2.5)`, ...).
    MathDomain(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::SecurityViolation(pattern) => {
                write!(f, "expression rejected: contains forbidden pattern '{pattern}'")
            }
            CalcError::UnknownSymbol(name) => write!(f, "unknown identifier '{name}'"),
            CalcError::MalformedExpression(detail) => write!(f, "invalid expression: {detail}"),
            CalcError::MathDomain(detail) => write!(f, "math domain error: {detail}"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Evaluate an untrusted expression to a typed result.
///
/// Normalization and the security screen run before any parsing; a
/// screened-out expression is never partially evaluated.
pub fn eval_expression(expression: &str) -> Result<f64, CalcError> {
    let normalized = token::normalize(expression);
    guard::screen(&normalized)?;
    let tokens = token::tokenize(&normalized)?;
    let tree = parser::parse(&tokens)?;
    let value = eval::eval(&tree)?;
    debug!("evaluated expression ({} chars) -> {value}", expression.len());
    if value.is_nan() {
        Err(CalcError::MathDomain(
            "result is undefined for real numbers".to_string(),
        ))
    } else {
        Ok(value)
    }
}

/// Evaluate an untrusted expression to a result string.
///
/// Always returns a string: a formatted number on success, an
/// `Error: ...` line otherwise. Integral results render without a
/// fractional part; everything else is rounded to
/// [`RESULT_SIGNIFICANT_DIGITS`] significant digits.
pub fn evaluate(expression: &str) -> String {
    match eval_expression(expression) {
        Ok(value) => {
            if value.is_finite() && value.fract() == 0.0 {
                format_number(value)
            } else {
                format_significant(value, RESULT_SIGNIFICANT_DIGITS)
            }
        }
        Err(e) => format!("Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_ok(expr: &str) -> f64 {
        eval_expression(expr).unwrap_or_else(|e| panic!("'{expr}' failed: {e}"))
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(evaluate("25 * 4"), "100");
        assert_eq!(evaluate("2 + 2"), "4");
        assert_eq!(evaluate("15/100 * 200"), "30");
        assert_eq!(evaluate("2 ** 10"), "1024");
        assert_eq!(evaluate("10 % 3"), "1");
    }

    #[test]
    fn registered_functions_and_constants() {
        assert_eq!(evaluate("sqrt(144)"), "12");
        assert!((eval_ok("pi * 2") - std::f64::consts::TAU).abs() < 1e-9);
        assert!((eval_ok("sin(radians(90))") - 1.0).abs() < 1e-9);
        assert_eq!(evaluate("log10(1000)"), "3");
        assert_eq!(evaluate("factorial(5)"), "120");
        // Half-to-even, not half-away-from-zero.
        assert_eq!(evaluate("round(2.5)"), "2");
        assert_eq!(evaluate("round(3.5)"), "4");
    }

    #[test]
    fn locale_operator_variants() {
        assert_eq!(evaluate("3 × 4"), "12");
        assert_eq!(evaluate("8 ÷ 2"), "4");
        assert_eq!(evaluate("2 ^ 3"), "8");
        assert_eq!(evaluate("1,5 + 1,5"), "3");
    }

    #[test]
    fn precedence_matches_conventional_math() {
        assert_eq!(evaluate("2 + 3 * 4"), "14");
        assert_eq!(evaluate("(2 + 3) * 4"), "20");
        // Exponentiation binds tighter than unary minus and associates right.
        assert_eq!(evaluate("-2 ** 2"), "-4");
        assert_eq!(evaluate("2 ** -1"), "0.5");
        assert_eq!(evaluate("2 ** 3 ** 2"), "512");
    }

    #[test]
    fn injection_attempts_are_security_violations() {
        let err = eval_expression("__import__('os')").unwrap_err();
        assert!(matches!(err, CalcError::SecurityViolation(_)));
        assert!(evaluate("__import__('os')").starts_with("Error:"));
        assert!(matches!(
            eval_expression("exec('1')").unwrap_err(),
            CalcError::SecurityViolation(_)
        ));
    }

    #[test]
    fn unknown_identifiers_are_reported() {
        assert!(matches!(
            eval_expression("foo(3)").unwrap_err(),
            CalcError::UnknownSymbol(name) if name == "foo"
        ));
        assert!(matches!(
            eval_expression("x + 1").unwrap_err(),
            CalcError::UnknownSymbol(_)
        ));
    }

    #[test]
    fn malformed_input_is_reported() {
        assert!(matches!(
            eval_expression("2 +").unwrap_err(),
            CalcError::MalformedExpression(_)
        ));
        assert!(matches!(
            eval_expression("").unwrap_err(),
            CalcError::MalformedExpression(_)
        ));
        assert!(matches!(
            eval_expression("(1 + 2").unwrap_err(),
            CalcError::MalformedExpression(_)
        ));
    }

    #[test]
    fn domain_failures_are_math_errors() {
        for expr in ["1 / 0", "10 % 0", "sqrt(-4)", "log(0)", "factorial(-1)", "asin(2)"] {
            assert!(
                matches!(eval_expression(expr).unwrap_err(), CalcError::MathDomain(_)),
                "'{expr}' should be a math domain error"
            );
        }
    }

    #[test]
    fn nan_producing_arithmetic_is_a_math_error() {
        assert!(matches!(
            eval_expression("inf - inf").unwrap_err(),
            CalcError::MathDomain(_)
        ));
    }

    #[test]
    fn fractional_results_are_rounded_to_ten_significant_digits() {
        assert_eq!(evaluate("1 / 3"), "0.3333333333");
        assert_eq!(evaluate("0.1 + 0.2"), "0.3");
    }

    #[test]
    fn evaluation_is_correct_within_tolerance() {
        let cases = [
            ("2 + 3 * 4 - 5 / 2", 11.5),
            ("(1 + 2) * (3 + 4)", 21.0),
            ("exp(log(7))", 7.0),
            ("cos(0) + tan(0)", 1.0),
            ("ceil(2.1) + floor(2.9)", 5.0),
        ];
        for (expr, expected) in cases {
            let got = eval_ok(expr);
            assert!(
                (got - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                "'{expr}' = {got}, expected {expected}"
            );
        }
    }
}
