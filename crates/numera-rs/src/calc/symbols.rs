//! The fixed symbol registry: every name an expression may reference.
//!
//! Constants and single-argument functions only. The table is built once
//! and never mutated; it is the complete, enumerable set of identifiers
//! the evaluator can resolve, and none of them can perform I/O or reach
//! outside the numeric domain. Multi-argument functions are deliberately
//! absent — the decimal-comma normalization consumes the comma, so the
//! expression language has no argument separator (exponentiation is the
//! `**` operator instead of a `pow` function).

use std::collections::HashMap;
use std::sync::LazyLock;

use super::CalcError;

/// A registered single-argument numeric function. Domain failures are
/// reported by the function itself, so the evaluator stays generic.
pub type UnaryFn = fn(f64) -> Result<f64, CalcError>;

/// A registry entry: a numeric constant or a unary function.
#[derive(Clone, Copy)]
pub enum Symbol {
    Constant(f64),
    Function(UnaryFn),
}

/// Look up a registered identifier.
pub fn lookup(name: &str) -> Option<Symbol> {
    TABLE.get(name).copied()
}

/// All registered names, sorted. Useful for enumeration and docs.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = TABLE.keys().copied().collect();
    names.sort_unstable();
    names
}

static TABLE: LazyLock<HashMap<&'static str, Symbol>> = LazyLock::new(|| {
    use Symbol::{Constant, Function};
    HashMap::from([
        // Constants
        ("pi", Constant(std::f64::consts::PI)),
        ("e", Constant(std::f64::consts::E)),
        ("tau", Constant(std::f64::consts::TAU)),
        ("inf", Constant(f64::INFINITY)),
        // Basics
        ("abs", Function(|x| Ok(x.abs()))),
        // Banker's rounding: round(2.5) is 2, round(3.5) is 4.
        ("round", Function(|x| Ok(x.round_ties_even()))),
        ("ceil", Function(|x| Ok(x.ceil()))),
        ("floor", Function(|x| Ok(x.floor()))),
        ("sqrt", Function(sqrt)),
        ("factorial", Function(factorial)),
        // Trigonometry
        ("sin", Function(|x| Ok(x.sin()))),
        ("cos", Function(|x| Ok(x.cos()))),
        ("tan", Function(|x| Ok(x.tan()))),
        ("asin", Function(asin)),
        ("acos", Function(acos)),
        ("atan", Function(|x| Ok(x.atan()))),
        ("sinh", Function(|x| Ok(x.sinh()))),
        ("cosh", Function(|x| Ok(x.cosh()))),
        ("tanh", Function(|x| Ok(x.tanh()))),
        // Logarithms and exponentials
        ("log", Function(|x| checked_log(x, f64::ln))),
        ("log10", Function(|x| checked_log(x, f64::log10))),
        ("log2", Function(|x| checked_log(x, f64::log2))),
        ("exp", Function(|x| Ok(x.exp()))),
        // Angle conversions
        ("degrees", Function(|x| Ok(x.to_degrees()))),
        ("radians", Function(|x| Ok(x.to_radians()))),
    ])
});

fn sqrt(x: f64) -> Result<f64, CalcError> {
    if x < 0.0 {
        Err(CalcError::MathDomain(format!(
            "square root of a negative number ({x})"
        )))
    } else {
        Ok(x.sqrt())
    }
}

fn asin(x: f64) -> Result<f64, CalcError> {
    if !(-1.0..=1.0).contains(&x) {
        Err(CalcError::MathDomain(format!("asin of {x} is undefined")))
    } else {
        Ok(x.asin())
    }
}

fn acos(x: f64) -> Result<f64, CalcError> {
    if !(-1.0..=1.0).contains(&x) {
        Err(CalcError::MathDomain(format!("acos of {x} is undefined")))
    } else {
        Ok(x.acos())
    }
}

fn checked_log(x: f64, log: fn(f64) -> f64) -> Result<f64, CalcError> {
    if x <= 0.0 {
        Err(CalcError::MathDomain(format!(
            "logarithm of a non-positive number ({x})"
        )))
    } else {
        Ok(log(x))
    }
}

// 170! is the largest factorial representable as an f64.
const MAX_FACTORIAL_ARG: f64 = 170.0;

fn factorial(x: f64) -> Result<f64, CalcError> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        return Err(CalcError::MathDomain(format!(
            "factorial requires a non-negative integer, got {x}"
        )));
    }
    if x > MAX_FACTORIAL_ARG {
        return Err(CalcError::MathDomain(format!(
            "factorial argument too large ({x})"
        )));
    }
    let mut result = 1.0;
    let mut k = 2.0;
    while k <= x {
        result *= k;
        k += 1.0;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_closed_and_enumerable() {
        let names = names();
        assert!(names.contains(&"pi"));
        assert!(names.contains(&"sqrt"));
        // Nothing resembling I/O or code execution is registered.
        for dangerous in ["open", "exec", "eval", "import", "system"] {
            assert!(!names.contains(&dangerous), "'{dangerous}' must not be registered");
        }
    }

    #[test]
    fn constants_resolve() {
        assert!(matches!(
            lookup("tau"),
            Some(Symbol::Constant(v)) if v == std::f64::consts::TAU
        ));
        assert!(lookup("nonsense").is_none());
    }

    #[test]
    fn factorial_of_small_integers() {
        let f = match lookup("factorial") {
            Some(Symbol::Function(f)) => f,
            _ => panic!("factorial not registered"),
        };
        assert_eq!(f(0.0).unwrap(), 1.0);
        assert_eq!(f(5.0).unwrap(), 120.0);
        assert!(f(2.5).is_err());
        assert!(f(-3.0).is_err());
        assert!(f(171.0).is_err());
    }

    #[test]
    fn round_breaks_ties_toward_even() {
        let f = match lookup("round") {
            Some(Symbol::Function(f)) => f,
            _ => panic!("round not registered"),
        };
        assert_eq!(f(2.5).unwrap(), 2.0);
        assert_eq!(f(3.5).unwrap(), 4.0);
        assert_eq!(f(-2.5).unwrap(), -2.0);
        assert_eq!(f(2.4).unwrap(), 2.0);
        assert_eq!(f(2.6).unwrap(), 3.0);
    }

    #[test]
    fn domain_edges() {
        assert!(sqrt(-1.0).is_err());
        assert!(asin(1.5).is_err());
        assert!(acos(-2.0).is_err());
        assert!(checked_log(0.0, f64::ln).is_err());
        assert!(checked_log(-5.0, f64::log10).is_err());
    }
}
