//! Evaluation of the restricted expression tree.
//!
//! Identifiers resolve strictly against the symbol registry; there is no
//! ambient namespace. Arithmetic that leaves the real domain (division or
//! modulo by zero, a power that produces NaN) is reported as a math
//! domain error rather than silently yielding IEEE special values.

use super::CalcError;
use super::parser::{BinOp, Expr};
use super::symbols::{self, Symbol};

/// Evaluate an expression tree to a value.
pub fn eval(expr: &Expr) -> Result<f64, CalcError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Ident(name) => match symbols::lookup(name) {
            Some(Symbol::Constant(value)) => Ok(value),
            Some(Symbol::Function(_)) => Err(CalcError::MalformedExpression(format!(
                "'{name}' is a function and needs an argument, e.g. {name}(2)"
            ))),
            None => Err(CalcError::UnknownSymbol(name.clone())),
        },
        Expr::Call(name, argument) => match symbols::lookup(name) {
            Some(Symbol::Function(f)) => f(eval(argument)?),
            Some(Symbol::Constant(_)) => Err(CalcError::MalformedExpression(format!(
                "'{name}' is a constant, not a function"
            ))),
            None => Err(CalcError::UnknownSymbol(name.clone())),
        },
        Expr::Neg(inner) => Ok(-eval(inner)?),
        Expr::Binary(op, left, right) => {
            let (l, r) = (eval(left)?, eval(right)?);
            apply(*op, l, r)
        }
    }
}

fn apply(op: BinOp, l: f64, r: f64) -> Result<f64, CalcError> {
    match op {
        BinOp::Add => Ok(l + r),
        BinOp::Sub => Ok(l - r),
        BinOp::Mul => Ok(l * r),
        BinOp::Div => {
            if r == 0.0 {
                Err(CalcError::MathDomain("division by zero".to_string()))
            } else {
                Ok(l / r)
            }
        }
        BinOp::Rem => {
            if r == 0.0 {
                Err(CalcError::MathDomain("modulo by zero".to_string()))
            } else {
                Ok(l % r)
            }
        }
        BinOp::Pow => {
            let value = l.powf(r);
            if value.is_nan() && !l.is_nan() && !r.is_nan() {
                Err(CalcError::MathDomain(format!(
                    "{l} ** {r} is undefined for real numbers"
                )))
            } else {
                Ok(value)
            }
        }
    }
}
