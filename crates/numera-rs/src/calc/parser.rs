//! Recursive-descent parser producing a restricted expression tree.
//!
//! The grammar admits numeric literals, identifiers (constants or
//! single-argument function calls), unary sign, the binary operators
//! `+ - * / % **`, and parentheses. Nothing else exists — no attribute
//! access, no statements, no general calls — so evaluation of the tree
//! cannot reach anything outside the symbol registry.
//!
//! Precedence, loosest to tightest: additive, multiplicative, unary sign,
//! exponentiation (right-associative, binding tighter than unary on its
//! left: `-2 ** 2` is `-(2 ** 2)`).

use super::CalcError;
use super::token::Token;

/// Nesting depth cap. Input is untrusted; a parenthesis bomb must fail
/// with a parse error instead of exhausting the stack.
pub const MAX_DEPTH: usize = 64;

/// A node of the restricted expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// A bare identifier — resolved against the symbol registry at
    /// evaluation time.
    Ident(String),
    /// A single-argument call of a registered function.
    Call(String, Box<Expr>),
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

/// Parse a token stream into an expression tree.
pub fn parse(tokens: &[Token]) -> Result<Expr, CalcError> {
    let mut parser = Parser { tokens, pos: 0, depth: 0 };
    if tokens.is_empty() {
        return Err(CalcError::MalformedExpression("empty expression".to_string()));
    }
    let expr = parser.additive()?;
    match parser.peek() {
        None => Ok(expr),
        Some(t) => Err(CalcError::MalformedExpression(format!(
            "unexpected trailing {}",
            describe(t)
        ))),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let t = self.tokens.get(self.pos);
        self.pos += 1;
        t
    }

    fn enter(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            Err(CalcError::MalformedExpression(
                "expression nests too deeply".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expect_rparen(&mut self) -> Result<(), CalcError> {
        match self.advance() {
            Some(Token::RParen) => Ok(()),
            Some(t) => Err(CalcError::MalformedExpression(format!(
                "expected ')', found {}",
                describe(t)
            ))),
            None => Err(CalcError::MalformedExpression(
                "expected ')' before end of expression".to_string(),
            )),
        }
    }

    fn additive(&mut self) -> Result<Expr, CalcError> {
        let mut left = self.multiplicative()?;
        while let Some(op) = match self.peek() {
            Some(Token::Plus) => Some(BinOp::Add),
            Some(Token::Minus) => Some(BinOp::Sub),
            _ => None,
        } {
            self.advance();
            let right = self.multiplicative()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Expr, CalcError> {
        let mut left = self.unary()?;
        while let Some(op) = match self.peek() {
            Some(Token::Star) => Some(BinOp::Mul),
            Some(Token::Slash) => Some(BinOp::Div),
            Some(Token::Percent) => Some(BinOp::Rem),
            _ => None,
        } {
            self.advance();
            let right = self.unary()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, CalcError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                self.enter()?;
                let inner = self.unary()?;
                self.leave();
                Ok(Expr::Neg(Box::new(inner)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.enter()?;
                let inner = self.unary()?;
                self.leave();
                Ok(inner)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, CalcError> {
        let base = self.primary()?;
        if self.peek() == Some(&Token::Power) {
            self.advance();
            self.enter()?;
            // Right-associative; the exponent may carry its own sign.
            let exponent = self.unary()?;
            self.leave();
            Ok(Expr::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)))
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self) -> Result<Expr, CalcError> {
        match self.advance().cloned() {
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Ident(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.advance();
                    self.enter()?;
                    let argument = self.additive()?;
                    self.leave();
                    self.expect_rparen()?;
                    Ok(Expr::Call(name, Box::new(argument)))
                } else {
                    Ok(Expr::Ident(name))
                }
            }
            Some(Token::LParen) => {
                self.enter()?;
                let inner = self.additive()?;
                self.leave();
                self.expect_rparen()?;
                Ok(inner)
            }
            Some(t) => Err(CalcError::MalformedExpression(format!(
                "unexpected {}",
                describe(&t)
            ))),
            None => Err(CalcError::MalformedExpression(
                "unexpected end of expression".to_string(),
            )),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(v) => format!("number '{v}'"),
        Token::Ident(name) => format!("identifier '{name}'"),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::Percent => "'%'".to_string(),
        Token::Power => "'**'".to_string(),
        Token::LParen => "'('".to_string(),
        Token::RParen => "')'".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::token::tokenize;

    fn parse_str(input: &str) -> Result<Expr, CalcError> {
        parse(&tokenize(input).unwrap())
    }

    #[test]
    fn precedence_shapes_the_tree() {
        let tree = parse_str("2 + 3 * 4").unwrap();
        match tree {
            Expr::Binary(BinOp::Add, left, right) => {
                assert_eq!(*left, Expr::Number(2.0));
                assert!(matches!(*right, Expr::Binary(BinOp::Mul, _, _)));
            }
            other => panic!("unexpected tree: {other:?}"),
        }
    }

    #[test]
    fn power_is_right_associative() {
        let tree = parse_str("2 ** 3 ** 2").unwrap();
        match tree {
            Expr::Binary(BinOp::Pow, _, right) => {
                assert!(matches!(*right, Expr::Binary(BinOp::Pow, _, _)));
            }
            other => panic!("unexpected tree: {other:?}"),
        }
    }

    #[test]
    fn unary_minus_wraps_power() {
        assert!(matches!(parse_str("-2 ** 2").unwrap(), Expr::Neg(_)));
    }

    #[test]
    fn calls_take_one_argument() {
        let tree = parse_str("sqrt(4 + 5)").unwrap();
        match tree {
            Expr::Call(name, arg) => {
                assert_eq!(name, "sqrt");
                assert!(matches!(*arg, Expr::Binary(BinOp::Add, _, _)));
            }
            other => panic!("unexpected tree: {other:?}"),
        }
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        assert!(parse_str("(1 + 2").is_err());
        assert!(parse_str("1 + 2)").is_err());
    }

    #[test]
    fn trailing_tokens_fail() {
        assert!(parse_str("1 2").is_err());
    }

    #[test]
    fn nesting_depth_is_capped() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 8), ")".repeat(MAX_DEPTH + 8));
        assert!(matches!(
            parse_str(&deep),
            Err(CalcError::MalformedExpression(_))
        ));
    }
}
