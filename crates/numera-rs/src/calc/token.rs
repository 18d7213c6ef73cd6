//! Normalization and tokenization of expression text.
//!
//! Normalization is a purely textual pass that maps locale operator
//! variants onto canonical ASCII before anything else looks at the input:
//! caret to the power operator, multiplication/division glyphs to `*`/`/`,
//! and the decimal comma to a decimal point. The comma substitution is a
//! blanket one, which makes the comma unavailable as an argument
//! separator — the symbol registry is unary-only for exactly that reason.

use std::iter::Peekable;
use std::str::Chars;

use super::CalcError;

/// A lexical token of the expression language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    LParen,
    RParen,
}

/// Canonicalize locale operator variants. Runs before the security
/// screen and before tokenization.
pub fn normalize(expression: &str) -> String {
    expression
        .trim()
        .replace('^', "**")
        .replace('×', "*")
        .replace('÷', "/")
        .replace(',', ".")
}

/// Tokenize a normalized expression.
///
/// Accepts numeric literals (with optional fraction and exponent),
/// identifiers, the arithmetic operators, and parentheses. Anything else
/// is a [`CalcError::MalformedExpression`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => tokens.push(scan_number(&mut chars)?),
            c if c.is_ascii_alphabetic() || c == '_' => tokens.push(scan_ident(&mut chars)),
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::Power);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '%' => {
                chars.next();
                tokens.push(Token::Percent);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            other => {
                return Err(CalcError::MalformedExpression(format!(
                    "unexpected character '{other}'"
                )));
            }
        }
    }

    Ok(tokens)
}

fn scan_number(chars: &mut Peekable<Chars<'_>>) -> Result<Token, CalcError> {
    let mut literal = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            chars.next();
        } else {
            break;
        }
    }

    // An exponent suffix is only consumed when a digit actually follows,
    // so "2e" stays a number followed by the identifier 'e' (the constant).
    if matches!(chars.peek(), Some('e' | 'E')) {
        let mut lookahead = chars.clone();
        lookahead.next();
        let mut sign = false;
        if matches!(lookahead.peek(), Some('+' | '-')) {
            sign = true;
            lookahead.next();
        }
        if matches!(lookahead.peek(), Some(c) if c.is_ascii_digit()) {
            literal.push('e');
            chars.next();
            if sign {
                if let Some(&s) = chars.peek() {
                    literal.push(s);
                    chars.next();
                }
            }
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    literal.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
        }
    }

    literal
        .parse::<f64>()
        .map(Token::Number)
        .map_err(|_| CalcError::MalformedExpression(format!("invalid number literal '{literal}'")))
}

fn scan_ident(chars: &mut Peekable<Chars<'_>>) -> Token {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    Token::Ident(name)
}
