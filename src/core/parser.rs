// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Arithmetic expression parser
//!
//! This module turns an expression string into an `Expr` tree.
//! It handles:
//! - Decimal literals (`12`, `1.5`, `.5`, `3.`)
//! - The four binary operators with standard precedence
//! - Unary minus
//! - Parentheses
//! - Spaces between tokens
//!
//! # Grammar
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-' unary | primary
//! primary := number | '(' expr ')'
//! number  := digit+ ('.' digit*)? | '.' digit+
//! ```
//!
//! Deliberately rejected: unary plus (so `1++2` is an error), implicit
//! multiplication (`2(3)`), empty parentheses and more than one decimal
//! point per literal.
//!
//! # Architecture
//! The parser uses nom combinators for composable, type-safe parsing.
//! A cheap pre-pass checks input size, parenthesis balance and nesting depth
//! so that the recursive descent never sees pathological input.
//!
//! # Security
//! The grammar has no identifiers, calls or statements. Whatever string is
//! handed in, the result is either an arithmetic tree or a `ParseError`.

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, one_of},
    combinator::{map, map_opt},
    error::{Error as NomError, ErrorKind},
    multi::many0,
    sequence::{delimited, preceded},
    IResult, Parser,
};
use thiserror::Error;

use crate::core::types::{BinaryOp, Expr};

/// Longest input the parser accepts, in bytes
pub const MAX_PARSE_LENGTH: usize = 256;

/// Deepest parenthesis nesting the parser accepts
pub const MAX_NESTING_DEPTH: usize = 32;

/// Parse errors with position context
///
/// Positions are zero-based character offsets into the parsed input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Expression is empty")]
    Empty,

    #[error("Expression too long: {len} bytes (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("Parentheses nested deeper than {max} levels")]
    NestingTooDeep { max: usize },

    #[error("Unbalanced parenthesis at position {position}")]
    UnbalancedParentheses { position: usize },

    #[error("Unexpected '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("Unexpected end of expression at position {position}")]
    UnexpectedEnd { position: usize },
}

/// Parse a complete arithmetic expression
///
/// The whole input must be consumed; trailing tokens are an error.
///
/// # Example
/// ```ignore
/// let expr = parse_expression("(2+3)*4")?;
/// assert_eq!(expr.to_string(), "((2 + 3) * 4)");
/// ```
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    if input.trim_matches(' ').is_empty() {
        return Err(ParseError::Empty);
    }

    if input.len() > MAX_PARSE_LENGTH {
        return Err(ParseError::TooLong {
            len: input.len(),
            max: MAX_PARSE_LENGTH,
        });
    }

    check_parentheses(input)?;

    match (expr, spaces).parse(input) {
        Ok(("", (parsed, _))) => Ok(parsed),
        Ok((rest, _)) => Err(unexpected_at(input, rest)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(unexpected_at(input, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::UnexpectedEnd {
            position: input.chars().count(),
        }),
    }
}

/// Checks parenthesis balance and nesting depth in a single pass
///
/// Reports the first `)` without a partner, or the last `(` that is never
/// closed.
pub fn check_parentheses(input: &str) -> Result<(), ParseError> {
    let mut open_positions = Vec::new();

    for (position, c) in input.chars().enumerate() {
        match c {
            '(' => {
                open_positions.push(position);
                if open_positions.len() > MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep {
                        max: MAX_NESTING_DEPTH,
                    });
                }
            }
            ')' => {
                if open_positions.pop().is_none() {
                    return Err(ParseError::UnbalancedParentheses { position });
                }
            }
            _ => {}
        }
    }

    match open_positions.pop() {
        Some(position) => Err(ParseError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

/// Builds the error for parsing that stopped at `rest`
fn unexpected_at(input: &str, rest: &str) -> ParseError {
    let rest = rest.trim_start_matches(' ');
    let consumed = input.len() - rest.len();
    let position = input[..consumed].chars().count();

    match rest.chars().next() {
        Some(ch) => ParseError::UnexpectedChar { ch, position },
        None => ParseError::UnexpectedEnd { position },
    }
}

/// Zero or more spaces
///
/// Only the plain space is accepted, matching the validator's alphabet.
fn spaces(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ').parse(input)
}

/// expr := term (('+' | '-') term)*
fn expr(input: &str) -> IResult<&str, Expr> {
    let (input, first) = term(input)?;
    let (input, rest) = many0((operator("+-"), term)).parse(input)?;

    Ok((input, fold_left(first, rest)))
}

/// term := unary (('*' | '/') unary)*
fn term(input: &str) -> IResult<&str, Expr> {
    let (input, first) = unary(input)?;
    let (input, rest) = many0((operator("*/"), unary)).parse(input)?;

    Ok((input, fold_left(first, rest)))
}

/// unary := '-' unary | primary
fn unary(input: &str) -> IResult<&str, Expr> {
    alt((
        map(preceded((spaces, char('-')), unary), Expr::negate),
        primary,
    ))
    .parse(input)
}

/// primary := number | '(' expr ')'
fn primary(input: &str) -> IResult<&str, Expr> {
    preceded(spaces, alt((number, parenthesised))).parse(input)
}

fn parenthesised(input: &str) -> IResult<&str, Expr> {
    delimited(char('('), expr, preceded(spaces, char(')'))).parse(input)
}

/// Parse a decimal literal
///
/// Formats supported:
/// - "12" (integer)
/// - "1.5" (fraction)
/// - "3." (trailing point)
/// - ".5" (leading point)
///
/// The literal is sliced out of the input by length, so a fraction at the
/// very end of the expression is kept whole.
fn number(input: &str) -> IResult<&str, Expr> {
    let int_len = digit_run(input);
    let mut len = int_len;

    if input[len..].starts_with('.') {
        let frac_len = digit_run(&input[len + 1..]);
        // A lone '.' is not a number
        if int_len > 0 || frac_len > 0 {
            len += 1 + frac_len;
        }
    }

    if len == 0 {
        return Err(nom::Err::Error(NomError::new(input, ErrorKind::Digit)));
    }

    let (literal, rest) = input.split_at(len);
    match literal.parse::<f64>() {
        Ok(value) => Ok((rest, Expr::Number(value))),
        Err(_) => Err(nom::Err::Error(NomError::new(input, ErrorKind::Float))),
    }
}

/// Length in bytes of the leading run of ASCII digits
fn digit_run(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}

/// One of the given operator characters, preceded by optional spaces
fn operator<'a>(
    symbols: &'static str,
) -> impl Parser<&'a str, Output = BinaryOp, Error = nom::error::Error<&'a str>> {
    map_opt(preceded(spaces, one_of(symbols)), BinaryOp::from_char)
}

/// Left-associative fold: `a - b - c` is `(a - b) - c`
fn fold_left(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
    rest.into_iter()
        .fold(first, |lhs, (op, rhs)| Expr::binary(lhs, op, rhs))
}
