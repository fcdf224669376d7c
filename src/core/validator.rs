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

//! Character-level input validation
//!
//! First of two layers guarding the evaluator. This module only answers
//! "does every character belong to the arithmetic alphabet?". Structure
//! (operator placement, balanced parentheses, literal shape) is enforced by
//! the grammar in `parser.rs`, which rejects anything this layer lets through
//! that is not arithmetic.
//!
//! # Security Philosophy
//! We use WHITELIST validation (allow known-good) rather than BLACKLIST
//! (block known-bad). Only digits, the decimal point, the four operators,
//! parentheses and spaces are accepted.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Validation errors
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Nothing to validate
    #[error("Expression is empty")]
    Empty,

    /// Character outside the arithmetic whitelist
    #[error("Invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

lazy_static! {
    /// Digits, decimal point, operators, parentheses and spaces. Nothing else.
    static ref EXPRESSION_CHARS: Regex = Regex::new(r"^[0-9+\-*/.() ]+$")
        .expect("expression whitelist should be valid regex");
}

/// Replaces display-only operator glyphs with their ASCII equivalents
///
/// - `×` → `*`
/// - `÷` → `/`
pub fn translate_glyphs(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

/// Returns true iff `expression` is non-empty and made only of whitelisted
/// characters
pub fn is_valid_format(expression: &str) -> bool {
    EXPRESSION_CHARS.is_match(expression)
}

/// Validates an already translated expression
///
/// Reports the first character outside the whitelist so callers can log
/// where the input went wrong.
pub fn validate_expression(expression: &str) -> Result<(), ValidationError> {
    if expression.is_empty() {
        return Err(ValidationError::Empty);
    }

    if is_valid_format(expression) {
        return Ok(());
    }

    match expression
        .chars()
        .enumerate()
        .find(|(_, c)| !is_whitelisted(*c))
    {
        Some((position, ch)) => Err(ValidationError::InvalidCharacter { ch, position }),
        None => Ok(()),
    }
}

fn is_whitelisted(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')' | ' ')
}
