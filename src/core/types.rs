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

//! src/core/types.rs
//!
//! Core type definitions for the calculator
//!
//! This module defines the fundamental types used throughout the application:
//! - `BinaryOp`: The four arithmetic operators
//! - `Expr`: Parsed arithmetic expression tree
//! - `Action`: A single user intent (button press or key press)
//!
//! `Expr` has no variant for names, calls or statements. Anything the parser
//! produces can only ever be arithmetic on numeric literals.

use std::fmt;

/// Binary arithmetic operator
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, displayed as `×`)
    Mul,
    /// Division (`/`, displayed as `÷`)
    Div,
}

impl BinaryOp {
    /// Maps an ASCII operator character to its variant
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// ASCII symbol used in the evaluable expression
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parsed arithmetic expression
///
/// # Example
/// ```ignore
/// // (2+3)*4
/// let expr = Expr::binary(
///     Expr::binary(Expr::Number(2.0), BinaryOp::Add, Expr::Number(3.0)),
///     BinaryOp::Mul,
///     Expr::Number(4.0),
/// );
/// assert_eq!(expr.to_string(), "((2 + 3) * 4)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Unary minus
    Negate(Box<Expr>),
    /// Binary operation
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Builds a binary node
    pub fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Builds a negation node
    pub fn negate(inner: Expr) -> Self {
        Expr::Negate(Box::new(inner))
    }
}

/// Fully parenthesised form, used by `deskcalc check` and in logs
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Negate(inner) => write!(f, "(-{})", inner),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

/// A single user intent, independent of whether it came from a button
/// or the keyboard
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// Append one character to the expression
    Append(char),
    /// Reset the expression
    Clear,
    /// Remove the last character
    Backspace,
    /// Evaluate the expression
    Calculate,
    /// Negate the whole expression
    ToggleSign,
    /// Divide the current value by 100
    Percentage,
}

impl Action {
    /// Maps a keypad label to its action
    ///
    /// Display glyphs (`×`, `÷`) are appended as-is. Translation to ASCII
    /// happens once, at calculation time.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Action::Clear),
            "=" => Some(Action::Calculate),
            "±" => Some(Action::ToggleSign),
            "%" => Some(Action::Percentage),
            "⌫" => Some(Action::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if is_input_char(c) => Some(Action::Append(c)),
                    _ => None,
                }
            }
        }
    }

    /// Maps a typed character to its action
    ///
    /// Only characters that may appear in an expression are accepted,
    /// everything else is ignored by the keyboard handler.
    pub fn from_key_char(c: char) -> Option<Self> {
        match c {
            '%' => Some(Action::Percentage),
            '=' => Some(Action::Calculate),
            c if is_input_char(c) => Some(Action::Append(c)),
            _ => None,
        }
    }
}

/// Characters that can be appended to the expression buffer
pub fn is_input_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')' | '×' | '÷')
}

/// Keypad layout, row by row
pub const KEYPAD_LAYOUT: &[&[&str]] = &[
    &["C", "±", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "⌫", "="],
];
