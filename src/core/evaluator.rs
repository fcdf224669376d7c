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

//! src/core/evaluator.rs
//!
//! Sandboxed arithmetic evaluation
//!
//! Walks an `Expr` tree and reduces it to an `f64`. There is no environment,
//! no name lookup and no function table. The only things that can be
//! evaluated are the node kinds the parser can build.

use thiserror::Error;

use crate::core::error::CalcError;
use crate::core::parser::parse_expression;
use crate::core::types::{BinaryOp, Expr};

/// Evaluation errors
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// Divisor evaluated to zero
    #[error("Division by zero")]
    DivisionByZero,
}

/// Evaluate a parsed expression
///
/// Division by zero is an error rather than infinity. Other non-finite
/// values (overflow) are reported by `evaluate_str` as an invalid result.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Negate(inner) => Ok(-evaluate(inner)?),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs)?;
            let rhs = evaluate(rhs)?;

            match op {
                BinaryOp::Add => Ok(lhs + rhs),
                BinaryOp::Sub => Ok(lhs - rhs),
                BinaryOp::Mul => Ok(lhs * rhs),
                BinaryOp::Div => {
                    if rhs == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(lhs / rhs)
                    }
                }
            }
        }
    }
}

/// Parse and evaluate an ASCII expression string
///
/// Safe to call on unvalidated input: anything that is not arithmetic
/// fails in the parser.
///
/// # Example
/// ```ignore
/// assert_eq!(evaluate_str("(2+3)*4")?, 20.0);
/// ```
pub fn evaluate_str(expression: &str) -> Result<f64, CalcError> {
    let expr = parse_expression(expression)?;
    let value = evaluate(&expr)?;

    check_result(value)
}

/// Rejects values that cannot be shown as a number
pub fn check_result(value: f64) -> Result<f64, CalcError> {
    if value.is_nan() {
        Err(CalcError::InvalidResult("not a number".to_string()))
    } else if value.is_infinite() {
        Err(CalcError::InvalidResult(format!("{} is out of range", value)))
    } else {
        Ok(value)
    }
}
