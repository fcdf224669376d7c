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

//! Calculator error taxonomy
//!
//! Every failure the calculator can surface is a `CalcError`. The `Display`
//! text carries the underlying cause and is meant for logs and the CLI. The
//! GUI shows `user_message()` instead, which never echoes internal detail.

use thiserror::Error;

use crate::core::evaluator::EvalError;
use crate::core::parser::ParseError;
use crate::core::validator::ValidationError;

/// Domain-level calculator error
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// Calculate or percentage requested on an empty buffer
    #[error("No expression to calculate")]
    EmptyExpression,

    /// Expression failed the character whitelist
    #[error("Invalid expression format: {0}")]
    InvalidCharacters(#[from] ValidationError),

    /// Expression failed the grammar
    #[error("Invalid expression format: {0}")]
    InvalidSyntax(#[from] ParseError),

    /// Evaluation failed (division by zero)
    #[error("Calculation failed: {0}")]
    Evaluation(#[from] EvalError),

    /// Evaluation produced something that is not a displayable number
    #[error("Invalid result: {0}")]
    InvalidResult(String),

    /// Append would exceed the maximum expression length
    #[error("Expression too long (max {max} characters)")]
    LengthLimit { max: usize },
}

impl CalcError {
    /// Short, generic message for the display
    pub fn user_message(&self) -> &'static str {
        match self {
            CalcError::EmptyExpression => "No expression",
            CalcError::InvalidCharacters(_) | CalcError::InvalidSyntax(_) => "Invalid input",
            CalcError::Evaluation(_) => "Math error",
            CalcError::InvalidResult(_) => "Invalid result",
            CalcError::LengthLimit { .. } => "Too long",
        }
    }

    /// True for the two causes that are both reported as "invalid format"
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidCharacters(_) | CalcError::InvalidSyntax(_)
        )
    }
}
