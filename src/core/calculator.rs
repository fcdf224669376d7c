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

//! src/core/calculator.rs
//!
//! Expression buffer and calculation pipeline
//!
//! `Calculator` owns the text the user is composing. Every UI event maps to
//! one method here:
//! - `append`, `clear`, `backspace` edit the buffer
//! - `calculate` runs translate → validate → parse → evaluate → format
//! - `toggle_sign` and `percentage` rewrite the whole buffer
//!
//! There is no pending-operator state. The buffer is re-parsed from scratch
//! on every calculation.
//!
//! # Error behaviour
//! Evaluation-path errors are logged with their cause, the buffer is reset
//! and the error is remembered so `display()` can show a short message until
//! the next key press. A length-limit error leaves everything unchanged.

use tracing::{debug, error, info, warn};

use crate::core::error::CalcError;
use crate::core::evaluator::evaluate_str;
use crate::core::formatter::format_result;
use crate::core::types::Action;
use crate::core::validator::{translate_glyphs, validate_expression};

/// Default maximum number of characters in the expression buffer
pub const DEFAULT_MAX_EXPRESSION_LENGTH: usize = 20;

/// Shown when the buffer is empty
const EMPTY_DISPLAY: &str = "0";

/// Runs the full pipeline on an expression as typed
///
/// Glyphs are translated, the whitelist checked, then the grammar parsed and
/// evaluated. Shared by the expression buffer and the CLI so both accept and
/// reject exactly the same input.
///
/// # Errors
///
/// - `EmptyExpression` if there is nothing but spaces
/// - `InvalidCharacters` / `InvalidSyntax` for malformed input
/// - `Evaluation` on division by zero
/// - `InvalidResult` if the value is not finite
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    if expression.trim_matches(' ').is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let translated = translate_glyphs(expression);
    validate_expression(&translated)?;

    evaluate_str(&translated)
}

/// Expression buffer with calculation support
#[derive(Clone, Debug)]
pub struct Calculator {
    /// Current expression, possibly containing `×`/`÷` glyphs
    expression: String,
    /// Maximum length in characters
    max_length: usize,
    /// Error from the last calculation, cleared by the next key press
    last_error: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates an empty calculator with the default length limit
    pub fn new() -> Self {
        Self::with_max_length(DEFAULT_MAX_EXPRESSION_LENGTH)
    }

    /// Creates an empty calculator with a custom length limit
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            expression: String::new(),
            max_length,
            last_error: None,
        }
    }

    /// Current buffer contents
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Maximum buffer length in characters
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Buffer length in characters (glyphs count as one)
    pub fn len(&self) -> usize {
        self.expression.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    /// Error from the most recent calculation, if it failed
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Text for the display: the error message, the buffer, or `0`
    pub fn display(&self) -> String {
        if let Some(err) = &self.last_error {
            return err.user_message().to_string();
        }

        if self.expression.is_empty() {
            EMPTY_DISPLAY.to_string()
        } else {
            self.expression.clone()
        }
    }

    /// Dispatches a single user action
    pub fn apply(&mut self, action: Action) -> Result<(), CalcError> {
        match action {
            Action::Append(c) => self.append(c),
            Action::Clear => {
                self.clear();
                Ok(())
            }
            Action::Backspace => {
                self.backspace();
                Ok(())
            }
            Action::Calculate => self.calculate().map(|_| ()),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percentage => self.percentage().map(|_| ()),
        }
    }

    /// Appends one character
    ///
    /// # Errors
    ///
    /// Returns `CalcError::LengthLimit` if the buffer is already full. The
    /// buffer is not modified in that case.
    pub fn append(&mut self, c: char) -> Result<(), CalcError> {
        // A key press after an error starts a new expression
        self.last_error = None;

        if self.len() >= self.max_length {
            warn!(max = self.max_length, "Expression exceeds maximum length");
            return Err(CalcError::LengthLimit {
                max: self.max_length,
            });
        }

        self.expression.push(c);
        Ok(())
    }

    /// Resets the buffer
    pub fn clear(&mut self) {
        self.expression.clear();
        self.last_error = None;
        debug!("Calculator cleared");
    }

    /// Removes the last character, no-op when empty
    pub fn backspace(&mut self) {
        self.last_error = None;
        self.expression.pop();
    }

    /// Evaluates the buffer and replaces it with the formatted result
    ///
    /// # Errors
    ///
    /// - `EmptyExpression` if the buffer is empty
    /// - `InvalidCharacters` / `InvalidSyntax` for malformed input
    /// - `Evaluation` on division by zero
    /// - `InvalidResult` if the value is not finite
    ///
    /// On error the buffer is reset.
    ///
    /// The formatted result replaces the buffer even when it is longer than
    /// `max_length` (twenty 9s give a 21-digit sum). Appends are then refused
    /// until the buffer is shortened or cleared, but `=` still works on it.
    pub fn calculate(&mut self) -> Result<String, CalcError> {
        let result = self.evaluate_buffer(1.0);
        self.commit(result, "Calculation")
    }

    /// Replaces the buffer with its value divided by 100
    ///
    /// The whole expression is evaluated first, so `50` becomes `0.5` and
    /// `20+30` becomes `0.5` too. Errors behave as in `calculate`.
    pub fn percentage(&mut self) -> Result<String, CalcError> {
        let result = self.evaluate_buffer(100.0);
        self.commit(result, "Percentage calculation")
    }

    /// Negates the whole expression by adding or removing a leading `-`
    ///
    /// No-op on an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::LengthLimit` if there is no room for the sign.
    pub fn toggle_sign(&mut self) -> Result<(), CalcError> {
        self.last_error = None;

        if self.expression.is_empty() {
            return Ok(());
        }

        if let Some(stripped) = self.expression.strip_prefix('-') {
            self.expression = stripped.to_string();
        } else {
            if self.len() >= self.max_length {
                warn!(max = self.max_length, "No room to toggle sign");
                return Err(CalcError::LengthLimit {
                    max: self.max_length,
                });
            }
            self.expression.insert(0, '-');
        }

        debug!(expression = %self.expression, "Sign toggled");
        Ok(())
    }

    /// Evaluates the buffer, scaled down by `divisor`
    fn evaluate_buffer(&self, divisor: f64) -> Result<String, CalcError> {
        let value = evaluate_expression(&self.expression)? / divisor;
        Ok(format_result(value))
    }

    /// Stores the outcome of an evaluation in the buffer
    fn commit(
        &mut self,
        result: Result<String, CalcError>,
        what: &str,
    ) -> Result<String, CalcError> {
        match result {
            Ok(formatted) => {
                info!("{}: {} = {}", what, self.expression, formatted);
                self.expression = formatted.clone();
                self.last_error = None;
                Ok(formatted)
            }
            Err(err) => {
                error!(expression = %self.expression, "{} error: {}", what, err);
                self.expression.clear();
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}
