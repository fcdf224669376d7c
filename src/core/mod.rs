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

//! src/core/mod.rs
//!
//! Core calculator logic
//!
//! This module contains everything needed to turn typed input into a
//! displayed result:
//! - Type definitions for expressions and user actions
//! - Character whitelist validation
//! - A nom-based arithmetic grammar
//! - Sandboxed evaluation and result formatting
//! - The expression buffer that ties them together
//!
//! All logic is isolated from UI and I/O concerns to enable comprehensive
//! unit testing without requiring a display server.

pub mod calculator;
pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod parser;
pub mod types;
pub mod validator;

pub use calculator::{evaluate_expression, Calculator, DEFAULT_MAX_EXPRESSION_LENGTH};
pub use error::CalcError;
pub use evaluator::{evaluate, evaluate_str, EvalError};
pub use formatter::format_result;
pub use parser::{parse_expression, ParseError};
pub use types::*;
pub use validator::{is_valid_format, translate_glyphs, validate_expression, ValidationError};

#[cfg(test)]
mod tests;
