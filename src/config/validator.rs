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

//! Configuration validation
//!
//! Checks a parsed `AppConfig` before it is used or written to disk.
//!
//! # Validation Levels
//!
//! - **Error**: the config cannot be used (malformed colour, zero-sized
//!   window, unusable expression length)
//! - **Warning**: the config works but probably isn't what the user wants
//!   (text colour identical to its background, tiny window)
//!
//! # Example
//!
//! ```no_run
//! use deskcalc::config::{validator::ConfigValidator, AppConfig};
//!
//! let report = ConfigValidator::new().validate_config(&AppConfig::default());
//!
//! if report.has_errors() {
//!     println!("Config rejected");
//! }
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::config::types::AppConfig;
use crate::core::parser::MAX_PARSE_LENGTH;

lazy_static! {
    static ref HEX_COLOUR: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$")
        .expect("hex colour pattern should be valid regex");
}

/// Smallest window that still fits the keypad comfortably
const MIN_COMFORTABLE_WIDTH: i32 = 240;
const MIN_COMFORTABLE_HEIGHT: i32 = 320;

/// Largest buffer the parser can always accept (`×`/`÷` take two bytes)
pub const MAX_EXPRESSION_LENGTH_LIMIT: usize = MAX_PARSE_LENGTH / 2;

/// Validation severity level
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationLevel {
    /// Config cannot be used
    Error,
    /// Config works but looks wrong
    Warning,
}

/// A single validation issue found in the config
#[derive(Clone, Debug)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `theme.background`
    pub field: String,
    /// Severity level (Error/Warning)
    pub validation_level: ValidationLevel,
    /// Human-readable description of the issue
    pub message: String,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

/// Complete validation report for a config
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// All validation issues (errors + warnings)
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates a new empty validation report
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Returns true if the report contains any Error-level issues
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.validation_level == ValidationLevel::Error)
    }

    /// Iterates over Error-level issues
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.validation_level == ValidationLevel::Error)
    }

    /// Iterates over Warning-level issues
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.validation_level == ValidationLevel::Warning)
    }

    /// Adds an Error-level issue to the report
    pub fn add_error(&mut self, field: &str, message: String, suggestion: Option<String>) {
        self.issues.push(ValidationIssue {
            field: field.to_string(),
            validation_level: ValidationLevel::Error,
            message,
            suggestion,
        });
    }

    /// Adds a Warning-level issue to the report
    pub fn add_warning(&mut self, field: &str, message: String, suggestion: Option<String>) {
        self.issues.push(ValidationIssue {
            field: field.to_string(),
            validation_level: ValidationLevel::Warning,
            message,
            suggestion,
        });
    }

    /// Joins all Error-level issues into one line
    pub fn error_summary(&self) -> String {
        self.errors()
            .map(|issue| issue.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Config validator
#[derive(Debug, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates every section of the config
    pub fn validate_config(&self, config: &AppConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_theme(config, &mut report);
        self.check_window(config, &mut report);
        self.check_calculator(config, &mut report);

        report
    }

    fn check_theme(&self, config: &AppConfig, report: &mut ValidationReport) {
        for (name, value) in config.theme.colours() {
            if !is_hex_colour(value) {
                report.add_error(
                    &format!("theme.{}", name),
                    format!("'{}' is not a colour", value),
                    Some("use #RRGGBB, e.g. #2C3E50".to_string()),
                );
            }
        }

        let theme = &config.theme;
        let pairs = [
            ("theme.text_primary", &theme.text_primary, &theme.display),
            ("theme.text_primary", &theme.text_primary, &theme.button_normal),
            ("theme.text_secondary", &theme.text_secondary, &theme.background),
        ];
        for (field, text, background) in pairs {
            if text.eq_ignore_ascii_case(background) {
                report.add_warning(
                    field,
                    format!("text colour {} is the same as its background", text),
                    None,
                );
            }
        }
    }

    fn check_window(&self, config: &AppConfig, report: &mut ValidationReport) {
        let window = &config.window;

        if window.width <= 0 || window.height <= 0 {
            report.add_error(
                "window",
                format!("size {}x{} must be positive", window.width, window.height),
                None,
            );
        } else if window.width < MIN_COMFORTABLE_WIDTH || window.height < MIN_COMFORTABLE_HEIGHT {
            report.add_warning(
                "window",
                format!("size {}x{} may clip the keypad", window.width, window.height),
                Some(format!(
                    "use at least {}x{}",
                    MIN_COMFORTABLE_WIDTH, MIN_COMFORTABLE_HEIGHT
                )),
            );
        }

        if window.title.trim().is_empty() {
            report.add_warning("window.title", "title is empty".to_string(), None);
        }
    }

    fn check_calculator(&self, config: &AppConfig, report: &mut ValidationReport) {
        let max = config.calculator.max_expression_length;

        if max == 0 || max > MAX_EXPRESSION_LENGTH_LIMIT {
            report.add_error(
                "calculator.max_expression_length",
                format!("{} is out of range", max),
                Some(format!(
                    "use a value between 1 and {}",
                    MAX_EXPRESSION_LENGTH_LIMIT
                )),
            );
        }
    }
}

/// Returns true for `#RRGGBB` strings
pub fn is_hex_colour(value: &str) -> bool {
    HEX_COLOUR.is_match(value)
}
