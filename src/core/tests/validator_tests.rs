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

//! Validator tests
//!
//! Whitelist checks and glyph translation.

use crate::core::validator::{is_valid_format, translate_glyphs, validate_expression, ValidationError};

#[test]
fn test_valid_expression_format() {
    for expr in ["5+3", "10-2", "4*5", "20/4", "1.5+2.5", "(5+3)*2", " 1 "] {
        assert!(is_valid_format(expr), "{} should be valid", expr);
    }
}

#[test]
fn test_invalid_expression_format() {
    for expr in ["abc", "5&3", "!10", "2^3", "1e5", "1\t+2", "5%"] {
        assert!(!is_valid_format(expr), "{} should be invalid", expr);
    }
}

#[test]
fn test_whitelist_is_not_a_grammar_check() {
    // Structure is the parser's job
    assert!(is_valid_format("1++"));
    assert!(is_valid_format("((1"));
}

#[test]
fn test_empty_string_is_invalid() {
    assert!(!is_valid_format(""));
    assert_eq!(validate_expression(""), Err(ValidationError::Empty));
}

#[test]
fn test_rejects_non_ascii_digits() {
    // Arabic-Indic digit five
    assert!(!is_valid_format("\u{0665}+1"));
}

#[test]
fn test_reports_first_invalid_character() {
    assert_eq!(
        validate_expression("12+ab"),
        Err(ValidationError::InvalidCharacter { ch: 'a', position: 3 })
    );
}

#[test]
fn test_rejects_code_injection_attempts() {
    for attempt in [
        "__import__('os')",
        "().__class__",
        "exec(1)",
        "[1]*9",
        "1;2",
    ] {
        assert!(validate_expression(attempt).is_err(), "{} should be rejected", attempt);
    }
}

#[test]
fn test_translate_glyphs() {
    assert_eq!(translate_glyphs("6×7÷2"), "6*7/2");
    assert_eq!(translate_glyphs("1+2"), "1+2");
}

#[test]
fn test_untranslated_glyphs_fail_validation() {
    assert!(!is_valid_format("6×7"));
    assert!(is_valid_format(&translate_glyphs("6×7")));
}
