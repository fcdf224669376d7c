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

//! Calculator buffer tests
//!
//! Covers the buffer mutators, the calculate pipeline and how errors
//! leave the buffer behind.

use crate::core::{
    calculator::{evaluate_expression, Calculator, DEFAULT_MAX_EXPRESSION_LENGTH},
    error::CalcError,
    evaluator::EvalError,
    types::Action,
};

/// Helper: Types every character of `input` into the calculator
fn type_str(calc: &mut Calculator, input: &str) {
    for c in input.chars() {
        calc.append(c).unwrap();
    }
}

#[test]
fn test_new_calculator_is_empty() {
    let calc = Calculator::new();
    assert!(calc.is_empty());
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.max_length(), DEFAULT_MAX_EXPRESSION_LENGTH);
}

#[test]
fn test_press_adds_character() {
    let mut calc = Calculator::new();
    calc.append('5').unwrap();
    assert_eq!(calc.expression(), "5");
    calc.append('+').unwrap();
    assert_eq!(calc.expression(), "5+");
}

#[test]
fn test_press_respects_max_length() {
    let mut calc = Calculator::new();
    type_str(&mut calc, &"1".repeat(20));

    assert_eq!(calc.append('0'), Err(CalcError::LengthLimit { max: 20 }));
    assert_eq!(calc.expression(), "1".repeat(20));
    assert!(calc.last_error().is_none());
}

#[test]
fn test_glyphs_count_as_one_character() {
    let mut calc = Calculator::with_max_length(3);
    type_str(&mut calc, "2×3");
    assert_eq!(calc.len(), 3);
    assert!(calc.append('1').is_err());
}

#[test]
fn test_clear_resets_state() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "123");
    calc.clear();
    assert_eq!(calc.expression(), "");
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_backspace_removes_last_character() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "12×");
    calc.backspace();
    assert_eq!(calc.expression(), "12");
}

#[test]
fn test_backspace_on_empty_is_noop() {
    let mut calc = Calculator::new();
    calc.backspace();
    assert!(calc.is_empty());
    assert!(calc.last_error().is_none());
    assert!(calc.apply(Action::Backspace).is_ok());
}

#[test]
fn test_simple_calculation_workflow() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "5+3");
    assert_eq!(calc.calculate().unwrap(), "8");
    assert_eq!(calc.expression(), "8");
    assert_eq!(calc.display(), "8");
}

#[test]
fn test_calculation_with_display_glyphs() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "6×7÷2");
    assert_eq!(calc.calculate().unwrap(), "21");
}

#[test]
fn test_consecutive_calculations() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "10/2");
    calc.calculate().unwrap();
    assert_eq!(calc.expression(), "5");

    // Second calculation continues from the result
    type_str(&mut calc, "+3");
    calc.calculate().unwrap();
    assert_eq!(calc.expression(), "8");
}

#[test]
fn test_calculate_empty_expression() {
    let mut calc = Calculator::new();
    assert_eq!(calc.calculate(), Err(CalcError::EmptyExpression));
    assert_eq!(calc.display(), "No expression");
}

#[test]
fn test_empty_after_result_shows_error_not_stale_result() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "2+2");
    calc.calculate().unwrap();
    calc.clear();

    assert!(calc.calculate().is_err());
    assert_ne!(calc.display(), "4");
}

#[test]
fn test_division_by_zero_resets_buffer() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "5/0");

    assert_eq!(
        calc.calculate(),
        Err(CalcError::Evaluation(EvalError::DivisionByZero))
    );
    assert!(calc.is_empty());
    assert_eq!(calc.display(), "Math error");
}

#[test]
fn test_invalid_syntax_resets_buffer() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "1++2");

    let err = calc.calculate().unwrap_err();
    assert!(err.is_invalid_format());
    assert!(calc.is_empty());
    assert_eq!(calc.display(), "Invalid input");
}

#[test]
fn test_key_press_after_error_starts_new_expression() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "(1");
    assert!(calc.calculate().is_err());

    calc.append('7').unwrap();
    assert_eq!(calc.expression(), "7");
    assert_eq!(calc.display(), "7");
    assert!(calc.last_error().is_none());
}

#[test]
fn test_error_messages_hide_internal_detail() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "1.2.3");
    let err = calc.calculate().unwrap_err();

    assert!(err.to_string().contains("position"));
    assert!(!calc.display().contains("position"));
}

#[test]
fn test_toggle_sign_negative() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "5");
    calc.toggle_sign().unwrap();
    assert_eq!(calc.expression(), "-5");
}

#[test]
fn test_toggle_sign_positive() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "-5");
    calc.toggle_sign().unwrap();
    assert_eq!(calc.expression(), "5");
}

#[test]
fn test_toggle_sign_on_empty_is_noop() {
    let mut calc = Calculator::new();
    calc.toggle_sign().unwrap();
    assert!(calc.is_empty());
}

#[test]
fn test_toggle_sign_respects_max_length() {
    let mut calc = Calculator::with_max_length(2);
    type_str(&mut calc, "12");
    assert_eq!(calc.toggle_sign(), Err(CalcError::LengthLimit { max: 2 }));
    assert_eq!(calc.expression(), "12");
}

#[test]
fn test_percentage_conversion() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "50");
    assert_eq!(calc.percentage().unwrap(), "0.5");
    assert_eq!(calc.expression(), "0.5");
}

#[test]
fn test_percentage_of_expression() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "20+30");
    assert_eq!(calc.percentage().unwrap(), "0.5");
}

#[test]
fn test_percentage_on_empty() {
    let mut calc = Calculator::new();
    assert_eq!(calc.percentage(), Err(CalcError::EmptyExpression));
}

#[test]
fn test_apply_dispatches_actions() {
    let mut calc = Calculator::new();
    for action in [
        Action::Append('('),
        Action::Append('2'),
        Action::Append('+'),
        Action::Append('3'),
        Action::Append(')'),
        Action::Append('×'),
        Action::Append('4'),
        Action::Calculate,
    ] {
        calc.apply(action).unwrap();
    }
    assert_eq!(calc.expression(), "20");

    calc.apply(Action::ToggleSign).unwrap();
    assert_eq!(calc.expression(), "-20");

    calc.apply(Action::Percentage).unwrap();
    assert_eq!(calc.expression(), "-0.2");

    calc.apply(Action::Clear).unwrap();
    assert!(calc.is_empty());
}

#[test]
fn test_application_stays_usable_after_errors() {
    let mut calc = Calculator::new();
    for bad in ["5/0", "1++", "(((", ".."] {
        type_str(&mut calc, bad);
        assert!(calc.calculate().is_err());
    }

    type_str(&mut calc, "1+1");
    assert_eq!(calc.calculate().unwrap(), "2");
}

#[test]
fn test_decimal_result_keeps_fraction() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "100000.1");
    assert_eq!(calc.calculate().unwrap(), "100000.1");

    calc.clear();
    type_str(&mut calc, "2×1.5");
    assert_eq!(calc.calculate().unwrap(), "3");
}

#[test]
fn test_large_fraction_has_no_noise() {
    let mut calc = Calculator::new();
    type_str(&mut calc, "263861.09");
    assert_eq!(calc.calculate().unwrap(), "263861.09");

    calc.clear();
    type_str(&mut calc, "(263861.09)");
    assert_eq!(calc.calculate().unwrap(), "263861.09");
}

#[test]
fn test_overlong_result_is_kept_and_blocks_appends() {
    let mut calc = Calculator::new();
    // Twenty 9s round to 1e20 as a float
    type_str(&mut calc, &"9".repeat(DEFAULT_MAX_EXPRESSION_LENGTH));

    assert_eq!(calc.calculate().unwrap(), "100000000000000000000");
    assert!(calc.len() > calc.max_length());
    assert_eq!(
        calc.append('1'),
        Err(CalcError::LengthLimit {
            max: DEFAULT_MAX_EXPRESSION_LENGTH
        })
    );
    assert_eq!(calc.expression(), "100000000000000000000");

    // `=` still works on the overlong buffer
    assert_eq!(calc.calculate().unwrap(), "100000000000000000000");

    calc.backspace();
    calc.backspace();
    assert!(calc.append('0').is_ok());
}

#[test]
fn test_shared_pipeline_matches_buffer() {
    for input in ["6×7÷2", "100000.1", "263861.09", "-(2+3)"] {
        let mut calc = Calculator::new();
        type_str(&mut calc, input);
        let from_buffer = calc.calculate().unwrap();
        let shared = crate::core::format_result(evaluate_expression(input).unwrap());
        assert_eq!(from_buffer, shared, "{}", input);
    }

    assert_eq!(evaluate_expression("  "), Err(CalcError::EmptyExpression));
    assert!(evaluate_expression("2x3").unwrap_err().is_invalid_format());
}
