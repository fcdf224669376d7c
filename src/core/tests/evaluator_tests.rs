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

//! Evaluator tests
//!
//! Arithmetic semantics, error cases and the sandbox property.

use crate::core::{
    error::CalcError,
    evaluator::{check_result, evaluate, evaluate_str, EvalError},
    formatter::format_result,
    parser::ParseError,
    types::{BinaryOp, Expr},
};

#[test]
fn test_safe_eval_basic_operations() {
    assert_eq!(evaluate_str("2+2").unwrap(), 4.0);
    assert_eq!(evaluate_str("10-3").unwrap(), 7.0);
    assert_eq!(evaluate_str("4*5").unwrap(), 20.0);
    assert_eq!(evaluate_str("20/4").unwrap(), 5.0);
}

#[test]
fn test_safe_eval_complex_expression() {
    assert_eq!(evaluate_str("(5+3)*2").unwrap(), 16.0);
    assert_eq!(evaluate_str("2+3*4-6/2").unwrap(), 11.0);
    assert_eq!(evaluate_str("-(2+3)*-2").unwrap(), 10.0);
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        evaluate_str("5/0"),
        Err(CalcError::Evaluation(EvalError::DivisionByZero))
    );
    assert_eq!(
        evaluate_str("1/(2-2)"),
        Err(CalcError::Evaluation(EvalError::DivisionByZero))
    );
    assert_eq!(
        evaluate_str("0/0.0"),
        Err(CalcError::Evaluation(EvalError::DivisionByZero))
    );
}

#[test]
fn test_format_round_trip() {
    assert_eq!(format_result(evaluate_str("(2+3)*4").unwrap()), "20");
    assert_eq!(format_result(evaluate_str("1/3").unwrap()), "0.3333333333");
    assert_eq!(format_result(evaluate_str("2+2").unwrap()), "4");
    assert_eq!(format_result(evaluate_str(".1+.2").unwrap()), "0.3");
    assert_eq!(format_result(evaluate_str("-7/2").unwrap()), "-3.5");
}

#[test]
fn test_format_result_values() {
    assert_eq!(format_result(4.0), "4");
    assert_eq!(format_result(5.5), "5.5");
    assert_eq!(format_result(0.1 + 0.2), "0.3");
    assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
}

#[test]
fn test_evaluate_tree_directly() {
    let expr = Expr::binary(Expr::Number(9.0), BinaryOp::Div, Expr::negate(Expr::Number(3.0)));
    assert_eq!(evaluate(&expr), Ok(-3.0));
}

#[test]
fn test_non_finite_results_rejected() {
    assert!(matches!(check_result(f64::INFINITY), Err(CalcError::InvalidResult(_))));
    assert!(matches!(check_result(f64::NAN), Err(CalcError::InvalidResult(_))));
    assert_eq!(check_result(1.5), Ok(1.5));
}

#[test]
fn test_overflow_is_invalid_result() {
    let expr = Expr::binary(Expr::Number(1e200), BinaryOp::Mul, Expr::Number(1e200));
    let value = evaluate(&expr).unwrap();
    assert!(matches!(check_result(value), Err(CalcError::InvalidResult(_))));
}

#[test]
fn test_sandbox_rejects_names_without_validator() {
    // The evaluator must hold even when the whitelist is bypassed
    for attempt in [
        "__import__('os').system('ls')",
        "open('/etc/passwd')",
        "abs(-1)",
        "x+1",
        "pi",
        "2**8",
        "1e5",
        "[1,2]",
        "lambda: 1",
    ] {
        let result = evaluate_str(attempt);
        assert!(
            matches!(result, Err(CalcError::InvalidSyntax(_))),
            "{} should be a syntax error, got {:?}",
            attempt,
            result
        );
    }
}

#[test]
fn test_malformed_syntax_is_invalid_format() {
    for expr in ["1++2", "(1", "1.2.3", "2(", "+", "()"] {
        let err = evaluate_str(expr).unwrap_err();
        assert!(err.is_invalid_format(), "{} gave {:?}", expr, err);
    }
}

#[test]
fn test_empty_input_is_parse_error() {
    assert_eq!(evaluate_str(""), Err(CalcError::InvalidSyntax(ParseError::Empty)));
}

#[test]
fn test_decimal_as_final_token_keeps_fraction() {
    assert_eq!(evaluate_str("1.5").unwrap(), 1.5);
    assert_eq!(evaluate_str("2*1.5").unwrap(), 3.0);
    assert_eq!(format_result(evaluate_str("100000.1").unwrap()), "100000.1");
    assert_eq!(format_result(evaluate_str("10-0.25").unwrap()), "9.75");
}

#[test]
fn test_large_fractions_format_cleanly() {
    assert_eq!(format_result(evaluate_str("263861.09").unwrap()), "263861.09");
    assert_eq!(format_result(evaluate_str("(263861.09)").unwrap()), "263861.09");
    assert_eq!(format_result(evaluate_str("265840.84").unwrap()), "265840.84");
    assert_eq!(format_result(evaluate_str("123456.5*2").unwrap()), "246913");
    assert_eq!(format_result(evaluate_str("99999999.99+0.01").unwrap()), "100000000");
}
