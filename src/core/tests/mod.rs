//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Calculator buffer and pipeline tests
//! - Evaluator tests (including sandbox properties)
//! - Parser grammar tests
//! - Validator tests
//! - Type tests (Action, Expr display)

#[cfg(test)]
mod calculator_tests;
#[cfg(test)]
mod evaluator_tests;
#[cfg(test)]
mod validator_tests;
