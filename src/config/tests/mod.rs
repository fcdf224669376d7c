//! Config module tests
//!
//! - Config manager tests (load, save, init, path expansion)
//! - Config validator tests

#[cfg(test)]
mod config_manager_tests;
