//! UI module tests
//!
//! Everything here runs without a display server:
//! - Controller logic
//! - Stylesheet generation
