//! UI Components
//!
//! Reusable GTK4 widgets for the calculator.
//!
//! # Components
//!
//! - `display.rs` - Expression/result display with status line
//! - `keypad.rs` - Button grid

mod display;
mod keypad;

pub use display::Display;
pub use keypad::Keypad;
