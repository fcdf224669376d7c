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

//! Desktop Calculator
//!
//! A small GTK4 calculator built around a sandboxed arithmetic parser.
//!
//! # Features
//!
//! - **Safe Evaluation:** A dedicated grammar that can only express arithmetic
//! - **Two-Layer Validation:** Character whitelist, then grammar
//! - **Keyboard and Mouse:** Every button has a key binding
//! - **Themable:** Colours, window size and limits from a TOML config
//! - **Live Reload:** Config file changes restyle the running window
//!
//! # Architecture
//!
//! - **`core`:** Business logic (expression buffer, validator, parser, evaluator, formatter)
//! - **`config`:** Config file loading, validation and atomic saving
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Security
//!
//! - **Layer 1:** Character whitelist (core/validator.rs)
//! - **Layer 2:** Arithmetic-only grammar (core/parser.rs)
//! - **No ambient capabilities:** The expression tree has no names or calls
//! - **Memory-safe:** 100% safe Rust (no unsafe blocks)
//!
//! # Examples
//!
//! ## Evaluating an expression
//!
//! ```
//! use deskcalc::core::{evaluate_str, format_result};
//!
//! let value = evaluate_str("(2+3)*4").unwrap();
//! assert_eq!(format_result(value), "20");
//! ```
//!
//! ## Driving the expression buffer
//!
//! ```
//! use deskcalc::core::Calculator;
//!
//! let mut calc = Calculator::new();
//! for c in "1÷3".chars() {
//!     calc.append(c).unwrap();
//! }
//! assert_eq!(calc.calculate().unwrap(), "0.3333333333");
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use deskcalc::ui::App;
//!
//! let app = App::new(None)?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), String>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Action, CalcError, Calculator, Expr};
