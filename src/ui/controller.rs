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

//! MVC Controller - Mediates between Model (Calculator, AppConfig) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Translate button labels and typed characters into calculator actions
//! - Apply actions to the expression buffer
//! - Keep a one-line status message for errors that don't replace the display
//! - Reload config when the file changes
//!
//! # Architecture
//!
//! The Controller holds the Model but doesn't know about GTK4 widgets. This
//! keeps business logic separate from presentation and testable without a
//! display server.

use std::cell::RefCell;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{AppConfig, ConfigError, ConfigManager};
use crate::core::{Action, CalcError, Calculator};

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// Expression buffer (shared mutable state of the UI)
    calculator: RefCell<Calculator>,
    /// Effective configuration
    config: RefCell<AppConfig>,
    /// Where the config came from, if anywhere
    config_manager: Option<ConfigManager>,
    /// Message shown under the display, cleared by the next successful action
    status: RefCell<Option<String>>,
}

impl Controller {
    /// Creates a Controller from an in-memory config
    ///
    /// # Example
    ///
    /// ```no_run
    /// use deskcalc::{config::AppConfig, ui::Controller};
    ///
    /// let controller = Controller::new(AppConfig::default());
    /// controller.handle_label("2");
    /// controller.handle_label("+");
    /// controller.handle_label("2");
    /// controller.handle_label("=");
    /// assert_eq!(controller.display_text(), "4");
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self::build(config, None)
    }

    /// Creates a Controller whose config is loaded from (and reloaded from) a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but is invalid.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, ConfigError> {
        let manager = ConfigManager::new(config_path)?;
        let config = manager.load()?;

        Ok(Self::build(config, Some(manager)))
    }

    fn build(config: AppConfig, config_manager: Option<ConfigManager>) -> Self {
        let calculator = Calculator::with_max_length(config.calculator.max_expression_length);

        Self {
            calculator: RefCell::new(calculator),
            config: RefCell::new(config),
            config_manager,
            status: RefCell::new(None),
        }
    }

    /// Applies a single action to the calculator
    ///
    /// Errors never escape: evaluation errors are already reflected in the
    /// display by the calculator, a length-limit error becomes the status
    /// message.
    pub fn handle_action(&self, action: Action) {
        let result = self.calculator.borrow_mut().apply(action);

        let status = match result {
            Ok(()) => None,
            Err(err @ CalcError::LengthLimit { .. }) => Some(err.to_string()),
            Err(err) => {
                debug!("Action {:?} failed: {}", action, err);
                None
            }
        };

        *self.status.borrow_mut() = status;
    }

    /// Handles a keypad button click
    ///
    /// Returns false if the label isn't a known button.
    pub fn handle_label(&self, label: &str) -> bool {
        match Action::from_label(label) {
            Some(action) => {
                self.handle_action(action);
                true
            }
            None => false,
        }
    }

    /// Text for the main display
    pub fn display_text(&self) -> String {
        self.calculator.borrow().display()
    }

    /// Text for the status line (empty when there is nothing to report)
    pub fn status_text(&self) -> String {
        self.status.borrow().clone().unwrap_or_default()
    }

    /// Raw expression buffer
    pub fn expression(&self) -> String {
        self.calculator.borrow().expression().to_string()
    }

    /// Current value worth copying, if the display shows one
    pub fn copyable_value(&self) -> Option<String> {
        let calculator = self.calculator.borrow();

        if calculator.last_error().is_some() || calculator.is_empty() {
            None
        } else {
            Some(calculator.expression().to_string())
        }
    }

    /// Snapshot of the effective config
    pub fn config(&self) -> AppConfig {
        self.config.borrow().clone()
    }

    /// Path of the config file being used, if any
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_manager
            .as_ref()
            .map(|manager| manager.config_path().to_path_buf())
    }

    /// Re-reads the config file
    ///
    /// A changed length limit takes effect immediately. The current
    /// expression survives if it still fits, otherwise it is dropped.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Config changed
    /// * `Ok(false)` - No config file, or nothing changed
    /// * `Err(ConfigError)` - New file is invalid; the old config stays active
    pub fn reload_config(&self) -> Result<bool, ConfigError> {
        let Some(manager) = &self.config_manager else {
            return Ok(false);
        };

        let new_config = manager.load()?;
        if *self.config.borrow() == new_config {
            return Ok(false);
        }

        let new_max = new_config.calculator.max_expression_length;
        if new_max != self.calculator.borrow().max_length() {
            let mut calculator = Calculator::with_max_length(new_max);
            for c in self.expression().chars() {
                if calculator.append(c).is_err() {
                    calculator.clear();
                    break;
                }
            }
            *self.calculator.borrow_mut() = calculator;
            info!(max = new_max, "Expression length limit changed");
        }

        *self.config.borrow_mut() = new_config;
        Ok(true)
    }
}
