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

//! src/config/types.rs
//!
//! Configuration data types
//!
//! Plain structured settings kept outside the calculator core:
//! - `ThemeConfig`: colours used by the GTK stylesheet
//! - `WindowConfig`: title, size and resizability
//! - `CalculatorConfig`: expression buffer limits
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change.

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_MAX_EXPRESSION_LENGTH;

/// Complete application configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub calculator: CalculatorConfig,
}

/// Colour theme, as `#RRGGBB` strings
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Window background
    pub background: String,
    /// Display field background
    pub display: String,
    /// Button background
    pub button_normal: String,
    /// Button background while hovered
    pub button_hover: String,
    /// Display and button text
    pub text_primary: String,
    /// Status line text
    pub text_secondary: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#2C3E50".to_string(),
            display: "#34495E".to_string(),
            button_normal: "#3498DB".to_string(),
            button_hover: "#2980B9".to_string(),
            text_primary: "#FFFFFF".to_string(),
            text_secondary: "#ECF0F1".to_string(),
        }
    }
}

impl ThemeConfig {
    /// All colours with their field names, for validation and CSS generation
    pub fn colours(&self) -> [(&'static str, &str); 6] {
        [
            ("background", &self.background),
            ("display", &self.display),
            ("button_normal", &self.button_normal),
            ("button_hover", &self.button_hover),
            ("text_primary", &self.text_primary),
            ("text_secondary", &self.text_secondary),
        ]
    }
}

/// Main window settings
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Advanced Calculator".to_string(),
            width: 400,
            height: 600,
            resizable: false,
        }
    }
}

/// Calculator behaviour settings
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum number of characters in the expression
    pub max_expression_length: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_expression_length: DEFAULT_MAX_EXPRESSION_LENGTH,
        }
    }
}
