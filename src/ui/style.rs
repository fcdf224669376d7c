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

//! Stylesheet generation
//!
//! Turns a `ThemeConfig` into the GTK CSS applied to the window. Colours are
//! validated by the config layer before they get here, so they are inserted
//! verbatim.

use crate::config::ThemeConfig;

/// CSS class on the main window
pub const WINDOW_CLASS: &str = "deskcalc";
/// CSS class on the display label
pub const DISPLAY_CLASS: &str = "display";
/// CSS class on the status label
pub const STATUS_CLASS: &str = "status";
/// CSS class on keypad buttons
pub const KEY_CLASS: &str = "key";

const DISPLAY_FONT: (&str, u32) = ("Arial", 24);
const BUTTON_FONT: (&str, u32) = ("Arial", 18);

/// Builds the application stylesheet for a theme
pub fn build_css(theme: &ThemeConfig) -> String {
    format!(
        r#"
window.{window} {{
    background-color: {background};
}}

label.{display} {{
    background-color: {display_bg};
    color: {text_primary};
    font-family: "{display_font}";
    font-size: {display_size}pt;
    font-weight: bold;
    padding: 10px;
}}

label.{status} {{
    color: {text_secondary};
    font-size: 10pt;
}}

button.{key} {{
    background-image: none;
    background-color: {button_normal};
    color: {text_primary};
    font-family: "{button_font}";
    font-size: {button_size}pt;
    font-weight: bold;
    border: 1px solid {button_hover};
}}

button.{key}:hover {{
    background-color: {button_hover};
}}
"#,
        window = WINDOW_CLASS,
        display = DISPLAY_CLASS,
        status = STATUS_CLASS,
        key = KEY_CLASS,
        background = theme.background,
        display_bg = theme.display,
        text_primary = theme.text_primary,
        text_secondary = theme.text_secondary,
        button_normal = theme.button_normal,
        button_hover = theme.button_hover,
        display_font = DISPLAY_FONT.0,
        display_size = DISPLAY_FONT.1,
        button_font = BUTTON_FONT.0,
        button_size = BUTTON_FONT.1,
    )
}
