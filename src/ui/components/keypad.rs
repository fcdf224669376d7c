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

//! Keypad component
//!
//! A homogeneous grid of buttons built from `KEYPAD_LAYOUT`.

use gtk4::{prelude::*, Button, Grid};
use std::rc::Rc;

use crate::core::KEYPAD_LAYOUT;
use crate::ui::style::KEY_CLASS;

/// Grid of calculator buttons
pub struct Keypad {
    /// Root widget (grid)
    widget: Grid,
    /// Buttons with their labels, in layout order
    buttons: Vec<(String, Button)>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the keypad
    ///
    /// Buttons do nothing until `connect_pressed` is called.
    pub fn new() -> Self {
        let widget = Grid::builder()
            .row_spacing(5)
            .column_spacing(5)
            .row_homogeneous(true)
            .column_homogeneous(true)
            .vexpand(true)
            .hexpand(true)
            .build();

        let mut buttons = Vec::new();

        for (row, labels) in KEYPAD_LAYOUT.iter().enumerate() {
            for (col, label) in labels.iter().enumerate() {
                let button = Button::with_label(label);
                button.add_css_class(KEY_CLASS);
                button.set_focusable(false);

                widget.attach(&button, col as i32, row as i32, 1, 1);
                buttons.push((label.to_string(), button));
            }
        }

        Self { widget, buttons }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Grid {
        &self.widget
    }

    /// Calls `on_pressed` with the button's label on every click
    pub fn connect_pressed<F>(&self, on_pressed: F)
    where
        F: Fn(&str) + 'static,
    {
        let on_pressed = Rc::new(on_pressed);

        for (label, button) in &self.buttons {
            let label = label.clone();
            let on_pressed = on_pressed.clone();

            button.connect_clicked(move |_| on_pressed(&label));
        }
    }
}
