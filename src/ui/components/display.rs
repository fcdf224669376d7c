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

//! Display component
//!
//! Right-aligned expression/result label with a small status line below it.

use gtk4::{prelude::*, Align, Box as GtkBox, Label, Orientation};

use crate::ui::style::{DISPLAY_CLASS, STATUS_CLASS};

/// Calculator display
pub struct Display {
    /// Root widget (vertical box)
    widget: GtkBox,
    /// Expression or result
    value_label: Label,
    /// Errors that don't replace the value (e.g. length limit)
    status_label: Label,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    /// Creates a display showing `0`
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 4);

        let value_label = Label::builder()
            .label("0")
            .xalign(1.0)
            .selectable(true)
            .hexpand(true)
            .build();
        value_label.add_css_class(DISPLAY_CLASS);

        let status_label = Label::builder()
            .label("")
            .xalign(1.0)
            .halign(Align::End)
            .build();
        status_label.add_css_class(STATUS_CLASS);

        widget.append(&value_label);
        widget.append(&status_label);

        Self {
            widget,
            value_label,
            status_label,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Shows new display and status text
    pub fn update(&self, value: &str, status: &str) {
        self.value_label.set_text(value);
        self.status_label.set_text(status);
    }
}
