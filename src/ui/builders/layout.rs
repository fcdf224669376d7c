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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::components::{Display, Keypad};
use gtk4::{prelude::*, Box as GtkBox, Orientation};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Display (value + status line) at top
/// - Keypad filling the rest
///
/// # Returns
///
/// Tuple of (main_vbox, display, keypad)
pub fn build_main_layout() -> (GtkBox, Rc<Display>, Rc<Keypad>) {
    let main_vbox = GtkBox::new(Orientation::Vertical, 10);
    main_vbox.set_margin_top(10);
    main_vbox.set_margin_bottom(10);
    main_vbox.set_margin_start(10);
    main_vbox.set_margin_end(10);

    let display = Rc::new(Display::new());
    main_vbox.append(display.widget());

    let keypad = Rc::new(Keypad::new());
    main_vbox.append(keypad.widget());

    (main_vbox, display, keypad)
}
