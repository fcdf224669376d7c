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

//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Keypad clicks
//! - Keyboard input (digits, operators, Return, BackSpace, Escape)

use gtk4::{gdk, prelude::*, ApplicationWindow, EventControllerKey};
use std::rc::Rc;

use crate::core::Action;
use crate::ui::components::{Display, Keypad};
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    display: Rc<Display>,
    keypad: Rc<Keypad>,
) {
    // ============================================================================
    // Keypad clicks
    // ============================================================================
    let controller_for_keypad = controller.clone();
    let display_for_keypad = display.clone();

    keypad.connect_pressed(move |label| {
        if controller_for_keypad.handle_label(label) {
            refresh_display(&controller_for_keypad, &display_for_keypad);
        }
    });

    // ============================================================================
    // Keyboard input
    // ============================================================================
    let key_controller = EventControllerKey::new();

    key_controller.connect_key_pressed(move |_controller, key, _code, modifier| {
        // Leave shortcuts such as Ctrl+C and Ctrl+Q to the application
        if modifier.intersects(gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::ALT_MASK) {
            return glib::Propagation::Proceed;
        }

        match action_for_key(key) {
            Some(action) => {
                controller.handle_action(action);
                refresh_display(&controller, &display);
                glib::Propagation::Stop
            }
            None => glib::Propagation::Proceed,
        }
    });

    window.add_controller(key_controller);
}

/// Copies the controller's state into the display widgets
pub fn refresh_display(controller: &Controller, display: &Display) {
    display.update(&controller.display_text(), &controller.status_text());
}

/// Maps a key press to a calculator action
///
/// Named keys are handled first. Everything else goes through its
/// character, so keypad keys (`KP_Add`, `KP_7`, ...) behave like their
/// main-keyboard counterparts.
pub fn action_for_key(key: gdk::Key) -> Option<Action> {
    match key {
        gdk::Key::Return | gdk::Key::KP_Enter => Some(Action::Calculate),
        gdk::Key::BackSpace => Some(Action::Backspace),
        gdk::Key::Escape | gdk::Key::Delete => Some(Action::Clear),
        _ => key.to_unicode().and_then(Action::from_key_char),
    }
}
