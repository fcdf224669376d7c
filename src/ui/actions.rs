//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, copy, clear)
//! and their setup functions

use gtk4::{gio, prelude::*, Application, ApplicationWindow};
use std::rc::Rc;
use tracing::{debug, info};

use crate::core::Action;
use crate::ui::builders::refresh_display;
use crate::ui::components::Display;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}

/// Sets up the copy action
///
/// Copies the value currently shown (not an error message) to the clipboard.
pub fn setup_copy_action(app: &Application, window: &ApplicationWindow, controller: Rc<Controller>) {
    let copy_action = gio::SimpleAction::new("copy", None);
    let window_for_copy = window.clone();

    copy_action.connect_activate(move |_, _| match controller.copyable_value() {
        Some(value) => {
            window_for_copy.clipboard().set_text(&value);
            info!(value = %value, "Copied to clipboard");
        }
        None => debug!("Nothing to copy"),
    });

    app.add_action(&copy_action);
    app.set_accels_for_action("app.copy", &["<Control>c"]);
}

/// Sets up the clear action
///
/// Same as the `C` button, reachable from the menu.
pub fn setup_clear_action(app: &Application, controller: Rc<Controller>, display: Rc<Display>) {
    let clear_action = gio::SimpleAction::new("clear", None);

    clear_action.connect_activate(move |_, _| {
        controller.handle_action(Action::Clear);
        refresh_display(&controller, &display);
    });

    app.add_action(&clear_action);
}
