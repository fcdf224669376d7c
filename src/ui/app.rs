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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller for every calculation.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller (loads config)
//!   ├─ Builds main window from WindowConfig
//!   ├─ Applies ThemeConfig as CSS
//!   ├─ Connects keypad and keyboard to Controller
//!   └─ Watches the config file and restyles on change
//! ```

use gtk4::{gdk, prelude::*, Application, ApplicationWindow, CssProvider};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::{AppConfig, ThemeConfig};
use crate::ui::actions::{setup_clear_action, setup_copy_action, setup_quit_action};
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::file_watcher::FileWatcher;
use crate::ui::style::{build_css, WINDOW_CLASS};
use crate::ui::Controller;

/// How often pending config file events are checked
const WATCH_INTERVAL: Duration = Duration::from_millis(500);

/// GTK4 Application for the calculator
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to load and watch, or `None` for defaults
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Successfully initialised
    /// * `Err(String)` - Config file exists but is invalid
    ///
    /// # Example
    ///
    /// ```no_run
    /// use deskcalc::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(Some(PathBuf::from("~/.config/deskcalc/config.toml")))?;
    /// app.run(); // Blocks until window closes
    /// # Ok::<(), String>(())
    /// ```
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, String> {
        let app = Application::builder()
            .application_id("com.tidynest.deskcalc")
            .build();

        let controller = match config_path {
            Some(path) => Controller::with_config_path(path)
                .map_err(|e| format!("Failed to load config: {}", e))?,
            None => Controller::new(AppConfig::default()),
        };

        Ok(Self {
            app,
            controller: Rc::new(controller),
        })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application exits.
    pub fn run(self) {
        let controller = self.controller.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        // Command-line arguments were already handled by clap
        self.app.run_with_args::<&str>(&[]);
    }

    /// Applies a theme to the default display
    fn load_css(provider: &CssProvider, theme: &ThemeConfig) {
        provider.load_from_string(&build_css(theme));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => error!("Could not connect to a display, theme not applied"),
        }
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        let config = controller.config();

        let provider = CssProvider::new();
        Self::load_css(&provider, &config.theme);

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.window.title.as_str())
            .default_width(config.window.width)
            .default_height(config.window.height)
            .resizable(config.window.resizable)
            .build();
        window.add_css_class(WINDOW_CLASS);
        window.set_titlebar(Some(&build_header_bar()));

        let (main_vbox, display, keypad) = build_main_layout();
        window.set_child(Some(&main_vbox));

        wire_up_handlers(&window, controller.clone(), display.clone(), keypad);

        setup_quit_action(app);
        setup_copy_action(app, &window, controller.clone());
        setup_clear_action(app, controller.clone(), display.clone());

        Self::watch_config(&window, controller.clone(), provider);

        window.present();
        info!("Calculator initialised successfully");
    }

    /// Restyles the window whenever the config file changes
    fn watch_config(window: &ApplicationWindow, controller: Rc<Controller>, provider: CssProvider) {
        let Some(path) = controller.config_path() else {
            return;
        };

        let watcher = match FileWatcher::new(path.clone()) {
            Ok(watcher) => watcher,
            Err(e) => {
                warn!(path = %path.display(), "Config changes won't be picked up: {}", e);
                return;
            }
        };

        let window = window.clone();
        glib::timeout_add_local(WATCH_INTERVAL, move || {
            if watcher.check_for_changes() {
                match controller.reload_config() {
                    Ok(true) => {
                        let config = controller.config();
                        provider.load_from_string(&build_css(&config.theme));
                        window.set_title(Some(config.window.title.as_str()));
                        window.set_resizable(config.window.resizable);
                        info!("Config reloaded");
                    }
                    Ok(false) => {}
                    Err(e) => warn!("Ignoring invalid config change: {}", e),
                }
            }
            glib::ControlFlow::Continue
        });
    }
}
