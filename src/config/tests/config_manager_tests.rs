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

use super::super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: Returns a config path inside a fresh temp directory.
fn temp_config_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("deskcalc").join("config.toml");
    (temp_dir, config_path)
}

#[test]
fn test_missing_config_loads_defaults() {
    let (_temp_dir, config_path) = temp_config_path();
    let manager = ConfigManager::new(config_path).unwrap();

    assert!(!manager.exists());
    assert_eq!(manager.load().unwrap(), AppConfig::default());
}

#[test]
fn test_default_theme_values() {
    let config = AppConfig::default();
    assert_eq!(config.theme.background, "#2C3E50");
    assert_eq!(config.theme.display, "#34495E");
    assert_eq!(config.window.width, 400);
    assert_eq!(config.window.height, 600);
    assert!(!config.window.resizable);
    assert_eq!(config.calculator.max_expression_length, 20);
}

#[test]
fn test_partial_config_fills_defaults() {
    let config = ConfigManager::parse(
        r##"
[theme]
background = "#000000"

[calculator]
max_expression_length = 32
"##,
    )
    .unwrap();

    assert_eq!(config.theme.background, "#000000");
    assert_eq!(config.theme.display, ThemeConfig::default().display);
    assert_eq!(config.window, WindowConfig::default());
    assert_eq!(config.calculator.max_expression_length, 32);
}

#[test]
fn test_unknown_keys_rejected() {
    let result = ConfigManager::parse("[theme]\nbackgrond = \"#000000\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let (_temp_dir, config_path) = temp_config_path();
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "[theme]\nbackground = \"blue\"\n").unwrap();

    let manager = ConfigManager::new(config_path).unwrap();
    match manager.load() {
        Err(ConfigError::ValidationFailed(msg)) => assert!(msg.contains("theme.background")),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let (_temp_dir, config_path) = temp_config_path();
    let manager = ConfigManager::new(config_path.clone()).unwrap();

    let mut config = AppConfig::default();
    config.window.title = "Calc".to_string();
    config.window.resizable = true;
    config.theme.button_hover = "#112233".to_string();

    manager.save(&config).unwrap();
    assert!(config_path.exists(), "Save should create parent directories");
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn test_save_refuses_invalid_config() {
    let (_temp_dir, config_path) = temp_config_path();
    let manager = ConfigManager::new(config_path.clone()).unwrap();

    let mut config = AppConfig::default();
    config.calculator.max_expression_length = 0;

    assert!(matches!(
        manager.save(&config),
        Err(ConfigError::ValidationFailed(_))
    ));
    assert!(!config_path.exists());
}

#[test]
fn test_init_writes_defaults_once() {
    let (_temp_dir, config_path) = temp_config_path();
    let manager = ConfigManager::new(config_path.clone()).unwrap();

    manager.init(false).unwrap();
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[theme]"));
    assert!(content.contains("max_expression_length = 20"));

    assert!(matches!(
        manager.init(false),
        Err(ConfigError::AlreadyExists(_))
    ));
    assert!(manager.init(true).is_ok());
}

#[test]
fn test_tilde_expansion() {
    let expanded = expand_path(&PathBuf::from("~/deskcalc.toml")).unwrap();
    assert!(!expanded.to_string_lossy().starts_with('~'));
    assert!(expanded.ends_with("deskcalc.toml"));

    let absolute = expand_path(&PathBuf::from("/tmp/deskcalc.toml")).unwrap();
    assert_eq!(absolute, PathBuf::from("/tmp/deskcalc.toml"));
}

#[test]
fn test_environment_variables_left_alone() {
    let path = PathBuf::from("$HOME/deskcalc.toml");
    assert_eq!(expand_path(&path).unwrap(), path);
}
