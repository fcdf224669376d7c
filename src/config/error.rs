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

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration management.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Path could not be expanded or is not valid UTF-8.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),
    /// Refused to overwrite an existing config file.
    #[error("Config file already exists: {0}")]
    AlreadyExists(PathBuf),
    /// Config file is not valid TOML or has unknown keys.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Config could not be serialised.
    #[error("Failed to serialise config: {0}")]
    Serialise(#[from] toml::ser::Error),
    /// Config parsed but contains invalid values.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Config file watcher could not be started.
    #[error("Failed to watch config file: {0}")]
    WatchFailed(#[from] notify::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
