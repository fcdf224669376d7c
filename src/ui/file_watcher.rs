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

//! File system watcher for live config file monitoring
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate.
//! Zero CPU overhead when file unchanged.
//!
//! The parent directory is watched rather than the file itself: editors and
//! `config init` replace the file by rename, which would orphan a watch on
//! the old inode.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

use crate::config::ConfigError;

/// Watches the config file for modifications
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl FileWatcher {
    /// Starts watching `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WatchFailed` if the directory can't be watched
    /// (for example, it does not exist).
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        // Events carry absolute paths, so compare against an absolute one
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
        .canonicalize()?;
        let path = match path.file_name() {
            Some(name) => directory.join(name),
            None => path,
        };

        watcher.watch(&directory, RecursiveMode::NonRecursive)?;

        Ok(FileWatcher {
            _watcher: watcher,
            rx,
            path,
        })
    }

    /// Checks for file modification events (non-blocking)
    ///
    /// Drains every pending event and reports whether any touched the file.
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            if let Ok(event) = event_result {
                if self.is_relevant(&event) {
                    changed = true;
                }
            }
        }

        changed
    }

    fn is_relevant(&self, event: &Event) -> bool {
        matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_)
        ) && event.paths.iter().any(|p| p == &self.path)
    }
}
