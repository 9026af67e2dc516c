// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::error::Error;

/// The name of the application.
pub const APP_NAME: &str = "taqvim";

/// Configuration for the calendar application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory for persisted state (events and preferences). Defaults
    /// to the platform state directory; events and preferences stay
    /// in-memory when neither is available.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Path to a UI string table; built-in texts apply when unset.
    #[serde(default)]
    pub strings_path: Option<PathBuf>,
}

impl Config {
    /// Expands configured paths and fills in the platform state directory.
    pub fn normalize(&mut self) -> Result<(), Error> {
        match &self.state_dir {
            Some(dir) => self.state_dir = Some(expand_path(dir)),
            None => match default_state_dir() {
                Some(dir) => self.state_dir = Some(dir.join(APP_NAME)),
                None => tracing::warn!("no state directory available, state will not persist"),
            },
        }
        if let Some(path) = &self.strings_path {
            self.strings_path = Some(expand_path(path));
        }
        Ok(())
    }
}

/// Expands a leading `~/` or `$HOME/` to the user's home directory.
fn expand_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_owned();
    }
    let Some(s) = path.to_str() else {
        return path.to_owned();
    };
    for prefix in ["~/", "$HOME/", "${HOME}/"] {
        if let Some(stripped) = s.strip_prefix(prefix) {
            match dirs::home_dir() {
                Some(home) => return home.join(stripped),
                None => tracing::warn!("home directory not found"),
            }
        }
    }
    path.to_owned()
}

fn default_state_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let dir = dirs::data_dir();
    dir
}
