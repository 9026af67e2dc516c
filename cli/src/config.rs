// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use taqvim_core::{APP_NAME, Config};

/// Reads the TOML configuration.
///
/// A missing file is not an error: the calendar works out of the box with
/// the platform state directory and built-in strings.
pub fn parse_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    let path = match path {
        Some(path) => path.to_owned(),
        None => match default_config_path() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
    let config = toml::from_str(&content).map_err(|e| format!("Failed to parse config: {e}"))?;
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    #[cfg(unix)]
    let dir = xdg::BaseDirectories::with_prefix(APP_NAME).get_config_home();
    #[cfg(windows)]
    let dir = dirs::config_dir().map(|dir| dir.join(APP_NAME));
    dir.map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = parse_config(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert!(config.state_dir.is_none());
        assert!(config.strings_path.is_none());
    }

    #[test]
    fn reads_paths_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "state_dir = \"/tmp/taqvim-state\"").unwrap();
        writeln!(file, "strings_path = \"/tmp/strings.json\"").unwrap();

        let config = parse_config(Some(file.path())).unwrap();
        assert_eq!(config.state_dir.as_deref(), Some(Path::new("/tmp/taqvim-state")));
        assert_eq!(
            config.strings_path.as_deref(),
            Some(Path::new("/tmp/strings.json"))
        );
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "state_dir = [not toml").unwrap();
        assert!(parse_config(Some(file.path())).is_err());
    }
}
