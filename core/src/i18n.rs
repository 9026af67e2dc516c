// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Read-only table of UI strings, keyed by string id.
///
/// Loaded from a JSON object of `id -> text`. Nothing in the core depends
/// on it; conversions and default state come up before (and without) any
/// table, while text rendering waits on it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    /// Loads the table from `path`.
    ///
    /// A missing or malformed file is logged and yields the empty table;
    /// callers keep running with their own per-string fallbacks.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "string table unavailable");
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "string table unparseable");
                Self::default()
            }
        }
    }

    /// The text for `id`, if the table has one.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.strings.get(id).map(String::as_str)
    }

    /// The text for `id`, or `fallback` when the table has none.
    pub fn get_or<'a>(&'a self, id: &str, fallback: &'a str) -> &'a str {
        self.get(id).unwrap_or(fallback)
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_strings_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"today": "Today", "addEvent": "Add Event"}}"#).unwrap();

        let table = StringTable::load(file.path());
        assert_eq!(table.get("today"), Some("Today"));
        assert_eq!(table.get_or("cancel", "Cancel"), "Cancel");
    }

    #[test]
    fn missing_file_yields_empty_table() {
        let table = StringTable::load(Path::new("/nonexistent/strings.json"));
        assert!(table.is_empty());
    }

    #[test]
    fn malformed_file_yields_empty_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let table = StringTable::load(file.path());
        assert!(table.is_empty());
        assert_eq!(table.get("today"), None);
    }
}
