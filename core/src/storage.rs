// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// Names of the persisted blobs, one per key.
pub mod keys {
    pub const EVENTS: &str = "events";
    pub const CALENDAR_TYPE: &str = "calendarType";
    pub const SHOW_SECONDARY: &str = "showSecondaryCalendar";
    pub const LANG: &str = "lang";
    pub const THEME: &str = "theme";
}

/// Synchronous key-value persistence.
///
/// Writes are whole-value: callers never observe a partially written blob.
pub trait Storage: fmt::Debug {
    /// The stored value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Shared handle to a storage backend.
///
/// The core runs single-threaded, so plain reference counting with
/// interior mutability is enough; no locking is involved.
pub type SharedStorage = Rc<RefCell<dyn Storage>>;

/// Storage keeping one file per key under a state directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn shared(self) -> SharedStorage {
        Rc::new(RefCell::new(self))
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, %err, "failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.dir.join(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.dir.join(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// Storage that lives only as long as the process.
///
/// Used when no state directory is configured, and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedStorage {
        Rc::new(RefCell::new(self))
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("state")).unwrap();

        assert_eq!(store.get(keys::THEME), None);
        store.set(keys::THEME, "dark").unwrap();
        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));

        store.set(keys::THEME, "light").unwrap();
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));
    }

    #[test]
    fn file_store_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set(keys::LANG, "fa").unwrap();
        store.remove(keys::LANG).unwrap();
        assert_eq!(store.get(keys::LANG), None);
        store.remove(keys::LANG).unwrap();
    }

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        store.set(keys::CALENDAR_TYPE, "gregorian").unwrap();
        assert_eq!(store.get(keys::CALENDAR_TYPE).as_deref(), Some("gregorian"));
        store.remove(keys::CALENDAR_TYPE).unwrap();
        assert_eq!(store.get(keys::CALENDAR_TYPE), None);
    }

    #[test]
    fn shared_handles_see_the_same_values() {
        let store = MemoryStore::new().shared();
        let other = store.clone();
        store.borrow_mut().set(keys::LANG, "en").unwrap();
        assert_eq!(other.borrow().get(keys::LANG).as_deref(), Some("en"));
    }
}
