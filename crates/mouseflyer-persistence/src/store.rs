use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use mouseflyer_core::CONFIG_SECTION;
use tracing::{debug, warn};

use crate::{PersistenceError, Result};

/// Flat string key/value settings, persisted as JSON under one section.
///
/// `bind_*` reads a value and writes the default back when the key is
/// missing or unparsable, so a saved file always lists every known key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl ConfigStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads `path`; a missing file yields an empty store bound to that path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file missing, starting from defaults");
                return Ok(Self {
                    path: Some(path),
                    entries: BTreeMap::new(),
                });
            }
            Err(source) => return Err(PersistenceError::Read { path, source }),
        };
        let mut sections: BTreeMap<String, BTreeMap<String, String>> =
            match serde_json::from_str(&raw) {
                Ok(sections) => sections,
                Err(source) => return Err(PersistenceError::Parse { path, source }),
            };
        let entries = sections.remove(CONFIG_SECTION).unwrap_or_default();
        debug!(path = %path.display(), keys = entries.len(), "loaded config");
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the store back to its file. In-memory stores are a no-op.
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        let mut sections = BTreeMap::new();
        sections.insert(CONFIG_SECTION, &self.entries);
        let encoded = serde_json::to_string_pretty(&sections)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PersistenceError::Write {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(path, encoded).map_err(|source| PersistenceError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), keys = self.entries.len(), "saved config");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.insert(key.into(), value.to_string());
    }

    pub fn bind_f32(&mut self, key: &str, default: f32) -> f32 {
        self.bind_parsed(key, default, |raw| {
            f32::from_str(raw).ok().filter(|v| v.is_finite())
        })
    }

    pub fn bind_bool(&mut self, key: &str, default: bool) -> bool {
        self.bind_parsed(key, default, |raw| match raw.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        })
    }

    pub fn bind_string(&mut self, key: &str, default: &str) -> String {
        self.bind_parsed(key, default.to_string(), |raw| Some(raw.to_string()))
    }

    /// Generic read-or-default with a custom parser; `render` is used to
    /// write the default back.
    pub fn bind_with<T>(
        &mut self,
        key: &str,
        default: T,
        parse: impl FnOnce(&str) -> Option<T>,
        render: impl FnOnce(&T) -> String,
    ) -> T {
        let Some(raw) = self.entries.get(key).cloned() else {
            self.entries.insert(key.to_string(), render(&default));
            return default;
        };
        if let Some(value) = parse(raw.trim()) {
            return value;
        }
        warn!(key, value = %raw, "invalid config value, restoring default");
        self.entries.insert(key.to_string(), render(&default));
        default
    }

    fn bind_parsed<T: ToString>(
        &mut self,
        key: &str,
        default: T,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> T {
        self.bind_with(key, default, parse, |value: &T| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_inserts_missing_defaults() {
        let mut store = ConfigStore::in_memory();
        assert_eq!(store.bind_f32("1-Deadzone", 0.01), 0.01);
        assert_eq!(store.get("1-Deadzone"), Some("0.01"));
    }

    #[test]
    fn bind_reads_existing_values() {
        let mut store = ConfigStore::in_memory();
        store.set("1-IsYAxisInverted", "False");
        assert!(!store.bind_bool("1-IsYAxisInverted", true));
    }

    #[test]
    fn invalid_values_fall_back_to_default() {
        let mut store = ConfigStore::in_memory();
        store.set("HUDOpacity", "lots");
        assert_eq!(store.bind_f32("HUDOpacity", 0.5), 0.5);
        assert_eq!(store.get("HUDOpacity"), Some("0.5"));

        store.set("HUDOpacity", "inf");
        assert_eq!(store.bind_f32("HUDOpacity", 0.5), 0.5);
    }

    #[test]
    fn in_memory_save_is_noop() {
        let mut store = ConfigStore::in_memory();
        store.set("a", 1);
        assert!(store.save().is_ok());
        assert!(store.path().is_none());
    }
}
