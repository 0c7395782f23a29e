//! FILENAME: app/src/prefs.rs
// PURPOSE: Persisted UI preferences (layout theme colors).
// CONTEXT: The surrounding layout remembers its theme across sessions.
// Preferences are explicit state passed into the view at construction
// time, with load/save going through a key-value persistence
// collaborator rather than ambient globals.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const BG_COLOR_KEY: &str = "bgColor";
const TEXT_COLOR_KEY: &str = "textColor";

/// Key-value persistence collaborator for UI preferences.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Theme colors of the admin layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPrefs {
    pub bg_color: String,
    pub text_color: String,
}

impl Default for UiPrefs {
    fn default() -> Self {
        UiPrefs {
            bg_color: "#f3f4f6".to_string(),
            text_color: "#111827".to_string(),
        }
    }
}

impl UiPrefs {
    /// Loads preferences, falling back to the default theme for any
    /// missing key.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let defaults = UiPrefs::default();
        UiPrefs {
            bg_color: store.get(BG_COLOR_KEY).unwrap_or(defaults.bg_color),
            text_color: store.get(TEXT_COLOR_KEY).unwrap_or(defaults.text_color),
        }
    }

    /// Writes both colors back into the store.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(BG_COLOR_KEY, &self.bg_color);
        store.set(TEXT_COLOR_KEY, &self.text_color);
    }
}

/// JSON-file-backed key-value store.
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`; a missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        Ok(JsonFileStore { path, entries })
    }

    /// Flushes the current entries to disk.
    pub fn persist(&self) -> io::Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
