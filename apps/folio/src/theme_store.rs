//! Durable storage for the single persisted preference, key `"theme"`.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing::warn;

use crate::errors::StoreError;
use crate::models::Theme;

pub const THEME_KEY: &str = "theme";

pub trait ThemeStore: Send + Sync {
    /// The stored theme, or `None` when absent or unreadable.
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme) -> Result<(), StoreError>;
}

/// JSON key/value file, e.g. `{"theme": "light"}`. Writes go through a
/// temp file in the same directory and are renamed into place.
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), "Ignoring unreadable preferences: {e}");
                return None;
            }
        };
        let raw = entries.get(THEME_KEY)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("Ignoring stored theme: {e}");
                None
            }
        }
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        // Unreadable files are overwritten rather than blocking the write.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(THEME_KEY.to_string(), theme.as_str().to_string());

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        std::fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&serde_json::to_vec_pretty(&entries)?)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

/// In-memory store that counts writes.
#[derive(Default)]
pub struct MemoryThemeStore {
    value: Mutex<Option<Theme>>,
    writes: AtomicUsize,
}

impl MemoryThemeStore {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            value: Mutex::new(Some(theme)),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.value.lock().ok().and_then(|v| *v)
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        if let Ok(mut v) = self.value.lock() {
            *v = Some(theme);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl<T: ThemeStore + ?Sized> ThemeStore for std::sync::Arc<T> {
    fn load(&self) -> Option<Theme> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        (**self).save(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_absent_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let store = FileThemeStore::new(&path);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\": \"light\""));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"font": "large", "theme": "dark"}"#).unwrap();
        let store = FileThemeStore::new(&path);
        store.save(Theme::Light).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"font\": \"large\""));
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[test]
    fn test_file_store_garbage_value_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"theme": "sepia"}"#).unwrap();
        assert_eq!(FileThemeStore::new(&path).load(), None);

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(FileThemeStore::new(&path).load(), None);
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let store = MemoryThemeStore::default();
        store.save(Theme::Light).unwrap();
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.load(), Some(Theme::Dark));
    }
}
