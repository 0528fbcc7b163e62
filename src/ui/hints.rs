use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::layout::DEFAULT_RATIOS;

pub type HintResult<T> = Result<T, HintError>;

/// Hint store errors
#[derive(Error, Debug)]
pub enum HintError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Advisory snapshot of the pane layout, mirrored under fixed keys.
///
/// The file is a best-effort restore hint, not authoritative state: a
/// missing or unreadable file never affects startup beyond falling back to
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutHints {
    pub layout: [u16; 3],
    pub collapsed: bool,
}

impl Default for LayoutHints {
    fn default() -> Self {
        Self {
            layout: DEFAULT_RATIOS,
            collapsed: false,
        }
    }
}

/// Reads and writes the layout hint file.
#[derive(Debug, Clone)]
pub struct HintStore {
    path: PathBuf,
}

impl HintStore {
    pub const FILE_NAME: &'static str = "layout.json";

    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort load. Absent or malformed files yield `None`.
    pub fn load(&self) -> Option<LayoutHints> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(hints) => Some(hints),
            Err(err) => {
                tracing::warn!(
                    "ignoring malformed layout hints at {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Mirror the current layout into the hint file.
    pub fn save(&self, hints: &LayoutHints) -> HintResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(hints)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hint_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = HintStore::new(dir.path());
        let hints = LayoutHints {
            layout: [15, 35, 50],
            collapsed: true,
        };

        store.save(&hints).unwrap();
        assert_eq!(store.load(), Some(hints));
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = HintStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_malformed_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = HintStore::new(dir.path());
        fs::write(store.path(), "not json at all").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("still");
        let store = HintStore::new(&nested);

        store.save(&LayoutHints::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_hint_file_uses_fixed_keys() {
        let dir = TempDir::new().unwrap();
        let store = HintStore::new(dir.path());
        store.save(&LayoutHints::default()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"layout\""));
        assert!(content.contains("\"collapsed\""));
    }
}
