//! JSON file-based interaction store.
//!
//! Human-readable storage for likes and bookmarks using atomic file writes
//! (write-to-temp + rename) so a crash never leaves a truncated file behind.

use crate::domain::error::{FolioError, Result};
use crate::storage::backend::InteractionStore;
use crate::storage::models::{InteractionKind, Interactions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Format version for future migrations.
    version: u32,

    #[serde(flatten)]
    interactions: Interactions,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            interactions: Interactions::default(),
        }
    }
}

/// JSON file interaction store.
///
/// The whole dataset lives in memory and is rewritten on every change. When a
/// write fails the change stays in memory, marked dirty, and is retried on the
/// next change or when the store is dropped.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "liked": [1, 3],
///   "bookmarked": [2]
/// }
/// ```
pub struct JsonInteractionStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on creation.
    data: StorageData,

    /// Set when `data` differs from the file, i.e. after a failed save.
    dirty: bool,
}

impl JsonInteractionStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file yields an empty store; the file is only written on the
    /// first change.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not valid JSON in the expected shape
    /// - The file cannot be read
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening interaction store");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no interaction file yet, starting empty");
            StorageData::default()
        };

        tracing::debug!(
            liked = data.interactions.liked.len(),
            bookmarked = data.interactions.bookmarked.len(),
            "interaction store ready"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| FolioError::Storage(format!("failed to parse {}: {e}", path.display())))?;

        if data.version > FORMAT_VERSION {
            return Err(FolioError::Storage(format!(
                "interaction file version {} is newer than supported version {FORMAT_VERSION}",
                data.version
            )));
        }
        Ok(data)
    }

    /// Writes pending changes via temp file + rename.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temp write, or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "interactions saved");
        Ok(())
    }
}

impl InteractionStore for JsonInteractionStore {
    fn load(&self) -> Result<Interactions> {
        Ok(self.data.interactions.clone())
    }

    fn set_marked(&mut self, kind: InteractionKind, id: u64, marked: bool) -> Result<()> {
        let _span = tracing::debug_span!("json_set_marked", kind = ?kind, id, marked).entered();

        if self.data.interactions.contains(kind, id) == marked {
            tracing::debug!("interaction unchanged");
            return Ok(());
        }

        self.data.interactions.set(kind, id, marked);
        self.dirty = true;
        self.save_to_file()
    }
}

/// Retries a save that failed in [`InteractionStore::set_marked`].
impl Drop for JsonInteractionStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("retrying failed interaction save on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save interactions on drop");
            }
        }
    }
}

impl std::fmt::Debug for JsonInteractionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonInteractionStore")
            .field("file_path", &self.file_path)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_empty_and_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("interactions.json");

        let store = JsonInteractionStore::new(path.clone()).unwrap();
        assert_eq!(store.load().unwrap(), Interactions::default());
        assert!(!path.exists());
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn changes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.json");

        {
            let mut store = JsonInteractionStore::new(path.clone()).unwrap();
            store.set_marked(InteractionKind::Like, 1, true).unwrap();
            store.set_marked(InteractionKind::Bookmark, 2, true).unwrap();
            store.set_marked(InteractionKind::Like, 5, true).unwrap();
            store.set_marked(InteractionKind::Like, 5, false).unwrap();
        }

        let reopened = JsonInteractionStore::new(path).unwrap();
        let data = reopened.load().unwrap();
        assert_eq!(data.liked.into_iter().collect::<Vec<_>>(), [1]);
        assert_eq!(data.bookmarked.into_iter().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn file_is_versioned_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.json");

        let mut store = JsonInteractionStore::new(path.clone()).unwrap();
        store.set_marked(InteractionKind::Bookmark, 9, true).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["bookmarked"], serde_json::json!([9]));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn failed_save_is_retried_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.json");

        let mut store = JsonInteractionStore::new(path.clone()).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(store.set_marked(InteractionKind::Like, 3, true).is_err());
        assert!(store.load().unwrap().liked.contains(&3));

        std::fs::remove_dir(&path).unwrap();
        drop(store);

        let reopened = JsonInteractionStore::new(path).unwrap();
        assert!(reopened.load().unwrap().liked.contains(&3));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonInteractionStore::new(path).unwrap_err();
        assert!(matches!(err, FolioError::Storage(_)));
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.json");
        std::fs::write(&path, r#"{"version": 7, "liked": [], "bookmarked": []}"#).unwrap();

        assert!(JsonInteractionStore::new(path).is_err());
    }
}
