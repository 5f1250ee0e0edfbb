//! The record store: the read-only post collection for a session.
//!
//! Records come either from a JSON file or from the bundled sample dataset.
//! Store order is preserved because stable sorting falls back to it for ties.

use crate::domain::error::{FolioError, Result};
use crate::domain::ContentRecord;
use std::collections::HashSet;
use std::path::Path;

/// Posts bundled with the binary, used when no data file is configured.
const SAMPLE_POSTS: &str = include_str!("../../data/posts.json");

/// An ordered, immutable collection of posts with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<ContentRecord>,
}

impl RecordStore {
    /// Builds a store, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::DuplicateRecord`] naming the first repeated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use folio::ContentRecord;
    /// use folio::storage::RecordStore;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let store = RecordStore::new(vec![
    ///     ContentRecord::new(1, "a", "x", day),
    ///     ContentRecord::new(2, "b", "x", day),
    /// ])?;
    /// assert_eq!(store.len(), 2);
    ///
    /// let dup = RecordStore::new(vec![
    ///     ContentRecord::new(1, "a", "x", day),
    ///     ContentRecord::new(1, "b", "x", day),
    /// ]);
    /// assert!(dup.is_err());
    /// # Ok::<(), folio::FolioError>(())
    /// ```
    pub fn new(records: Vec<ContentRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(FolioError::DuplicateRecord { id: dup.id });
        }
        Ok(Self { records })
    }

    /// Parses a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids repeat.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ContentRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Loads a JSON array of records from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or repeats ids.
    pub fn from_file(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("load_records", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_json(&contents)?;

        tracing::debug!(count = store.len(), "records loaded");
        Ok(store)
    }

    /// The bundled sample dataset: the six posts of the original blog listing.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled JSON is broken, which the test suite guards.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_POSTS)
    }

    /// All records in store order.
    #[must_use]
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    /// Number of records, drafts included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&ContentRecord> {
        crate::query::find(&self.records, id)
    }
}
