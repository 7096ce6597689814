//! # File-backed Entity Journal
//!
//! An append-only in-memory sequence of entities that can be serialized
//! to a pretty-printed JSON array, or replaced wholesale by
//! deserializing that file.
//!
//! ## Failure Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  save()  write fails        → StoreError::Io, entries untouched     │
//! │  load()  file missing       → StoreError::Io, entries untouched     │
//! │  load()  malformed JSON     → StoreError::Malformed, entries        │
//! │                               untouched                             │
//! │  load()  success            → entries replaced with file content    │
//! │                                                                     │
//! │  Callers treat every failure as a warning; nothing is fatal.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// An ordered entity log bound to one JSON file.
///
/// ## Usage
/// ```rust,no_run
/// use tally_core::inventory::InventoryItem;
/// use tally_store::journal::Journal;
///
/// let mut journal: Journal<InventoryItem> = Journal::new("inventory.json");
/// journal.add(InventoryItem::new(1, "Hammer", 10, chrono::Utc::now()));
/// journal.save().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Journal<T> {
    path: PathBuf,
    entries: Vec<T>,
}

impl<T> Journal<T> {
    /// Creates an empty journal bound to `path`. Nothing is read or
    /// written until `save` or `load` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Journal {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entity to the in-memory sequence.
    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// The in-memory sequence, in insertion order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Number of in-memory entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the journal holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The file this journal serializes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize> Journal<T> {
    /// Serializes the full sequence to the journal file as an indented
    /// JSON array, overwriting any previous content.
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| StoreError::io(&self.path, source))?;
        debug!(path = %self.path.display(), count = self.entries.len(), "journal saved");
        Ok(())
    }
}

impl<T: DeserializeOwned> Journal<T> {
    /// Replaces the in-memory sequence with the file's content.
    ///
    /// On any failure (missing file, unreadable file, malformed JSON)
    /// the current in-memory sequence is left untouched.
    pub fn load(&mut self) -> StoreResult<()> {
        let json =
            fs::read_to_string(&self.path).map_err(|source| StoreError::io(&self.path, source))?;
        let loaded: Vec<T> =
            serde_json::from_str(&json).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = loaded.len(), "journal loaded");
        self.entries = loaded;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tally_core::inventory::InventoryItem;

    fn sample_items() -> Vec<InventoryItem> {
        let added = Utc.with_ymd_and_hms(2026, 8, 30, 9, 0, 0).unwrap();
        vec![
            InventoryItem::new(1, "Hammer", 10, added),
            InventoryItem::new(2, "Screwdriver", 15, added),
            InventoryItem::new(3, "Pliers", 8, added),
        ]
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut journal = Journal::new(&path);
        for item in sample_items() {
            journal.add(item);
        }
        journal.save().unwrap();

        let mut reloaded: Journal<InventoryItem> = Journal::new(&path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.entries(), journal.entries());
    }

    #[test]
    fn test_saved_file_is_indented_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut journal = Journal::new(&path);
        journal.add(sample_items().remove(0));
        journal.save().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"Name\": \"Hammer\""));
    }

    #[test]
    fn test_load_missing_file_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut journal: Journal<InventoryItem> = Journal::new(dir.path().join("absent.json"));
        journal.add(sample_items().remove(0));

        let err = journal.load().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_load_malformed_file_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not an array").unwrap();

        let mut journal: Journal<InventoryItem> = Journal::new(&path);
        journal.add(sample_items().remove(0));

        let err = journal.load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_load_replaces_previous_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut on_disk = Journal::new(&path);
        on_disk.add(sample_items().remove(2));
        on_disk.save().unwrap();

        let mut journal = Journal::new(&path);
        journal.add(sample_items().remove(0));
        journal.add(sample_items().remove(1));
        journal.load().unwrap();

        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].name, "Pliers");
    }
}
