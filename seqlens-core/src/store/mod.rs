//! Passthrough storage for pairs of raw sequence text
//!
//! Rows hold two free-text fields, an auto-increment id and a creation
//! timestamp. Nothing is validated; fields come back exactly as stored.

use crate::SeqlensError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPair {
    pub id: u64,
    pub first: String,
    pub second: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    rows: Vec<StoredPair>,
}

/// JSON-file backed pair store
pub struct PairStore {
    path: PathBuf,
    data: StoreFile,
}

impl PairStore {
    /// Open the store at `path`, starting empty when the file does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SeqlensError> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            serde_json::from_reader(reader).map_err(|e| {
                SeqlensError::Storage(format!("Corrupt pair store {}: {}", path.display(), e))
            })?
        } else {
            debug!("Pair store {} does not exist yet", path.display());
            StoreFile {
                next_id: 1,
                rows: Vec::new(),
            }
        };

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store both fields verbatim and return the new row
    pub fn insert(&mut self, first: &str, second: &str) -> Result<StoredPair, SeqlensError> {
        let row = StoredPair {
            id: self.data.next_id.max(1),
            first: first.to_string(),
            second: second.to_string(),
            created_at: Utc::now(),
        };
        self.data.next_id = row.id + 1;
        self.data.rows.push(row.clone());
        self.flush()?;

        info!("Stored pair {} in {}", row.id, self.path.display());
        Ok(row)
    }

    /// All rows ordered by id ascending
    pub fn list(&self) -> Vec<StoredPair> {
        let mut rows = self.data.rows.clone();
        rows.sort_by_key(|row| row.id);
        rows
    }

    pub fn get(&self, id: u64) -> Result<&StoredPair, SeqlensError> {
        self.data
            .rows
            .iter()
            .find(|row| row.id == id)
            .ok_or_else(|| SeqlensError::NotFound(format!("pair {}", id)))
    }

    pub fn len(&self) -> usize {
        self.data.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.rows.is_empty()
    }

    fn flush(&self) -> Result<(), SeqlensError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, &self.data)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = PairStore::open(dir.path().join("pairs.json")).unwrap();
        assert!(store.is_empty());

        let a = store.insert("ACGT", "TTTT").unwrap();
        let b = store.insert("gattaca", "").unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_fields_round_trip_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairs.json");

        {
            let mut store = PairStore::open(&path).unwrap();
            store.insert("  acg t\n", "not even dna ✓").unwrap();
        }

        let store = PairStore::open(&path).unwrap();
        let rows = store.list();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first, "  acg t\n");
        assert_eq!(rows[0].second, "not even dna ✓");
    }

    #[test]
    fn test_ids_continue_after_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairs.json");

        PairStore::open(&path).unwrap().insert("A", "C").unwrap();
        let row = PairStore::open(&path).unwrap().insert("G", "T").unwrap();
        assert_eq!(row.id, 2);
    }

    #[test]
    fn test_get_missing_row() {
        let dir = TempDir::new().unwrap();
        let store = PairStore::open(dir.path().join("pairs.json")).unwrap();
        assert!(matches!(store.get(42), Err(SeqlensError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairs.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(PairStore::open(&path), Err(SeqlensError::Storage(_))));
    }
}
