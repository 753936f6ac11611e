//! Decoded record cache
//!
//! Records are cached per VIN together with the schema tag and checksum policy
//! they were decoded with; the decoder ignores entries whose tag or policy
//! differ from its own configuration and overwrites them.
//!
//! Population is read-check-compute-write. Two threads may decode the same VIN
//! at once; both produce identical records, so the second write is harmless.

use crate::assembler::ChecksumPolicy;
use crate::config::DecoderConfig;
use crate::record::AsBuiltRecord;
use crate::source::vin_path;
use crate::types::{DecoderError, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// One cached decode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// `SchemaVersion::number()` of the decoder that produced the record
    pub schema_version: u32,
    pub checksum_policy: ChecksumPolicy,
    pub decoded_at: DateTime<Utc>,
    pub record: AsBuiltRecord,
}

impl CacheEntry {
    /// Tag a freshly decoded record with the configuration that produced it
    pub fn new(config: &DecoderConfig, record: AsBuiltRecord) -> Self {
        Self {
            schema_version: config.schema_version.number(),
            checksum_policy: config.checksum_policy,
            decoded_at: Utc::now(),
            record,
        }
    }

    /// Whether this entry was decoded under `config`
    pub fn is_current(&self, config: &DecoderConfig) -> bool {
        self.schema_version == config.schema_version.number()
            && self.checksum_policy == config.checksum_policy
    }
}

/// Keyed store of decoded records
pub trait RecordCache: Send + Sync {
    fn get(&self, vin: &str) -> Result<Option<CacheEntry>>;
    fn put(&self, vin: &str, entry: CacheEntry) -> Result<()>;
}

/// Caching disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl RecordCache for NoCache {
    fn get(&self, _vin: &str) -> Result<Option<CacheEntry>> {
        Ok(None)
    }

    fn put(&self, _vin: &str, _entry: CacheEntry) -> Result<()> {
        Ok(())
    }
}

/// Process-local cache
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl RecordCache for MemoryCache {
    fn get(&self, vin: &str) -> Result<Option<CacheEntry>> {
        Ok(self.entries.read().get(vin).cloned())
    }

    fn put(&self, vin: &str, entry: CacheEntry) -> Result<()> {
        self.entries.write().insert(vin.to_string(), entry);
        Ok(())
    }
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One JSON file per VIN under a directory
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Open a cache directory, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        log::info!("Using record cache directory: {:?}", dir);
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, vin: &str) -> Result<PathBuf> {
        vin_path(&self.dir, vin, "json")
    }
}

impl RecordCache for FileCache {
    fn get(&self, vin: &str) -> Result<Option<CacheEntry>> {
        let path = self.path_for(vin)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&text) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                // Unreadable entries are treated as misses and rewritten
                log::warn!("Discarding unreadable cache entry {:?}: {}", path, e);
                Ok(None)
            }
        }
    }

    fn put(&self, vin: &str, entry: CacheEntry) -> Result<()> {
        let path = self.path_for(vin)?;
        let json = serde_json::to_vec(&entry)?;

        let tmp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            vin,
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            DecoderError::CacheError(format!("Failed to store {:?}: {}", path, e))
        })?;

        log::debug!("Cached record for {} at {:?}", vin, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::SchemaVersion;
    use std::collections::BTreeMap;

    fn entry(config: &DecoderConfig) -> CacheEntry {
        CacheEntry::new(config, AsBuiltRecord::new("1FTEST", BTreeMap::new()))
    }

    #[test]
    fn test_entry_currency() {
        let config = DecoderConfig::new();
        let entry = entry(&config);
        assert_eq!(entry.schema_version, 2);
        assert!(entry.is_current(&config));
        assert!(!entry.is_current(&config.clone().with_schema_version(SchemaVersion::V1)));
        assert!(!entry.is_current(&config.with_checksum_policy(ChecksumPolicy::Retain)));
    }

    #[test]
    fn test_no_cache() {
        let cache = NoCache;
        cache.put("1FTEST", entry(&DecoderConfig::new())).unwrap();
        assert!(cache.get("1FTEST").unwrap().is_none());
    }

    #[test]
    fn test_memory_cache() {
        let cache = MemoryCache::new();
        assert!(cache.is_empty());
        let stored = entry(&DecoderConfig::new());
        cache.put("1FTEST", stored.clone()).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("1FTEST").unwrap(), Some(stored));
        assert!(cache.get("OTHER").unwrap().is_none());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_file_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("records")).unwrap();
        assert!(cache.get("1FTEST").unwrap().is_none());

        let stored = entry(&DecoderConfig::new());
        cache.put("1FTEST", stored.clone()).unwrap();
        assert!(cache.path_for("1FTEST").unwrap().is_file());
        assert_eq!(cache.get("1FTEST").unwrap(), Some(stored));

        // No temporary files left behind
        let files: Vec<_> = std::fs::read_dir(cache.dir()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_file_cache_rejects_path_vins() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("records")).unwrap();
        let stored = entry(&DecoderConfig::new());
        assert!(matches!(
            cache.put("../escaped", stored),
            Err(DecoderError::InvalidVin(_))
        ));
        assert!(matches!(cache.get("../escaped"), Err(DecoderError::InvalidVin(_))));
        assert!(!dir.path().join("escaped.json").exists());
    }

    #[test]
    fn test_file_cache_corrupt_entry_is_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path()).unwrap();
        std::fs::write(cache.path_for("1FTEST").unwrap(), "{not json").unwrap();
        assert!(cache.get("1FTEST").unwrap().is_none());
    }
}
