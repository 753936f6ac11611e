//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! [`AsBuiltDecoder`] turns source documents into [`AsBuiltRecord`]s, consulting
//! an injected [`RecordCache`] before doing any work.

use crate::cache::{CacheEntry, NoCache, RecordCache};
use crate::config::DecoderConfig;
use crate::ecu::Ecu;
use crate::record::{AsBuiltRecord, ModuleRecord};
use crate::source::{SourceDocument, SourceProvider};
use crate::types::{DecoderError, Result};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The main decoder struct - entry point for all decoding operations
#[derive(Clone)]
pub struct AsBuiltDecoder {
    config: DecoderConfig,
    cache: Arc<dyn RecordCache>,
}

impl AsBuiltDecoder {
    /// Create a decoder with the default configuration and no cache
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            config,
            cache: Arc::new(NoCache),
        }
    }

    /// Builder method: use a record cache
    pub fn with_cache(mut self, cache: Arc<dyn RecordCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one vehicle from an already parsed document
    ///
    /// A current cache entry for `vin` is returned as is, without looking at
    /// `document`.
    ///
    /// # Errors
    /// * `VinMismatch` if VIN checking is enabled and the document names another vehicle
    /// * `NoIdentifiers` / `NoConfiguration` if no known module carries identifiers / fields
    /// * `InvalidLabel`, `BlockSequenceError`, `FieldOffsetError` from block assembly
    ///
    /// # Example
    /// ```
    /// use asbuilt_decoder::{AsBuiltDecoder, SourceDocument};
    ///
    /// let mut document = SourceDocument::new();
    /// document.add_identifier(0x726, 0xF111, "LU5T-14B476-AA");
    /// document.add_field_hex(0x726, "01-01", "0102030405").unwrap();
    ///
    /// let record = AsBuiltDecoder::new().decode("1FTEST", &document).unwrap();
    /// assert_eq!(record.modules.len(), 1);
    /// ```
    pub fn decode(&self, vin: &str, document: &SourceDocument) -> Result<AsBuiltRecord> {
        if let Some(record) = self.cached(vin) {
            return Ok(record);
        }
        let record = self.decode_document(vin, document)?;
        self.store(vin, &record);
        Ok(record)
    }

    /// Decode one vehicle, fetching its document only on a cache miss
    pub fn decode_from<P>(&self, provider: &P, vin: &str) -> Result<AsBuiltRecord>
    where
        P: SourceProvider + ?Sized,
    {
        if let Some(record) = self.cached(vin) {
            return Ok(record);
        }
        let document = provider.fetch(vin)?;
        let record = self.decode_document(vin, &document)?;
        self.store(vin, &record);
        Ok(record)
    }

    /// Decode many vehicles in parallel
    ///
    /// Failures are reported per VIN; results come back in input order.
    pub fn decode_batch<P, S>(&self, provider: &P, vins: &[S]) -> Vec<(String, Result<AsBuiltRecord>)>
    where
        P: SourceProvider + ?Sized,
        S: AsRef<str> + Sync,
    {
        log::info!("Decoding {} vehicles", vins.len());

        let results: Vec<(String, Result<AsBuiltRecord>)> = vins
            .par_iter()
            .map(|vin| {
                let vin = vin.as_ref();
                let result = self.decode_from(provider, vin);
                if let Err(e) = &result {
                    log::warn!("Failed to decode {}: {}", vin, e);
                }
                (vin.to_string(), result)
            })
            .collect();

        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
        log::info!("Decoded {} vehicles ({} failed)", results.len() - failed, failed);
        results
    }

    /// Decode a document without touching the cache
    pub fn decode_document(&self, vin: &str, document: &SourceDocument) -> Result<AsBuiltRecord> {
        if self.config.verify_vin {
            if let Some(found) = &document.vin {
                if !found.eq_ignore_ascii_case(vin) {
                    return Err(DecoderError::VinMismatch {
                        requested: vin.to_string(),
                        found: found.clone(),
                    });
                }
            }
        }

        let identifiers = known_modules(&document.identifiers, "identifiers");
        if identifiers.is_empty() {
            return Err(DecoderError::NoIdentifiers(vin.to_string()));
        }
        let fields = known_modules(&document.fields, "configuration");
        if fields.is_empty() {
            return Err(DecoderError::NoConfiguration(vin.to_string()));
        }

        let assembler = self.config.assembler();
        let mut modules: BTreeMap<Ecu, ModuleRecord> = identifiers
            .into_iter()
            .map(|(ecu, ids)| (ecu, ModuleRecord::new(ids.clone(), None)))
            .collect();

        for (ecu, labelled) in fields {
            let blocks = assembler.assemble(labelled)?;
            log::debug!("{}: assembled {} blocks", ecu, blocks.len());
            match modules.get_mut(&ecu) {
                Some(module) => module.configuration = Some(blocks),
                None => log::warn!("Dropping configuration of {}: module has no identifiers", ecu),
            }
        }

        log::info!("Decoded {}: {} modules", vin, modules.len());
        Ok(AsBuiltRecord::new(vin, modules))
    }

    fn cached(&self, vin: &str) -> Option<AsBuiltRecord> {
        match self.cache.get(vin) {
            Ok(Some(entry)) if entry.is_current(&self.config) => {
                log::debug!("Cache hit for {}", vin);
                Some(entry.record)
            }
            Ok(Some(entry)) => {
                log::info!(
                    "Stale cache entry for {} (schema {}, {:?}), decoding again",
                    vin,
                    entry.schema_version,
                    entry.checksum_policy
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Cache read failed for {}: {}", vin, e);
                None
            }
        }
    }

    fn store(&self, vin: &str, record: &AsBuiltRecord) {
        let entry = CacheEntry::new(&self.config, record.clone());
        if let Err(e) = self.cache.put(vin, entry) {
            log::warn!("Cache write failed for {}: {}", vin, e);
        }
    }
}

impl Default for AsBuiltDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep entries whose address is a registered module
fn known_modules<'a, T>(by_address: &'a BTreeMap<u16, T>, what: &str) -> BTreeMap<Ecu, &'a T> {
    by_address
        .iter()
        .filter_map(|(address, value)| match Ecu::from_address(*address) {
            Some(ecu) => Some((ecu, value)),
            None => {
                log::warn!("Dropping {} for unknown module address 0x{:03X}", what, address);
                None
            }
        })
        .collect()
}
