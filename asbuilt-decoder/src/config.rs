//! Decoder configuration types
//!
//! The decoder needs very little configuration: which label encoding the
//! source uses, whether field checksums are stripped before assembly, and
//! whether the document VIN must match the requested one.

use crate::assembler::{BlockAssembler, ChecksumPolicy};
use crate::label::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Label encoding; also the tag stored with cached records
    #[serde(default)]
    pub schema_version: SchemaVersion,

    /// Whether the trailing checksum byte of each field is dropped
    #[serde(default)]
    pub checksum_policy: ChecksumPolicy,

    /// Reject documents whose own VIN differs from the requested one
    #[serde(default = "default_true")]
    pub verify_vin: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::CURRENT,
            checksum_policy: ChecksumPolicy::default(),
            verify_vin: true,
        }
    }
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the label schema version
    pub fn with_schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = version;
        self
    }

    /// Builder method: set the checksum policy
    pub fn with_checksum_policy(mut self, policy: ChecksumPolicy) -> Self {
        self.checksum_policy = policy;
        self
    }

    /// Builder method: enable or disable the document VIN check
    pub fn with_vin_check(mut self, enabled: bool) -> Self {
        self.verify_vin = enabled;
        self
    }

    /// Block assembler matching this configuration
    pub fn assembler(&self) -> BlockAssembler {
        BlockAssembler::new(self.schema_version, self.checksum_policy)
    }
}
