//! Core types for the AsBuilt decoder library
//!
//! This module defines the error taxonomy and the small value types shared by
//! every stage of the pipeline: assembled blocks and decoded setting values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// One assembled configuration block: contiguous bytes, indexed by block id
pub type Block = Vec<u8>;

/// Errors that can occur during decoding
///
/// Leaf errors (`InvalidLabel`, `InvalidMask`, `OffsetOutOfRange`) and
/// structural errors (`BlockSequenceError`, `FieldOffsetError`) abort the
/// decode of a single VIN. Lookup misses are not errors, see [`DecodedValue`].
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("Invalid field label '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },

    #[error("Invalid bit mask 0x{0:X}")]
    InvalidMask(u64),

    #[error("Byte offset {offset} (+{length} bytes) out of range for {data_len} bytes of data")]
    OffsetOutOfRange {
        offset: usize,
        length: usize,
        data_len: usize,
    },

    #[error("Block sequence gap: expected block {expected}, found block {found}")]
    BlockSequenceError { expected: usize, found: usize },

    #[error("Field offset mismatch in block {block_id}: expected offset {expected}, found {found}")]
    FieldOffsetError {
        block_id: usize,
        expected: usize,
        found: usize,
    },

    #[error("No module identifiers found for VIN {0}")]
    NoIdentifiers(String),

    #[error("No configuration data found for VIN {0}")]
    NoConfiguration(String),

    #[error("Invalid VIN '{0}': only ASCII letters and digits are allowed")]
    InvalidVin(String),

    #[error("VIN mismatch: requested {requested}, document contains {found}")]
    VinMismatch { requested: String, found: String },

    #[error("Failed to parse AsBuilt XML: {0}")]
    XmlParseError(String),

    #[error("Invalid hex data in '{context}': {source}")]
    InvalidHex {
        context: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<quick_xml::Error> for DecoderError {
    fn from(err: quick_xml::Error) -> Self {
        DecoderError::XmlParseError(err.to_string())
    }
}

impl From<serde_json::Error> for DecoderError {
    fn from(err: serde_json::Error) -> Self {
        DecoderError::CacheError(err.to_string())
    }
}

/// Why a setting could not be read from a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Absence {
    /// The target module does not appear in the record at all
    ModuleNotPresent,
    /// The module is present but its part number belongs to another family
    PartFamilyMismatch,
    /// The module is present but carries no configuration blocks
    NoConfiguration,
    /// The module is present but has fewer blocks than the setting needs
    BlockNotPresent,
}

impl Absence {
    /// True when the whole module is considered absent for the setting
    pub fn is_module_level(&self) -> bool {
        matches!(self, Absence::ModuleNotPresent | Absence::PartFamilyMismatch)
    }
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absence::ModuleNotPresent => write!(f, "module not present"),
            Absence::PartFamilyMismatch => write!(f, "part family mismatch"),
            Absence::NoConfiguration => write!(f, "no configuration"),
            Absence::BlockNotPresent => write!(f, "block not present"),
        }
    }
}

/// Result of querying one setting against a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodedValue {
    /// Human-readable rendering of the extracted value
    Decoded(String),
    /// The setting has no data in this record
    Missing(Absence),
}

impl DecodedValue {
    /// Rendered value, if the setting was found
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::Decoded(value) => Some(value),
            DecodedValue::Missing(_) => None,
        }
    }

    /// Absence reason, if the setting was not found
    pub fn absence(&self) -> Option<Absence> {
        match self {
            DecodedValue::Decoded(_) => None,
            DecodedValue::Missing(reason) => Some(*reason),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DecodedValue::Missing(_))
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Decoded(value) => write!(f, "{}", value),
            DecodedValue::Missing(_) => write!(f, "Missing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_value_display() {
        assert_eq!(DecodedValue::Decoded("On".to_string()).to_string(), "On");
        assert_eq!(DecodedValue::Missing(Absence::ModuleNotPresent).to_string(), "Missing");
        assert_eq!(DecodedValue::Missing(Absence::BlockNotPresent).to_string(), "Missing");
    }

    #[test]
    fn test_absence_levels() {
        assert!(Absence::ModuleNotPresent.is_module_level());
        assert!(Absence::PartFamilyMismatch.is_module_level());
        assert!(!Absence::NoConfiguration.is_module_level());
        assert!(!Absence::BlockNotPresent.is_module_level());
    }

    #[test]
    fn test_error_messages() {
        let err = DecoderError::FieldOffsetError {
            block_id: 0,
            expected: 5,
            found: 10,
        };
        assert_eq!(
            err.to_string(),
            "Field offset mismatch in block 0: expected offset 5, found 10"
        );
        assert_eq!(DecoderError::InvalidMask(0).to_string(), "Invalid bit mask 0x0");
    }
}
