//! Forscan field label addressing
//!
//! AsBuilt fields are labelled `"<block>-<field>"`, both components 1-based.
//! Every field occupies a fixed 5-byte stride within its block, so label
//! `"02-03"` addresses block 1, byte offset 10.
//!
//! Older vendor exports wrote the components in decimal, newer ones in
//! hexadecimal. The encoding is selected explicitly with [`SchemaVersion`].

use crate::types::{DecoderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bytes per field within a block
pub const FIELD_STRIDE: usize = 5;

/// Label schema revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Decimal label components
    V1,
    /// Hexadecimal label components
    V2,
}

impl SchemaVersion {
    /// Schema revision used by default and tagged on fresh cache entries
    pub const CURRENT: SchemaVersion = SchemaVersion::V2;

    /// Numeric tag stored alongside cached decodes
    pub fn number(&self) -> u32 {
        match self {
            SchemaVersion::V1 => 1,
            SchemaVersion::V2 => 2,
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(SchemaVersion::V1),
            2 => Some(SchemaVersion::V2),
            _ => None,
        }
    }

    fn radix(&self) -> u32 {
        match self {
            SchemaVersion::V1 => 10,
            SchemaVersion::V2 => 16,
        }
    }

    pub fn field_stride(&self) -> usize {
        FIELD_STRIDE
    }

    /// Resolve a field label to its block and byte offset
    pub fn resolve(&self, label: &str) -> Result<FieldAddress> {
        let (block_part, field_part) = label.split_once('-').ok_or_else(|| invalid(label, "missing '-' separator"))?;

        let block = self.parse_component(label, block_part, "block")?;
        let field = self.parse_component(label, field_part, "field")?;

        let byte_offset = (field - 1)
            .checked_mul(self.field_stride())
            .ok_or_else(|| invalid(label, "field component out of range"))?;

        Ok(FieldAddress {
            block_id: block - 1,
            byte_offset,
        })
    }

    fn parse_component(&self, label: &str, part: &str, what: &str) -> Result<usize> {
        let part = part.trim();
        if part.is_empty() {
            return Err(invalid(label, &format!("empty {} component", what)));
        }
        if !part.chars().all(|c| c.is_digit(self.radix())) {
            return Err(invalid(label, &format!("non-numeric {} component '{}'", what, part)));
        }
        // Vendor labels use at most a few digits per component
        let value = u16::from_str_radix(part, self.radix())
            .map(usize::from)
            .map_err(|e| invalid(label, &format!("bad {} component '{}': {}", what, part, e)))?;
        if value < 1 {
            return Err(invalid(label, &format!("{} component must be at least 1", what)));
        }
        Ok(value)
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::CURRENT
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

fn invalid(label: &str, reason: &str) -> DecoderError {
    DecoderError::InvalidLabel {
        label: label.to_string(),
        reason: reason.to_string(),
    }
}

/// Location of a field inside a module's block layout (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldAddress {
    pub block_id: usize,
    pub byte_offset: usize,
}

/// Resolve a label using the current schema revision
pub fn resolve(label: &str) -> Result<FieldAddress> {
    SchemaVersion::CURRENT.resolve(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(block_id: usize, byte_offset: usize) -> FieldAddress {
        FieldAddress {
            block_id,
            byte_offset,
        }
    }

    #[test]
    fn test_resolve_decimal_labels() {
        let v1 = SchemaVersion::V1;
        assert_eq!(v1.resolve("01-01").unwrap(), addr(0, 0));
        assert_eq!(v1.resolve("01-02").unwrap(), addr(0, 5));
        assert_eq!(v1.resolve("02-01").unwrap(), addr(1, 0));
        assert_eq!(v1.resolve("02-03").unwrap(), addr(1, 10));
        assert_eq!(v1.resolve("12-10").unwrap(), addr(11, 45));
    }

    #[test]
    fn test_resolve_hex_labels() {
        let v2 = SchemaVersion::V2;
        assert_eq!(v2.resolve("02-03").unwrap(), addr(1, 10));
        assert_eq!(v2.resolve("01-0A").unwrap(), addr(0, 45));
        assert_eq!(v2.resolve("10-01").unwrap(), addr(15, 0));
        assert_eq!(resolve("0a-0b").unwrap(), addr(9, 50));
    }

    #[test]
    fn test_decimal_rejects_hex_digits() {
        assert!(matches!(
            SchemaVersion::V1.resolve("01-0A"),
            Err(DecoderError::InvalidLabel { .. })
        ));
    }

    #[test]
    fn test_malformed_labels() {
        for label in ["", "0101", "01-", "-01", "00-01", "01-00", "xx-01", "01-01-01", "-1-01", "+1-01", "01-+1", "0 1-01"] {
            assert!(
                matches!(SchemaVersion::V1.resolve(label), Err(DecoderError::InvalidLabel { .. })),
                "label {:?} should be rejected",
                label
            );
        }
    }

    #[test]
    fn test_oversized_components() {
        for label in ["01-FFFFFFFFFFFFFFFF", "FFFFFFFFFFFFFFFF-01", "01-10000"] {
            assert!(
                matches!(SchemaVersion::V2.resolve(label), Err(DecoderError::InvalidLabel { .. })),
                "label {:?} should be rejected",
                label
            );
        }
        assert!(matches!(
            SchemaVersion::V1.resolve("01-99999999999999999999"),
            Err(DecoderError::InvalidLabel { .. })
        ));
        assert_eq!(SchemaVersion::V2.resolve("01-FFFF").unwrap(), addr(0, 0xFFFE * 5));
    }

    #[test]
    fn test_schema_version_numbers() {
        assert_eq!(SchemaVersion::CURRENT.number(), 2);
        assert_eq!(SchemaVersion::from_number(1), Some(SchemaVersion::V1));
        assert_eq!(SchemaVersion::from_number(3), None);
        assert_eq!(SchemaVersion::default(), SchemaVersion::V2);
    }
}
