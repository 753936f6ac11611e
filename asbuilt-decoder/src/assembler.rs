//! Block assembly
//!
//! Turns a module's labelled fields into dense, contiguous configuration
//! blocks. Every label is resolved to a block id and byte offset, then the
//! fields are laid out in order. Block ids must run 0..N-1 without gaps and
//! each block's fields must start at offset 0 and follow one another without
//! gaps or overlaps. Any violation means the label set does not match the
//! assumed vendor layout, and the whole module is rejected.

use crate::label::{FieldAddress, SchemaVersion};
use crate::types::{Block, DecoderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do with the trailing byte of each raw field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChecksumPolicy {
    /// Drop the last byte of every field (vendor checksum)
    #[default]
    Strip,
    /// Keep fields as supplied (checksum already removed upstream)
    Retain,
}

impl ChecksumPolicy {
    fn payload<'a>(&self, raw: &'a [u8]) -> &'a [u8] {
        match self {
            ChecksumPolicy::Strip => &raw[..raw.len().saturating_sub(1)],
            ChecksumPolicy::Retain => raw,
        }
    }
}

/// Assembles labelled fields into per-module blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockAssembler {
    schema_version: SchemaVersion,
    checksum_policy: ChecksumPolicy,
}

impl BlockAssembler {
    pub fn new(schema_version: SchemaVersion, checksum_policy: ChecksumPolicy) -> Self {
        Self {
            schema_version,
            checksum_policy,
        }
    }

    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    pub fn checksum_policy(&self) -> ChecksumPolicy {
        self.checksum_policy
    }

    /// Assemble one module's fields into blocks ordered by block id
    ///
    /// # Errors
    /// * `InvalidLabel` if any label cannot be resolved
    /// * `BlockSequenceError` if block ids are not dense from 0
    /// * `FieldOffsetError` if a block's fields leave a gap or overlap
    pub fn assemble<I, K, V>(&self, fields: I) -> Result<Vec<Block>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<[u8]>,
    {
        // block id -> [(offset, payload)]
        let mut layout: BTreeMap<usize, Vec<(usize, Vec<u8>)>> = BTreeMap::new();

        for (label, raw) in fields {
            let FieldAddress {
                block_id,
                byte_offset,
            } = self.schema_version.resolve(label.as_ref())?;
            let payload = self.checksum_policy.payload(raw.as_ref()).to_vec();
            layout.entry(block_id).or_default().push((byte_offset, payload));
        }

        let mut blocks: Vec<Block> = Vec::with_capacity(layout.len());

        for (block_id, mut entries) in layout {
            if block_id != blocks.len() {
                return Err(DecoderError::BlockSequenceError {
                    expected: blocks.len(),
                    found: block_id,
                });
            }

            entries.sort_by_key(|(offset, _)| *offset);

            let mut block = Block::new();
            for (offset, payload) in entries {
                if offset != block.len() {
                    return Err(DecoderError::FieldOffsetError {
                        block_id,
                        expected: block.len(),
                        found: offset,
                    });
                }
                block.extend_from_slice(&payload);
            }

            log::trace!("Assembled block {} ({} bytes)", block_id, block.len());
            blocks.push(block);
        }

        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn retain() -> BlockAssembler {
        BlockAssembler::new(SchemaVersion::V1, ChecksumPolicy::Retain)
    }

    #[test]
    fn test_assemble_contiguous_block() {
        let fields = HashMap::from([("01-01", vec![0u8; 5]), ("01-02", vec![0u8; 5])]);
        let blocks = retain().assemble(&fields).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], vec![0u8; 10]);
    }

    #[test]
    fn test_assemble_orders_fields_and_blocks() {
        let fields = vec![
            ("02-01", vec![0x20, 0x21, 0x22, 0x23, 0x24]),
            ("01-02", vec![0x15, 0x16, 0x17]),
            ("01-01", vec![0x10, 0x11, 0x12, 0x13, 0x14]),
        ];
        let blocks = retain().assemble(fields).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], vec![0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17]);
        assert_eq!(blocks[1], vec![0x20, 0x21, 0x22, 0x23, 0x24]);
    }

    #[test]
    fn test_field_gap_is_rejected() {
        let fields = vec![("01-01", vec![0u8; 5]), ("01-03", vec![0u8; 5])];
        match retain().assemble(fields) {
            Err(DecoderError::FieldOffsetError {
                block_id,
                expected,
                found,
            }) => {
                assert_eq!(block_id, 0);
                assert_eq!(expected, 5);
                assert_eq!(found, 10);
            }
            other => panic!("expected FieldOffsetError, got {:?}", other),
        }
    }

    #[test]
    fn test_block_must_start_at_offset_zero() {
        let fields = vec![("01-02", vec![0u8; 5])];
        assert!(matches!(
            retain().assemble(fields),
            Err(DecoderError::FieldOffsetError { expected: 0, found: 5, .. })
        ));
    }

    #[test]
    fn test_short_inner_field_is_rejected() {
        let fields = vec![("01-01", vec![0u8; 4]), ("01-02", vec![0u8; 5])];
        assert!(matches!(
            retain().assemble(fields),
            Err(DecoderError::FieldOffsetError { expected: 4, found: 5, .. })
        ));
    }

    #[test]
    fn test_duplicate_address_is_rejected() {
        // Both labels resolve to block 0, offset 0
        let fields = vec![("01-01", vec![0u8; 5]), ("1-1", vec![0u8; 5])];
        assert!(matches!(
            retain().assemble(fields),
            Err(DecoderError::FieldOffsetError { .. })
        ));
    }

    #[test]
    fn test_block_gap_is_rejected() {
        let fields = vec![("01-01", vec![0u8; 5]), ("03-01", vec![0u8; 5])];
        assert!(matches!(
            retain().assemble(fields),
            Err(DecoderError::BlockSequenceError { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_invalid_label_propagates() {
        let fields = vec![("0101", vec![0u8; 5])];
        assert!(matches!(
            retain().assemble(fields),
            Err(DecoderError::InvalidLabel { .. })
        ));
    }

    #[test]
    fn test_checksum_strip() {
        let assembler = BlockAssembler::new(SchemaVersion::V2, ChecksumPolicy::Strip);
        let fields = vec![
            ("01-01", vec![0x01, 0x02, 0x03, 0x04, 0x05, 0xAA]),
            ("01-02", vec![0x06, 0x07, 0xBB]),
        ];
        let blocks = assembler.assemble(fields).unwrap();
        assert_eq!(blocks, vec![vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]]);
    }

    #[test]
    fn test_empty_input() {
        let fields: Vec<(&str, Vec<u8>)> = Vec::new();
        assert!(retain().assemble(fields).unwrap().is_empty());
    }

    #[test]
    fn test_default_policy_strips() {
        assert_eq!(BlockAssembler::default().checksum_policy(), ChecksumPolicy::Strip);
        assert_eq!(BlockAssembler::default().schema_version(), SchemaVersion::CURRENT);
    }
}
