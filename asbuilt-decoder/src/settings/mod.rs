//! Vehicle setting schema
//!
//! A [`VehicleSetting`] names one configuration value: which module holds it,
//! where it sits (block, byte offset, bit mask) and how the extracted integer
//! is rendered for display.

pub mod catalog;

use crate::bitfield;
use crate::ecu::ModuleKey;
use crate::types::{Block, DecoderError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Renders a raw value as a string
pub type TransformFn = fn(u64) -> String;

/// How an extracted integer becomes display text
#[derive(Clone)]
pub enum ValueInterpretation {
    /// Raw value as hex (`0x1B`)
    Identity,
    /// Value table; misses render as `Unknown (0xNN)`
    Lookup(BTreeMap<u64, String>),
    /// Pure conversion, e.g. scaling to physical units
    Transform(TransformFn),
}

impl ValueInterpretation {
    pub fn decode(&self, raw: u64) -> String {
        match self {
            ValueInterpretation::Identity => format_hex(raw),
            ValueInterpretation::Lookup(table) => match table.get(&raw) {
                Some(text) => text.clone(),
                None => format!("Unknown ({})", format_hex(raw)),
            },
            ValueInterpretation::Transform(transform) => transform(raw),
        }
    }
}

impl fmt::Debug for ValueInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueInterpretation::Identity => write!(f, "Identity"),
            ValueInterpretation::Lookup(table) => f.debug_tuple("Lookup").field(table).finish(),
            ValueInterpretation::Transform(_) => write!(f, "Transform(..)"),
        }
    }
}

fn format_hex(raw: u64) -> String {
    format!("0x{:02X}", raw)
}

/// One named configuration value
#[derive(Debug, Clone)]
pub struct VehicleSetting {
    /// Display name
    pub comment: String,
    /// Module (and optionally part family) holding the value
    pub target: ModuleKey,
    /// Block index within the module
    pub block_id: usize,
    /// Byte offset within the block
    pub byte_offset: usize,
    /// Bit mask selecting the value (never zero)
    pub bit_mask: u64,
    pub interpretation: ValueInterpretation,
}

impl VehicleSetting {
    /// Full-byte setting rendered as raw hex
    pub fn new(comment: impl Into<String>, target: impl Into<ModuleKey>, block_id: usize, byte_offset: usize) -> Self {
        Self {
            comment: comment.into(),
            target: target.into(),
            block_id,
            byte_offset,
            bit_mask: 0xFF,
            interpretation: ValueInterpretation::Identity,
        }
    }

    /// Builder method: set the bit mask
    ///
    /// # Panics
    /// If `bit_mask` is zero. Settings are declared statically, so a zero mask
    /// is a catalog bug; settings built field by field are checked by
    /// [`VehicleSetting::validate`] and by every query.
    pub fn with_mask(mut self, bit_mask: u64) -> Self {
        assert!(bit_mask != 0, "setting '{}' declared with a zero bit mask", self.comment);
        self.bit_mask = bit_mask;
        self
    }

    /// Builder method: render through a value table
    pub fn with_values<S: Into<String> + Clone>(mut self, values: &[(u64, S)]) -> Self {
        let table = values
            .iter()
            .map(|(raw, text)| (*raw, text.clone().into()))
            .collect();
        self.interpretation = ValueInterpretation::Lookup(table);
        self
    }

    /// Builder method: render through a conversion function
    pub fn with_transform(mut self, transform: TransformFn) -> Self {
        self.interpretation = ValueInterpretation::Transform(transform);
        self
    }

    /// Check the schema invariants
    pub fn validate(&self) -> Result<()> {
        if self.bit_mask == 0 {
            return Err(DecoderError::InvalidMask(self.bit_mask));
        }
        Ok(())
    }

    /// Extract and render this setting from its block
    pub fn decode_block(&self, block: &Block) -> Result<String> {
        let raw = bitfield::extract(block, self.byte_offset, self.bit_mask)?;
        Ok(self.interpretation.decode(raw))
    }
}
