//! Decoded AsBuilt records
//!
//! An [`AsBuiltRecord`] is the immutable, queryable result of decoding one
//! vehicle: identifiers and assembled configuration blocks per module.
//! [`AsBuiltRecord::get_setting_value`] is the single data-access entry point
//! for reporting.

use crate::ecu::{Ecu, ModuleKey, DID_PART_NUMBER, DID_SOFTWARE_NUMBER};
use crate::settings::VehicleSetting;
use crate::types::{Absence, Block, DecodedValue, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decoded data for one module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Data identifier -> value (part numbers, software numbers, ...)
    pub identifiers: BTreeMap<u16, String>,
    /// Assembled blocks, `None` when the module reported no configuration
    pub configuration: Option<Vec<Block>>,
}

impl ModuleRecord {
    pub fn new(identifiers: BTreeMap<u16, String>, configuration: Option<Vec<Block>>) -> Self {
        Self {
            identifiers,
            configuration,
        }
    }

    pub fn identifier(&self, did: u16) -> Option<&str> {
        self.identifiers.get(&did).map(String::as_str)
    }

    pub fn part_number(&self) -> Option<&str> {
        self.identifier(DID_PART_NUMBER)
    }

    pub fn software_number(&self) -> Option<&str> {
        self.identifier(DID_SOFTWARE_NUMBER)
    }

    pub fn block(&self, block_id: usize) -> Option<&Block> {
        self.configuration.as_ref()?.get(block_id)
    }
}

/// Full decoded configuration of one vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsBuiltRecord {
    pub vin: String,
    pub modules: BTreeMap<Ecu, ModuleRecord>,
}

/// Settings of one target rendered for display: `(comment, value)` rows
pub type SettingsReport = BTreeMap<ModuleKey, Vec<(String, DecodedValue)>>;

impl AsBuiltRecord {
    pub fn new(vin: impl Into<String>, modules: BTreeMap<Ecu, ModuleRecord>) -> Self {
        Self {
            vin: vin.into(),
            modules,
        }
    }

    /// Find the module a target refers to
    ///
    /// A qualified target only matches when the module's part number carries
    /// the family discriminator. A module without a part number never matches
    /// a qualified target.
    fn resolve(&self, target: &ModuleKey) -> std::result::Result<&ModuleRecord, Absence> {
        let module = self
            .modules
            .get(&target.ecu())
            .ok_or(Absence::ModuleNotPresent)?;

        if let Some(family) = target.part_family() {
            match module.part_number() {
                Some(part_number) if family.matches(part_number) => {}
                _ => return Err(Absence::PartFamilyMismatch),
            }
        }
        Ok(module)
    }

    /// Whether the target module is present (and of the right part family)
    pub fn is_present(&self, target: &ModuleKey) -> bool {
        self.resolve(target).is_ok()
    }

    pub fn module(&self, target: &ModuleKey) -> Option<&ModuleRecord> {
        self.resolve(target).ok()
    }

    pub fn identifier(&self, ecu: Ecu, did: u16) -> Option<&str> {
        self.modules.get(&ecu)?.identifier(did)
    }

    /// Modules in the record, in address order
    pub fn ecus(&self) -> Vec<Ecu> {
        let mut ecus: Vec<Ecu> = self.modules.keys().copied().collect();
        ecus.sort_by_key(Ecu::address);
        ecus
    }

    /// Read one setting
    ///
    /// Missing data is reported as [`DecodedValue::Missing`] with the reason.
    /// Errors are reserved for settings whose coordinates do not fit the
    /// block they point at (bad mask, offset beyond the block).
    pub fn get_setting_value(&self, setting: &VehicleSetting) -> Result<DecodedValue> {
        let module = match self.resolve(&setting.target) {
            Ok(module) => module,
            Err(absence) => return Ok(DecodedValue::Missing(absence)),
        };

        let Some(blocks) = &module.configuration else {
            return Ok(DecodedValue::Missing(Absence::NoConfiguration));
        };
        let Some(block) = blocks.get(setting.block_id) else {
            return Ok(DecodedValue::Missing(Absence::BlockNotPresent));
        };

        Ok(DecodedValue::Decoded(setting.decode_block(block)?))
    }

    /// Render settings grouped by target, skipping targets absent from this vehicle
    pub fn settings_report(&self, settings: &[VehicleSetting]) -> Result<SettingsReport> {
        let mut report = SettingsReport::new();
        for setting in settings {
            if !self.is_present(&setting.target) {
                continue;
            }
            let value = self.get_setting_value(setting)?;
            report
                .entry(setting.target)
                .or_default()
                .push((setting.comment.clone(), value));
        }
        Ok(report)
    }
}
