//! Source documents
//!
//! A [`SourceDocument`] is the parsed, pre-assembly form of one vehicle's
//! AsBuilt data: identifiers and labelled raw fields per module address.
//! Addresses are kept raw so the decoder can report modules it does not know.
//!
//! Documents come from a [`SourceProvider`]; the XML reader in [`xml`] and the
//! directory-backed [`DirectorySource`] are provided here, anything that
//! downloads documents lives outside this crate.

pub mod xml;

use crate::types::{DecoderError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use xml::parse_asbuilt_xml;

/// Parsed AsBuilt data for one vehicle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    /// VIN stated by the document itself, if any
    pub vin: Option<String>,
    /// Module address -> data identifier -> value
    pub identifiers: BTreeMap<u16, BTreeMap<u16, String>>,
    /// Module address -> field label -> raw bytes (checksum included)
    pub fields: BTreeMap<u16, BTreeMap<String, Vec<u8>>>,
}

impl SourceDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the document VIN
    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    pub fn add_identifier(&mut self, address: u16, did: u16, value: impl Into<String>) {
        self.identifiers
            .entry(address)
            .or_default()
            .insert(did, value.into());
    }

    pub fn add_field(&mut self, address: u16, label: impl Into<String>, data: Vec<u8>) {
        self.fields.entry(address).or_default().insert(label.into(), data);
    }

    /// Add a field from its hex text (whitespace ignored)
    pub fn add_field_hex(&mut self, address: u16, label: impl Into<String>, hex_text: &str) -> Result<()> {
        let label = label.into();
        let data = decode_hex(hex_text, &label)?;
        self.add_field(address, label, data);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty() && self.fields.is_empty()
    }
}

pub(crate) fn decode_hex(text: &str, context: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).map_err(|source| DecoderError::InvalidHex {
        context: context.to_string(),
        source,
    })
}

/// File path for a VIN-keyed file under `dir`
///
/// The VIN becomes a file name, so anything other than ASCII letters and
/// digits is rejected.
pub(crate) fn vin_path(dir: &Path, vin: &str, extension: &str) -> Result<PathBuf> {
    if vin.is_empty() || !vin.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DecoderError::InvalidVin(vin.to_string()));
    }
    Ok(dir.join(format!("{}.{}", vin, extension)))
}

/// Supplies source documents by VIN
pub trait SourceProvider: Send + Sync {
    fn fetch(&self, vin: &str) -> Result<SourceDocument>;
}

/// Reads `<dir>/<VIN>.ab` AsBuilt XML files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, vin: &str) -> Result<PathBuf> {
        vin_path(&self.dir, vin, "ab")
    }

    /// VINs from `vins` that have no document on disk
    pub fn missing<'a>(&self, vins: &'a [String]) -> Vec<&'a str> {
        vins.iter()
            .map(String::as_str)
            .filter(|vin| !self.path_for(vin).is_ok_and(|path| path.is_file()))
            .collect()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SourceProvider for DirectorySource {
    fn fetch(&self, vin: &str) -> Result<SourceDocument> {
        let path = self.path_for(vin)?;
        log::debug!("Reading AsBuilt document: {:?}", path);
        let text = std::fs::read_to_string(&path)?;
        parse_asbuilt_xml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_helpers() {
        let mut doc = SourceDocument::new().with_vin("1FTEST");
        doc.add_identifier(0x706, 0xF111, "JX7T-14F403-AD");
        doc.add_field_hex(0x706, "01-01", "0102 0304 05AA").unwrap();

        assert_eq!(doc.vin.as_deref(), Some("1FTEST"));
        assert_eq!(doc.identifiers[&0x706][&0xF111], "JX7T-14F403-AD");
        assert_eq!(doc.fields[&0x706]["01-01"], vec![0x01, 0x02, 0x03, 0x04, 0x05, 0xAA]);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_bad_hex() {
        let mut doc = SourceDocument::new();
        assert!(matches!(
            doc.add_field_hex(0x706, "01-01", "01G2"),
            Err(DecoderError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_directory_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(source.fetch("NOPE"), Err(DecoderError::IoError(_))));

        let vins = vec!["NOPE".to_string()];
        assert_eq!(source.missing(&vins), vec!["NOPE"]);
    }

    #[test]
    fn test_vin_cannot_escape_directory() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("docs");
        std::fs::create_dir(&inner).unwrap();
        std::fs::write(dir.path().join("x.ab"), "<VIN>X</VIN>").unwrap();

        let source = DirectorySource::new(&inner);
        for vin in ["../x", "..", "", "a/b", "1FT EST"] {
            assert!(
                matches!(source.fetch(vin), Err(DecoderError::InvalidVin(_))),
                "vin {:?} should be rejected",
                vin
            );
        }
        let vins = vec!["../x".to_string()];
        assert_eq!(source.missing(&vins), vec!["../x"]);
        assert_eq!(source.path_for("1FTEST").unwrap(), inner.join("1FTEST.ab"));
    }
}
