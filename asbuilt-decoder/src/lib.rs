//! AsBuilt Decoder Library
//!
//! Decodes vehicle "AsBuilt" configuration records into named, human-readable
//! settings ("Lane Keeping Aid: On").
//!
//! # Architecture
//!
//! Decoding is a short pipeline of pure stages:
//! - [`label`] maps vendor field labels (`"01-02"`) to block/offset addresses
//! - [`assembler`] concatenates a module's fields into dense blocks
//! - [`bitfield`] extracts masked, possibly multi-byte values from a block
//! - [`settings`] declares where each setting lives and how it is rendered
//! - [`record`] holds the decoded vehicle and answers setting queries
//!
//! [`AsBuiltDecoder`] drives the pipeline for whole documents, with an
//! injected [`RecordCache`] in front of it.
//!
//! The library does NOT:
//! - Download AsBuilt documents (implement [`SourceProvider`] for that)
//! - Validate VIN check digits
//! - Format reports
//!
//! # Example Usage
//!
//! ```
//! use asbuilt_decoder::{AsBuiltDecoder, DecoderConfig, MemoryCache, SourceDocument};
//! use asbuilt_decoder::ecu::Ecu;
//! use asbuilt_decoder::settings::VehicleSetting;
//! use std::sync::Arc;
//!
//! let mut document = SourceDocument::new();
//! document.add_identifier(0x706, 0xF111, "JX7T-14F403-AD");
//! // Five data bytes plus the trailing checksum byte
//! document.add_field_hex(0x706, "01-01", "000000800000").unwrap();
//!
//! let decoder = AsBuiltDecoder::with_config(DecoderConfig::new())
//!     .with_cache(Arc::new(MemoryCache::new()));
//! let record = decoder.decode("1FMCU9J94MUA00000", &document).unwrap();
//!
//! let setting = VehicleSetting::new("Lane Keeping Aid", Ecu::ImageProcessingModuleA, 0, 3)
//!     .with_mask(0x80)
//!     .with_values(&[(0, "Off"), (1, "On")]);
//! assert_eq!(record.get_setting_value(&setting).unwrap().to_string(), "On");
//! ```

// Public modules
pub mod assembler;
pub mod bitfield;
pub mod cache;
pub mod config;
pub mod decoder;
pub mod ecu;
pub mod label;
pub mod record;
pub mod settings;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use assembler::{BlockAssembler, ChecksumPolicy};
pub use cache::{CacheEntry, FileCache, MemoryCache, NoCache, RecordCache};
pub use config::DecoderConfig;
pub use decoder::AsBuiltDecoder;
pub use ecu::{Ecu, ModuleKey, PartFamily};
pub use label::{FieldAddress, SchemaVersion};
pub use record::{AsBuiltRecord, ModuleRecord};
pub use settings::{ValueInterpretation, VehicleSetting};
pub use source::{parse_asbuilt_xml, DirectorySource, SourceDocument, SourceProvider};
pub use types::{Absence, Block, DecodedValue, DecoderError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
