// End-to-end decoding: AsBuilt XML on disk -> records -> catalog settings
use asbuilt_decoder::settings::catalog;
use asbuilt_decoder::{
    Absence, AsBuiltDecoder, CacheEntry, DecodedValue, DecoderConfig, DecoderError, DirectorySource, Ecu,
    FileCache, ModuleKey, PartFamily, RecordCache, SchemaVersion,
};
use std::path::Path;
use std::sync::Arc;

const VIN: &str = "1FA6P8TH0L5100001";

// IPMA (Q3 part number) with two fields in block 0, IPC with identifiers only,
// APIM (SYNC 4 part number) with three blocks of two or three fields.
const ASBUILT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<AS_BUILT_DATA>
  <VEHICLE>
    <VIN>1FA6P8TH0L5100001</VIN>
    <BCE_MODULE>
      <DATA LABEL="706-01-01"><CODE>0006</CODE><CODE>8180</CODE><CODE>42AB</CODE></DATA>
      <DATA LABEL="706-01-02"><CODE>0123</CODE><CODE>0100</CODE><CODE>00CC</CODE></DATA>
      <DATA LABEL="7D0-01-01"><CODE>0000</CODE><CODE>0000</CODE><CODE>0011</CODE></DATA>
      <DATA LABEL="7D0-01-02"><CODE>0000</CODE><CODE>0000</CODE><CODE>0012</CODE></DATA>
      <DATA LABEL="7D0-01-03"><CODE>0002</CODE><CODE>0000</CODE><CODE>0013</CODE></DATA>
      <DATA LABEL="7D0-02-01"><CODE>2000</CODE><CODE>0000</CODE><CODE>0021</CODE></DATA>
      <DATA LABEL="7D0-02-02"><CODE>0000</CODE><CODE>0000</CODE><CODE>0022</CODE></DATA>
      <DATA LABEL="7D0-03-01"><CODE>5553</CODE><CODE>0000</CODE><CODE>0031</CODE></DATA>
      <DATA LABEL="7D0-03-02"><CODE>0700</CODE><CODE>0000</CODE><CODE>0032</CODE></DATA>
      <DATA LABEL="7FF-01-01"><CODE>0000</CODE><CODE>0000</CODE><CODE>0044</CODE></DATA>
    </BCE_MODULE>
    <NODEID>706<F111>JX7T-14F403-AD</F111><F188>KX7T-14D003-AB</F188></NODEID>
    <NODEID>720<F111>LR3T-10849-BAF</F111></NODEID>
    <NODEID>7D0<F111>NU5T-14G380-AB</F111></NODEID>
  </VEHICLE>
</AS_BUILT_DATA>"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_document(dir: &Path, vin: &str, xml: &str) {
    std::fs::write(dir.join(format!("{}.ab", vin)), xml).unwrap();
}

fn value(decoder_record: &asbuilt_decoder::AsBuiltRecord, comment: &str, target: ModuleKey) -> DecodedValue {
    let setting = catalog::find(comment, target).unwrap_or_else(|| panic!("no setting {}", comment));
    decoder_record.get_setting_value(setting).unwrap()
}

#[test]
fn test_xml_document_to_settings() -> anyhow::Result<()> {
    init_logging();
    let docs = tempfile::tempdir()?;
    write_document(docs.path(), VIN, ASBUILT);

    let source = DirectorySource::new(docs.path());
    let record = AsBuiltDecoder::new().decode_from(&source, VIN)?;

    // 0x7FF is not a registered module
    assert_eq!(
        record.ecus(),
        vec![
            Ecu::ImageProcessingModuleA,
            Ecu::InstrumentPanelCluster,
            Ecu::AccessoryProtocolInterfaceModule
        ]
    );

    let ipma = ModuleKey::from(PartFamily::IpmaQ3);
    let expected = [
        ("Vehicle", "S550 (Mustang LHD)"),
        ("Distance Alert", "On"),
        ("Lane Departure Warning", "On"),
        ("Lane Keeping Aid", "On"),
        ("Driver Alert System", "Undefined"),
        ("LKS Switch", "Direct"),
        ("Driving Side", "Left"),
        ("Region and Country", "0x123"),
        ("Enable TJA", "Unknown (0x03)"),
        ("LKS Actuator", "EPAS"),
        ("Speed Limit Sign Unit", "Undefined"),
    ];
    for (comment, rendered) in expected {
        assert_eq!(value(&record, comment, ipma).to_string(), rendered, "{}", comment);
    }
    assert_eq!(
        value(&record, "VehicleCfg_Wheelbase", PartFamily::IpmaQ4.into()).absence(),
        Some(Absence::PartFamilyMismatch)
    );

    let ipc = ModuleKey::from(Ecu::InstrumentPanelCluster);
    assert_eq!(value(&record, "Display Units", ipc).absence(), Some(Absence::NoConfiguration));

    let abs = ModuleKey::from(Ecu::AntiLockBrakeSystem);
    assert_eq!(value(&record, "Stop and Go", abs).absence(), Some(Absence::ModuleNotPresent));

    let sync3 = ModuleKey::from(PartFamily::ApimSync3);
    let sync4 = ModuleKey::from(PartFamily::ApimSync4);
    assert_eq!(
        value(&record, "Country Code (First Letter)", sync3).absence(),
        Some(Absence::PartFamilyMismatch)
    );
    assert_eq!(value(&record, "Country Code (First Letter)", sync4).to_string(), "U");
    assert_eq!(value(&record, "Country Code (Second Letter)", sync4).to_string(), "S");
    assert_eq!(value(&record, "Architecture Version", sync4).to_string(), "FNV3");
    assert_eq!(value(&record, "Brand", sync4).to_string(), "Lincoln");
    assert_eq!(value(&record, "Vehicle", sync4).to_string(), "CX482");
    assert_eq!(value(&record, "Fuel Type", sync4).absence(), Some(Absence::BlockNotPresent));

    Ok(())
}

#[test]
fn test_decode_is_idempotent() -> anyhow::Result<()> {
    let document = asbuilt_decoder::parse_asbuilt_xml(ASBUILT)?;
    let decoder = AsBuiltDecoder::new();

    let first = decoder.decode(VIN, &document)?;
    let second = decoder.decode(VIN, &document)?;
    assert_eq!(first, second);
    assert_eq!(serde_json::to_vec(&first)?, serde_json::to_vec(&second)?);
    Ok(())
}

#[test]
fn test_settings_report() -> anyhow::Result<()> {
    let document = asbuilt_decoder::parse_asbuilt_xml(ASBUILT)?;
    let record = AsBuiltDecoder::new().decode(VIN, &document)?;

    let report = record.settings_report(catalog::all())?;
    let targets: Vec<ModuleKey> = report.keys().copied().collect();
    assert_eq!(
        targets,
        vec![
            ModuleKey::from(Ecu::InstrumentPanelCluster),
            ModuleKey::from(PartFamily::IpmaQ3),
            ModuleKey::from(PartFamily::ApimSync4),
        ]
        .into_iter()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
    );

    let ipma_rows = &report[&ModuleKey::from(PartFamily::IpmaQ3)];
    assert_eq!(ipma_rows.len(), catalog::for_target(PartFamily::IpmaQ3.into()).count());
    Ok(())
}

#[test]
fn test_file_cache_skips_fetch() -> anyhow::Result<()> {
    init_logging();
    let docs = tempfile::tempdir()?;
    let cache_dir = tempfile::tempdir()?;
    write_document(docs.path(), VIN, ASBUILT);

    let source = DirectorySource::new(docs.path());
    let decoder = AsBuiltDecoder::new().with_cache(Arc::new(FileCache::new(cache_dir.path())?));
    let first = decoder.decode_from(&source, VIN)?;

    // Source gone; a fresh decoder over the same cache directory still answers
    std::fs::remove_file(source.path_for(VIN)?)?;
    let reopened = AsBuiltDecoder::new().with_cache(Arc::new(FileCache::new(cache_dir.path())?));
    assert_eq!(reopened.decode_from(&source, VIN)?, first);

    // Without the cache the missing document is an error
    assert!(matches!(
        AsBuiltDecoder::new().decode_from(&source, VIN),
        Err(DecoderError::IoError(_))
    ));
    Ok(())
}

#[test]
fn test_stale_cache_entry_is_replaced() -> anyhow::Result<()> {
    init_logging();
    let docs = tempfile::tempdir()?;
    let cache_dir = tempfile::tempdir()?;
    write_document(docs.path(), VIN, ASBUILT);
    let source = DirectorySource::new(docs.path());
    let cache = Arc::new(FileCache::new(cache_dir.path())?);

    // An entry from an older schema holding a bogus record
    let old_config = DecoderConfig::new().with_schema_version(SchemaVersion::V1);
    let bogus = asbuilt_decoder::AsBuiltRecord::new(VIN, Default::default());
    cache.put(VIN, CacheEntry::new(&old_config, bogus.clone()))?;

    let decoder = AsBuiltDecoder::new().with_cache(cache.clone());
    let record = decoder.decode_from(&source, VIN)?;
    assert_ne!(record, bogus);

    let entry = cache.get(VIN)?.expect("entry rewritten");
    assert_eq!(entry.schema_version, SchemaVersion::CURRENT.number());
    assert_eq!(entry.record, record);
    Ok(())
}

#[test]
fn test_batch_reports_failures_per_vin() -> anyhow::Result<()> {
    init_logging();
    let docs = tempfile::tempdir()?;
    let other_vin = "1FA6P8TH0L5100002";
    write_document(docs.path(), VIN, ASBUILT);
    // Document stating another vehicle's VIN
    write_document(docs.path(), other_vin, ASBUILT);

    let source = DirectorySource::new(docs.path());
    let vins = vec![
        "MISSING0000000000".to_string(),
        VIN.to_string(),
        other_vin.to_string(),
    ];
    assert_eq!(source.missing(&vins), vec!["MISSING0000000000"]);

    let results = AsBuiltDecoder::new().decode_batch(&source, &vins);
    let order: Vec<&str> = results.iter().map(|(vin, _)| vin.as_str()).collect();
    assert_eq!(order, vec!["MISSING0000000000", VIN, other_vin]);

    assert!(matches!(results[0].1, Err(DecoderError::IoError(_))));
    assert!(results[1].1.is_ok());
    assert!(matches!(results[2].1, Err(DecoderError::VinMismatch { .. })));
    Ok(())
}

#[test]
fn test_broken_layout_aborts_vehicle() {
    let xml = r#"<BCE_MODULE>
      <DATA LABEL="706-01-01"><CODE>0000</CODE><CODE>0000</CODE><CODE>0000</CODE></DATA>
      <DATA LABEL="706-03-01"><CODE>0000</CODE><CODE>0000</CODE><CODE>0000</CODE></DATA>
    </BCE_MODULE>
    <NODEID>706<F111>JX7T-14F403-AD</F111></NODEID>"#;
    let document = asbuilt_decoder::parse_asbuilt_xml(xml).unwrap();

    let result = AsBuiltDecoder::new().decode(VIN, &document);
    assert!(matches!(
        result,
        Err(DecoderError::BlockSequenceError { expected: 1, found: 2 })
    ));
}
