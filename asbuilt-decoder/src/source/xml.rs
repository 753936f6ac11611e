//! AsBuilt XML reader
//!
//! Reads the vendor AsBuilt export into a [`SourceDocument`]. The parts of the
//! document used here look like:
//!
//! ```text
//! <VIN>1FMCU9J94MUA00000</VIN>
//! <BCE_MODULE>
//!   <DATA LABEL="706-01-01"><CODE>0A1B</CODE><CODE>2C3D</CODE><CODE>4E00</CODE></DATA>
//! </BCE_MODULE>
//! <NODEID>706<F111>JX7T-14F403-AD</F111><F188>KX7T-14D003-AB</F188></NODEID>
//! ```
//!
//! A `NODEID` starts with the module address in hex, followed by one element
//! per data identifier (the tag is the identifier in hex). A `DATA` label is
//! `<module address>-<field label>`; its `CODE` children are concatenated and
//! hex-decoded. Tag and attribute names are matched case-insensitively.

use super::{decode_hex, SourceDocument};
use crate::types::{DecoderError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::collections::BTreeMap;

/// Identifier block being read
struct NodeState {
    address: Option<u16>,
    identifiers: BTreeMap<u16, String>,
    current_did: Option<u16>,
}

/// Configuration field being read
struct DataState {
    address: u16,
    label: String,
    codes: String,
}

/// Parse an AsBuilt XML document
pub fn parse_asbuilt_xml(xml: &str) -> Result<SourceDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut doc = SourceDocument::new();
    let mut path: Vec<String> = Vec::new();
    let mut node: Option<NodeState> = None;
    let mut data: Option<DataState> = None;
    let mut bce_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e);
                open_element(&name, &e, &mut node, &mut data, &mut bce_depth, &path)?;
                path.push(name);
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                open_element(&name, &e, &mut node, &mut data, &mut bce_depth, &path)?;
                close_element(&name, &mut doc, &mut node, &mut data, &mut bce_depth)?;
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                let current = path.last().map(String::as_str).unwrap_or_default();
                handle_text(current, &text, &path, &mut doc, &mut node, &mut data)?;
            }
            Event::End(_) => {
                if let Some(name) = path.pop() {
                    close_element(&name, &mut doc, &mut node, &mut data, &mut bce_depth)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!(
        "Parsed AsBuilt XML: {} identifier blocks, {} configured modules",
        doc.identifiers.len(),
        doc.fields.len()
    );
    Ok(doc)
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase()
}

fn open_element(
    name: &str,
    e: &BytesStart<'_>,
    node: &mut Option<NodeState>,
    data: &mut Option<DataState>,
    bce_depth: &mut usize,
    path: &[String],
) -> Result<()> {
    match name {
        "nodeid" => {
            *node = Some(NodeState {
                address: None,
                identifiers: BTreeMap::new(),
                current_did: None,
            });
        }
        "bce_module" => *bce_depth += 1,
        "data" if *bce_depth > 0 => {
            let label = label_attribute(e)?.ok_or_else(|| {
                DecoderError::XmlParseError("DATA element without LABEL attribute".to_string())
            })?;
            let (address, field_label) = split_data_label(&label)?;
            *data = Some(DataState {
                address,
                label: field_label,
                codes: String::new(),
            });
        }
        _ => {
            // Direct children of NODEID are data identifiers
            if let Some(state) = node.as_mut() {
                if path.last().map(String::as_str) == Some("nodeid") {
                    match u16::from_str_radix(name, 16) {
                        Ok(did) => {
                            state.current_did = Some(did);
                            state.identifiers.entry(did).or_default();
                        }
                        Err(_) => log::debug!("Ignoring non-identifier element <{}> in NODEID", name),
                    }
                }
            }
        }
    }
    Ok(())
}

fn close_element(
    name: &str,
    doc: &mut SourceDocument,
    node: &mut Option<NodeState>,
    data: &mut Option<DataState>,
    bce_depth: &mut usize,
) -> Result<()> {
    match name {
        "nodeid" => {
            if let Some(state) = node.take() {
                let address = state.address.ok_or_else(|| {
                    DecoderError::XmlParseError("NODEID element without module address".to_string())
                })?;
                doc.identifiers
                    .entry(address)
                    .or_default()
                    .extend(state.identifiers);
            }
        }
        "bce_module" => *bce_depth = bce_depth.saturating_sub(1),
        "data" => {
            if let Some(state) = data.take() {
                let context = format!("{:03X}-{}", state.address, state.label);
                let bytes = decode_hex(&state.codes, &context)?;
                doc.add_field(state.address, state.label, bytes);
            }
        }
        _ => {
            if let Some(state) = node.as_mut() {
                state.current_did = None;
            }
        }
    }
    Ok(())
}

fn handle_text(
    current: &str,
    text: &str,
    path: &[String],
    doc: &mut SourceDocument,
    node: &mut Option<NodeState>,
    data: &mut Option<DataState>,
) -> Result<()> {
    if let Some(state) = node.as_mut() {
        if current == "nodeid" {
            if state.address.is_none() {
                let address = u16::from_str_radix(text.trim(), 16).map_err(|e| {
                    DecoderError::XmlParseError(format!("Invalid NODEID address '{}': {}", text.trim(), e))
                })?;
                state.address = Some(address);
            }
            return Ok(());
        }
        if let Some(did) = state.current_did {
            state.identifiers.entry(did).or_default().push_str(text);
            return Ok(());
        }
    }

    if let Some(state) = data.as_mut() {
        if current == "code" {
            state.codes.push_str(text);
        }
        return Ok(());
    }

    // The vehicle VIN, not a VIN identifier nested in a module block
    if current == "vin" && doc.vin.is_none() && !path.iter().any(|p| p == "nodeid") {
        doc.vin = Some(text.trim().to_string());
    }
    Ok(())
}

fn label_attribute(e: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref().eq_ignore_ascii_case(b"label") {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Split `"706-01-01"` into module address 0x706 and field label `"01-01"`
fn split_data_label(label: &str) -> Result<(u16, String)> {
    let (address, field_label) = label.split_once('-').ok_or_else(|| DecoderError::InvalidLabel {
        label: label.to_string(),
        reason: "missing module address prefix".to_string(),
    })?;
    let address = u16::from_str_radix(address.trim(), 16).map_err(|e| DecoderError::InvalidLabel {
        label: label.to_string(),
        reason: format!("bad module address '{}': {}", address, e),
    })?;
    Ok((address, field_label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<AS_BUILT_DATA>
  <VEHICLE>
    <VIN>1FMCU9J94MUA00000</VIN>
    <VEHICLE_DATA><VIN>IGNORED</VIN></VEHICLE_DATA>
    <BCE_MODULE>
      <DATA LABEL="706-01-01"><CODE>0A1B</CODE><CODE>2C3D</CODE><CODE>4E00</CODE></DATA>
      <DATA LABEL="706-01-02"><CODE>0102</CODE><CODE>03FF</CODE></DATA>
      <DATA LABEL="7D0-01-01"><CODE>5553</CODE><CODE>0000</CODE><CODE>0000</CODE></DATA>
    </BCE_MODULE>
    <NODEID>706<F111>JX7T-14F403-AD</F111><F188>KX7T-14D003-AB</F188></NODEID>
    <NODEID>7D0<F111>NU5T-14G380-AB</F111><F113/></NODEID>
  </VEHICLE>
</AS_BUILT_DATA>"#;

    #[test]
    fn test_parse_sample() {
        let doc = parse_asbuilt_xml(SAMPLE).unwrap();

        assert_eq!(doc.vin.as_deref(), Some("1FMCU9J94MUA00000"));

        let ipma = &doc.identifiers[&0x706];
        assert_eq!(ipma[&0xF111], "JX7T-14F403-AD");
        assert_eq!(ipma[&0xF188], "KX7T-14D003-AB");
        assert_eq!(doc.identifiers[&0x7D0][&0xF113], "");

        let fields = &doc.fields[&0x706];
        assert_eq!(fields["01-01"], vec![0x0A, 0x1B, 0x2C, 0x3D, 0x4E, 0x00]);
        assert_eq!(fields["01-02"], vec![0x01, 0x02, 0x03, 0xFF]);
        assert_eq!(doc.fields[&0x7D0].len(), 1);
    }

    #[test]
    fn test_lowercase_tags() {
        let xml = r#"<vehicle><vin>ABC</vin><bce_module><data label="726-01-01"><code>0011</code></data></bce_module><nodeid>726<f111>X</f111></nodeid></vehicle>"#;
        let doc = parse_asbuilt_xml(xml).unwrap();
        assert_eq!(doc.vin.as_deref(), Some("ABC"));
        assert_eq!(doc.fields[&0x726]["01-01"], vec![0x00, 0x11]);
        assert_eq!(doc.identifiers[&0x726][&0xF111], "X");
    }

    #[test]
    fn test_data_outside_bce_module_is_ignored() {
        let xml = r#"<root><DATA LABEL="706-01-01"><CODE>00</CODE></DATA></root>"#;
        let doc = parse_asbuilt_xml(xml).unwrap();
        assert!(doc.fields.is_empty());
    }

    #[test]
    fn test_bad_code_hex() {
        let xml = r#"<BCE_MODULE><DATA LABEL="706-01-01"><CODE>ZZ</CODE></DATA></BCE_MODULE>"#;
        assert!(matches!(
            parse_asbuilt_xml(xml),
            Err(DecoderError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_bad_data_label() {
        let xml = r#"<BCE_MODULE><DATA LABEL="XYZ"><CODE>00</CODE></DATA></BCE_MODULE>"#;
        assert!(matches!(
            parse_asbuilt_xml(xml),
            Err(DecoderError::InvalidLabel { .. })
        ));
    }

    #[test]
    fn test_nodeid_without_address() {
        let xml = r#"<NODEID><F111>X</F111></NODEID>"#;
        assert!(matches!(
            parse_asbuilt_xml(xml),
            Err(DecoderError::XmlParseError(_))
        ));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            parse_asbuilt_xml("<VIN>abc</NODEID>"),
            Err(DecoderError::XmlParseError(_))
        ));
    }

    #[test]
    fn test_split_data_label() {
        assert_eq!(split_data_label("7D0-02-0A").unwrap(), (0x7D0, "02-0A".to_string()));
    }
}
