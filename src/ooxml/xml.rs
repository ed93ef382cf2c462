//! Small quick-xml helpers shared by the part parsers.

use crate::common::xml::{resolve_entity, unescape_xml};
use crate::ooxml::error::Result;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesRef, BytesStart};

/// Decode an attribute value, resolving entity references.
pub(crate) fn attr_value(attr: &Attribute<'_>) -> Result<String> {
    let raw = std::str::from_utf8(&attr.value)?;
    Ok(unescape_xml(raw))
}

/// Find an attribute by its qualified name and decode its value.
pub(crate) fn find_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return attr_value(&attr).map(Some);
        }
    }
    Ok(None)
}

/// Parse an integer attribute, ignoring malformed values.
pub(crate) fn int_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<i64>> {
    Ok(find_attr(e, key)?.and_then(|v| v.trim().parse().ok()))
}

/// Parse an `xsd:boolean` attribute (`1`/`0`/`true`/`false`).
pub(crate) fn bool_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<bool>> {
    Ok(find_attr(e, key)?.and_then(|v| match v.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }))
}

/// Append the character an entity reference stands for.
///
/// Unknown entities are kept verbatim so no text is silently lost.
pub(crate) fn push_entity(out: &mut String, e: &BytesRef<'_>) -> Result<()> {
    let name = std::str::from_utf8(e)?;
    match resolve_entity(name) {
        Some(c) => out.push(c),
        None => {
            out.push('&');
            out.push_str(name);
            out.push(';');
        },
    }
    Ok(())
}
