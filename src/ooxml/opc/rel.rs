/// Relationship-related objects for OPC packages.
///
/// Relationships connect a source part (or the package itself) to target parts.
/// Templates are navigated through them when reading, and the deck writer emits
/// them for every part it creates.
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{namespace, relationship_type};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::xml::attr_value;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference - either a part URI or external URL
    target_ref: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    /// Create a new internal relationship.
    pub fn new(r_id: impl Into<String>, reltype: impl Into<String>, target_ref: impl Into<String>) -> Self {
        Self {
            r_id: r_id.into(),
            reltype: reltype.into(),
            target_ref: target_ref.into(),
            is_external: false,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Check if this is an external relationship.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }
}

/// Collection of relationships from a single source part.
///
/// Relationships keep their document order, which matters when a source has
/// several relationships of the same type.
#[derive(Debug, Default)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    rels: SmallVec<[Relationship; 8]>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: SmallVec::new(),
        }
    }

    /// Parse a `.rels` part.
    ///
    /// `base_uri` is the directory of the source part, used to resolve targets.
    pub fn from_xml(xml: &[u8], base_uri: &str) -> Result<Self> {
        let mut rels = Self::new(base_uri);
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target = None;
                    let mut is_external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(attr_value(&attr)?),
                            b"Type" => reltype = Some(attr_value(&attr)?),
                            b"Target" => target = Some(attr_value(&attr)?),
                            b"TargetMode" => is_external = attr.value.as_ref() == b"External",
                            _ => {},
                        }
                    }

                    match (r_id, reltype, target) {
                        (Some(r_id), Some(reltype), Some(target_ref)) => {
                            rels.rels.push(Relationship {
                                r_id,
                                reltype,
                                target_ref,
                                is_external,
                            });
                        },
                        _ => {
                            return Err(OoxmlError::InvalidRelationship(
                                "relationship is missing Id, Type or Target".to_string(),
                            ));
                        },
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(format!("Relationships parse error: {}", e))),
                _ => {},
            }
        }

        Ok(rels)
    }

    /// Add a relationship, keeping insertion order.
    pub fn push(&mut self, rel: Relationship) {
        self.rels.push(rel);
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get the first relationship of the given type.
    pub fn first_of_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels
            .iter()
            .find(|rel| relationship_type::matches(&rel.reltype, reltype))
    }

    /// Resolve the target partname of an internal relationship.
    pub fn target_partname(&self, rel: &Relationship) -> Result<PackURI> {
        if rel.is_external {
            return Err(OoxmlError::InvalidRelationship(format!(
                "{} points outside the package",
                rel.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &rel.target_ref).map_err(OoxmlError::InvalidPackUri)
    }

    /// Iterate over relationships in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Get the number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if there are no relationships.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to a `.rels` part.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS)?;

        for rel in &self.rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref)
            )?;
            if rel.is_external {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }

        xml.push_str("</Relationships>");
        Ok(xml)
    }
}
