/// Relationship-related objects for OPC packages.
///
/// Every part that points at other parts carries a `.rels` companion
/// listing its outgoing relationships. This collection is writer-oriented:
/// relationships are kept in insertion order so the serialized package is
/// identical from run to run.
use crate::common::xml::escape_xml;
use crate::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    /// Create a new relationship.
    pub fn new(
        r_id: impl Into<String>,
        reltype: impl Into<String>,
        target_ref: impl Into<String>,
    ) -> Self {
        Self {
            r_id: r_id.into(),
            reltype: reltype.into(),
            target_ref: target_ref.into(),
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
}

/// Collection of relationships from a single source, in insertion order.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self { rels: Vec::new() }
    }

    /// Add a relationship with the next available rId.
    ///
    /// # Returns
    /// The assigned relationship ID.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels
            .push(Relationship::new(r_id.clone(), reltype, target_ref));
        r_id
    }

    /// Get the number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Generate the `.rels` part XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        let _ = write!(
            xml,
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        );
        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            );
        }
        xml.push_str("</Relationships>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");

        let xml = rels.to_xml();
        assert!(xml.contains(r#"<Relationship Id="rId1""#));
        assert!(xml.contains(r#"Target="ppt/presentation.xml"/>"#));
    }

    #[test]
    fn test_to_xml_preserves_insertion_order() {
        let mut rels = Relationships::new();
        rels.add(rt::SLIDE, "slides/slide1.xml");
        rels.add(rt::SLIDE, "slides/slide2.xml");

        let xml = rels.to_xml();
        let first = xml.find("slide1.xml").unwrap();
        let second = xml.find("slide2.xml").unwrap();
        assert!(first < second);
    }
}
