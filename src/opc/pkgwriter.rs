//! Physical package writer for OPC packages.
//!
//! Handles the low-level writing of parts to a ZIP archive and the
//! construction of the `[Content_Types].xml` stream that maps file
//! extensions and part names to content types.

use crate::error::Result;
use crate::opc::constants::{content_type as ct, namespace};
use crate::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Physical package writer that serializes parts into an in-memory ZIP
/// archive with Deflate compression.
///
/// The ZIP entry metadata is fixed (no timestamps beyond the format's
/// epoch default), so writing the same parts in the same order always
/// produces the same bytes.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for building `[Content_Types].xml` content.
///
/// Manages Default and Override elements for content type mapping.
/// Entries are kept sorted so the stream is deterministic.
pub struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    /// Create a new ContentTypesItem with the standard defaults.
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Register a content type override for a part.
    pub fn add_override(&mut self, partname: &PackURI, content_type: &str) {
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    /// The PackURI of the content types stream itself.
    pub fn partname() -> Result<PackURI> {
        PackURI::new(CONTENT_TYPES_URI)
    }

    /// Generate the XML for `[Content_Types].xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES));
        xml.push('\n');

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"  <Default Extension="{}" ContentType="{}"/>"#,
                Self::escape_xml(ext),
                Self::escape_xml(content_type)
            ));
            xml.push('\n');
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"  <Override PartName="{}" ContentType="{}"/>"#,
                Self::escape_xml(partname),
                Self::escape_xml(content_type)
            ));
            xml.push('\n');
        }

        xml.push_str("</Types>");

        xml
    }

    /// Escape XML special characters.
    #[inline]
    fn escape_xml(s: &str) -> String {
        crate::common::xml::escape_xml(s)
    }
}

impl Default for ContentTypesItem {
    fn default() -> Self {
        Self::new()
    }
}
