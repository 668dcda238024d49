//! Open Packaging Convention plumbing, writer side only.
//!
//! A .pptx file is an OPC package: a ZIP archive of XML parts wired
//! together by relationship files and a content-type map. This module
//! provides the part-name value type, relationship collections, and the
//! physical package writer the presentation layer serializes through.

pub mod constants;
pub mod packuri;
pub mod pkgwriter;
pub mod rel;

pub use packuri::PackURI;
pub use pkgwriter::{ContentTypesItem, PhysPkgWriter};
pub use rel::{Relationship, Relationships};
