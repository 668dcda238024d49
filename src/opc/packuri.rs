/// Provides the PackURI value type for working with package part names.
///
/// A PackURI represents a part name within an OPC package, following the
/// URI format defined by the Open Packaging Conventions specification.
use crate::error::{DeckError, Result};

/// The pseudo-partname of the package itself.
pub const PACKAGE_URI: &str = "/";

/// The partname of the content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// Represents a package URI, which is a partname within an OPC package.
///
/// PackURIs always begin with a forward slash and use forward slashes as
/// path separators, following the OPC specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/ppt/slides/slide1.xml")
    uri: String,
}

impl PackURI {
    /// Create a new PackURI from a string.
    ///
    /// # Errors
    /// Returns an error if the URI doesn't start with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(DeckError::InvalidPartName(uri));
        }
        Ok(PackURI { uri })
    }

    /// Get the base URI (directory portion) of this PackURI.
    ///
    /// For example, "/ppt/slides" for "/ppt/slides/slide1.xml".
    /// For the package pseudo-partname "/", returns "/".
    pub fn base_uri(&self) -> &str {
        if self.uri == PACKAGE_URI {
            return PACKAGE_URI;
        }
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Get the filename portion of this PackURI.
    ///
    /// For example, "slide1.xml" for "/ppt/slides/slide1.xml".
    /// For the package pseudo-partname "/", returns an empty string.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// Get the ZIP member name for this part: the URI without its leading
    /// slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Get the PackURI of the relationships part corresponding to this
    /// part, e.g. "/ppt/_rels/presentation.xml.rels" for
    /// "/ppt/presentation.xml".
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base = self.base_uri();
        if base == "/" {
            PackURI::new(format!("/_rels/{}.rels", self.filename()))
        } else {
            PackURI::new(format!("{}/_rels/{}.rels", base, self.filename()))
        }
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}
