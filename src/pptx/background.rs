//! Slide background support.

use crate::palette::Rgb;

/// A solid slide background.
///
/// Backgrounds other than solid fills (gradients, pictures, patterns)
/// are not part of this deck's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    color: Rgb,
}

impl Background {
    /// Create a solid color background.
    pub fn solid(color: Rgb) -> Self {
        Self { color }
    }

    /// The background fill color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Generate the `<p:bg>` element.
    ///
    /// Must be emitted before `<p:spTree>` per the PresentationML schema.
    pub(crate) fn to_xml(&self) -> String {
        format!(
            "<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>",
            self.color.hex()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_solid_background_xml() {
        let bg = Background::solid(palette::lookup("polar1").unwrap());
        let xml = bg.to_xml();
        assert!(xml.starts_with("<p:bg>"));
        assert!(xml.contains(r#"<a:srgbClr val="2E3440"/>"#));
        assert!(xml.ends_with("</p:bg>"));
    }
}
