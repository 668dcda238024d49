//! Top-level presentation model.
use crate::error::{DeckError, Result};
use crate::pptx::layout::SlideLayout;
use crate::pptx::package;
use crate::pptx::slide::Slide;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// 10 inch slide width in EMU.
pub const SLIDE_WIDTH: i64 = 9_144_000;

/// 7.5 inch slide height in EMU.
pub const SLIDE_HEIGHT: i64 = 6_858_000;

// Slide ids must be 256 or greater per the PresentationML schema.
const FIRST_SLIDE_ID: u32 = 256;

/// An in-memory presentation, serialized to a .pptx package on save.
#[derive(Debug, Default)]
pub struct Presentation {
    slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation on a 10 x 7.5 inch canvas.
    pub fn new() -> Self {
        Self { slides: Vec::new() }
    }

    /// Append a slide built on the given layout.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(Slide::new(slide_id, layout));
        self.slides.last_mut().unwrap()
    }

    /// The slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Serialize to .pptx package bytes.
    ///
    /// Saving the same presentation twice yields identical bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::write_package(self)
    }

    /// Serialize and write to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Generate the `presentation.xml` part.
    ///
    /// `master_rel_id` and `slide_rel_ids` come from the part's
    /// relationship collection, which the package writer owns.
    pub(crate) fn to_xml(&self, master_rel_id: &str, slide_rel_ids: &[String]) -> Result<String> {
        debug_assert_eq!(slide_rel_ids.len(), self.slides.len());

        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
            r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        ));
        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{}"/></p:sldMasterIdLst>"#,
            master_rel_id
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;
        xml.push_str("<p:sldIdLst>");
        for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id, rel_id)
                .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        xml.push_str("</p:sldIdLst>");
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            SLIDE_WIDTH, SLIDE_HEIGHT
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            SLIDE_HEIGHT, SLIDE_WIDTH
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;
        xml.push_str("</p:presentation>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_ids_ascend_from_256() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleSlide);
        pres.add_slide(SlideLayout::Blank);
        assert_eq!(pres.slides()[0].slide_id, 256);
        assert_eq!(pres.slides()[1].slide_id, 257);
    }

    #[test]
    fn test_save_writes_zip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Blank);
        pres.save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_presentation_xml_lists_slides_in_order() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleSlide);
        pres.add_slide(SlideLayout::TitleOnly);
        let rel_ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = pres.to_xml("rId1", &rel_ids).unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }
}
