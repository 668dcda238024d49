//! Slide model and XML emission.
use crate::error::{DeckError, Result};
use crate::palette::Rgb;
use crate::pptx::background::Background;
use crate::pptx::layout::SlideLayout;
use crate::pptx::shape::Shape;
use crate::pptx::template::SP_TREE_HEADER;
use crate::pptx::text::{Paragraph, TextFrame};
use std::fmt::Write as FmtWrite;

// Shape id 1 belongs to the group shape; ids 2 through 4 are reserved
// for the three placeholders so user shapes never collide with them.
const TITLE_SHAPE_ID: u32 = 2;
const SUBTITLE_SHAPE_ID: u32 = 3;
const BODY_SHAPE_ID: u32 = 4;
const FIRST_USER_SHAPE_ID: u32 = 5;

/// One slide: an optional background override, the layout's placeholders,
/// and freely positioned shapes.
#[derive(Debug, Clone)]
pub struct Slide {
    pub(crate) slide_id: u32,
    pub(crate) layout: SlideLayout,
    pub(crate) background: Option<Background>,
    pub(crate) title: Option<Paragraph>,
    pub(crate) subtitle: Option<Paragraph>,
    pub(crate) body: Vec<Paragraph>,
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            background: None,
            title: None,
            subtitle: None,
            body: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// The layout this slide was created from.
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Override the slide background with a solid fill.
    pub fn set_background(&mut self, color: Rgb) -> &mut Self {
        self.background = Some(Background::solid(color));
        self
    }

    /// Fill the title placeholder.
    pub fn set_title(&mut self, paragraph: Paragraph) -> &mut Self {
        self.title = Some(paragraph);
        self
    }

    /// Fill the subtitle placeholder.
    pub fn set_subtitle(&mut self, paragraph: Paragraph) -> &mut Self {
        self.subtitle = Some(paragraph);
        self
    }

    /// Append a paragraph to the body placeholder.
    pub fn add_body(&mut self, paragraph: Paragraph) -> &mut Self {
        self.body.push(paragraph);
        self
    }

    /// Add a solid-filled rectangle. Coordinates and extents are in EMU.
    pub fn add_rectangle(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Rgb,
    ) -> &mut Shape {
        let id = self.next_shape_id();
        self.shapes
            .push(Shape::new_rectangle(id, x, y, width, height, fill));
        self.shapes.last_mut().unwrap()
    }

    /// Add a text box. Coordinates and extents are in EMU.
    pub fn add_text_box(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        frame: TextFrame,
    ) -> &mut Shape {
        let id = self.next_shape_id();
        self.shapes
            .push(Shape::new_text_box(id, x, y, width, height, frame));
        self.shapes.last_mut().unwrap()
    }

    fn next_shape_id(&self) -> u32 {
        FIRST_USER_SHAPE_ID + self.shapes.len() as u32
    }

    /// Every explicit color this slide draws with.
    pub fn colors(&self) -> Vec<Rgb> {
        let mut colors = Vec::new();
        if let Some(bg) = &self.background {
            colors.push(bg.color());
        }
        for paragraph in self
            .title
            .iter()
            .chain(self.subtitle.iter())
            .chain(self.body.iter())
        {
            if let Some(color) = paragraph.format.color {
                colors.push(color);
            }
        }
        for shape in &self.shapes {
            colors.extend(shape.colors());
        }
        colors
    }

    /// Generate the `slideN.xml` part.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
            r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        ));
        xml.push_str("<p:cSld>");
        if let Some(bg) = &self.background {
            xml.push_str(&bg.to_xml());
        }
        xml.push_str("<p:spTree>");
        xml.push_str(SP_TREE_HEADER);

        if let Some(title) = &self.title {
            self.write_placeholder(
                &mut xml,
                TITLE_SHAPE_ID,
                "Title",
                self.layout.title_ph_type(),
                None,
                std::slice::from_ref(title),
            )?;
        }
        if let Some(subtitle) = &self.subtitle {
            self.write_placeholder(
                &mut xml,
                SUBTITLE_SHAPE_ID,
                "Subtitle",
                "subTitle",
                Some(1),
                std::slice::from_ref(subtitle),
            )?;
        }
        if !self.body.is_empty() {
            self.write_placeholder(
                &mut xml,
                BODY_SHAPE_ID,
                "Content Placeholder",
                "body",
                Some(1),
                &self.body,
            )?;
        }
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        Ok(xml)
    }

    fn write_placeholder(
        &self,
        xml: &mut String,
        shape_id: u32,
        name: &str,
        ph_type: &str,
        idx: Option<u32>,
        paragraphs: &[Paragraph],
    ) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{} {}"/>"#,
            shape_id,
            name,
            shape_id - 1
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str("<p:nvPr>");
        match idx {
            Some(idx) => write!(xml, r#"<p:ph type="{}" idx="{}"/>"#, ph_type, idx)
                .map_err(|e| DeckError::Xml(e.to_string()))?,
            None => write!(xml, r#"<p:ph type="{}"/>"#, ph_type)
                .map_err(|e| DeckError::Xml(e.to_string()))?,
        }
        xml.push_str("</p:nvPr>");
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
        for paragraph in paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches;
    use crate::palette;

    #[test]
    fn test_empty_slide_xml() {
        let slide = Slide::new(256, SlideLayout::Blank);
        let xml = slide.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0""#));
        assert!(xml.contains("<p:spTree>"));
        assert!(!xml.contains("<p:bg>"));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_background_precedes_sp_tree() {
        let polar1 = palette::lookup("polar1").unwrap();
        let mut slide = Slide::new(256, SlideLayout::Blank);
        slide.set_background(polar1);
        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="2E3440"/>"#));
    }

    #[test]
    fn test_title_placeholder_type_follows_layout() {
        let mut slide = Slide::new(256, SlideLayout::TitleSlide);
        slide.set_title(Paragraph::new("Nord Dark Theme"));
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));

        let mut slide = Slide::new(257, SlideLayout::TitleAndContent);
        slide.set_title(Paragraph::new("Key Features"));
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
    }

    #[test]
    fn test_subtitle_and_body_carry_idx() {
        let mut slide = Slide::new(256, SlideLayout::TitleSlide);
        slide.set_subtitle(Paragraph::new("A Modern Presentation Template"));
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));

        let mut slide = Slide::new(257, SlideLayout::TitleAndContent);
        slide.add_body(Paragraph::new("First"));
        slide.add_body(Paragraph::new("Second"));
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        // Both paragraphs land in one placeholder body.
        assert_eq!(xml.matches("<p:txBody>").count(), 1);
        assert!(xml.contains("<a:t>First</a:t>"));
        assert!(xml.contains("<a:t>Second</a:t>"));
    }

    #[test]
    fn test_user_shape_ids_start_after_placeholders() {
        let frost4 = palette::lookup("frost4").unwrap();
        let mut slide = Slide::new(256, SlideLayout::Blank);
        slide.add_rectangle(0, 0, inches(0.3), inches(7.5), frost4);
        slide.add_rectangle(0, 0, inches(0.5), inches(0.5), frost4);
        assert_eq!(slide.shapes[0].shape_id, 5);
        assert_eq!(slide.shapes[1].shape_id, 6);
    }

    #[test]
    fn test_colors_cover_background_text_and_shapes() {
        let polar1 = palette::lookup("polar1").unwrap();
        let snow3 = palette::lookup("snow3").unwrap();
        let frost4 = palette::lookup("frost4").unwrap();
        let mut slide = Slide::new(256, SlideLayout::TitleOnly);
        slide.set_background(polar1);
        slide.set_title(Paragraph::new("Title").color(snow3));
        slide.add_rectangle(0, 0, 1, 1, frost4);
        let colors = slide.colors();
        assert!(colors.contains(&polar1));
        assert!(colors.contains(&snow3));
        assert!(colors.contains(&frost4));
    }
}
