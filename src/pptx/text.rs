//! Text frames, paragraphs, and run formatting.

use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::error::{DeckError, Result};
use crate::palette::Rgb;
use std::fmt::Write as FmtWrite;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    fn attr(self) -> Option<&'static str> {
        match self {
            // Left is the PresentationML default and is not written out.
            Alignment::Left => None,
            Alignment::Center => Some("ctr"),
            Alignment::Right => Some("r"),
        }
    }
}

/// Run-level formatting properties.
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: bool,
    /// Text color
    pub color: Option<Rgb>,
}

/// A single paragraph holding one formatted run.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) format: TextFormat,
    pub(crate) alignment: Alignment,
    /// Space before the paragraph in points
    pub(crate) space_before: Option<f64>,
    /// Space after the paragraph in points
    pub(crate) space_after: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::default(),
            alignment: Alignment::Left,
            space_before: None,
            space_after: None,
        }
    }

    /// Set the font size in points.
    pub fn size(mut self, pt: f64) -> Self {
        self.format.size = Some(pt);
        self
    }

    /// Render the run bold.
    pub fn bold(mut self) -> Self {
        self.format.bold = true;
        self
    }

    /// Set the run color.
    pub fn color(mut self, color: Rgb) -> Self {
        self.format.color = Some(color);
        self
    }

    /// Center the paragraph.
    pub fn center(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Set spacing before the paragraph in points.
    pub fn space_before(mut self, pt: f64) -> Self {
        self.space_before = Some(pt);
        self
    }

    /// Set spacing after the paragraph in points.
    pub fn space_after(mut self, pt: f64) -> Self {
        self.space_after = Some(pt);
        self
    }

    /// Generate the `<a:p>` element for this paragraph.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        let algn = self.alignment.attr();
        if algn.is_some() || self.space_before.is_some() || self.space_after.is_some() {
            xml.push_str("<a:pPr");
            if let Some(a) = algn {
                write!(xml, r#" algn="{}""#, a).map_err(|e| DeckError::Xml(e.to_string()))?;
            }
            xml.push('>');
            if let Some(pt) = self.space_before {
                write!(
                    xml,
                    r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
                    pt_to_centipoints(pt)
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;
            }
            if let Some(pt) = self.space_after {
                write!(
                    xml,
                    r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                    pt_to_centipoints(pt)
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;
            }
            xml.push_str("</a:pPr>");
        }

        xml.push_str("<a:r>");
        xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");
        if let Some(size) = self.format.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))
                .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        if self.format.bold {
            xml.push_str(" b=\"1\"");
        }
        if let Some(color) = self.format.color {
            xml.push('>');
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.hex()
            )
            .map_err(|e| DeckError::Xml(e.to_string()))?;
            xml.push_str("</a:rPr>");
        } else {
            xml.push_str("/>");
        }
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))
            .map_err(|e| DeckError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");

        Ok(())
    }
}

/// A text frame: one or more paragraphs plus frame-level properties.
#[derive(Debug, Clone)]
pub struct TextFrame {
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) word_wrap: bool,
    /// Anchor text to the vertical middle of the frame
    pub(crate) anchor_middle: bool,
}

impl TextFrame {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            word_wrap: false,
            anchor_middle: false,
        }
    }

    /// A frame holding a single paragraph.
    pub fn single(paragraph: Paragraph) -> Self {
        Self::new(vec![paragraph])
    }

    /// Wrap text at the frame edge.
    pub fn word_wrap(mut self) -> Self {
        self.word_wrap = true;
        self
    }

    /// Anchor text to the vertical middle of the frame.
    pub fn anchor_middle(mut self) -> Self {
        self.anchor_middle = true;
        self
    }

    /// Generate the `<p:txBody>` element for this frame.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr");
        if self.word_wrap {
            xml.push_str(" wrap=\"square\"");
        } else {
            xml.push_str(" wrap=\"none\"");
        }
        if self.anchor_middle {
            xml.push_str(" anchor=\"ctr\"");
        }
        xml.push_str(" rtlCol=\"0\"/>");
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_plain_paragraph() {
        let mut xml = String::new();
        Paragraph::new("Hello").to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:t>Hello</a:t>"));
        assert!(!xml.contains("<a:pPr"));
        assert!(xml.contains("<a:rPr lang=\"en-US\" dirty=\"0\"/>"));
    }

    #[test]
    fn test_styled_paragraph() {
        let snow3 = palette::lookup("snow3").unwrap();
        let para = Paragraph::new("Nord Dark Theme")
            .size(60.0)
            .bold()
            .color(snow3)
            .center();

        let mut xml = String::new();
        para.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:pPr algn="ctr">"#));
        assert!(xml.contains(r#"sz="6000" b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="ECEFF4"/>"#));
    }

    #[test]
    fn test_paragraph_spacing() {
        let mut xml = String::new();
        Paragraph::new("x")
            .space_before(12.0)
            .space_after(18.0)
            .to_xml(&mut xml)
            .unwrap();
        assert!(xml.contains(r#"<a:spcBef><a:spcPts val="1200"/></a:spcBef>"#));
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="1800"/></a:spcAft>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut xml = String::new();
        Paragraph::new("Frost & Aurora").to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:t>Frost &amp; Aurora</a:t>"));
    }

    #[test]
    fn test_frame_properties() {
        let frame = TextFrame::single(Paragraph::new("tip"))
            .word_wrap()
            .anchor_middle();
        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="square" anchor="ctr" rtlCol="0"/>"#));
    }
}
