/// Shape types and XML emission for slides.
use crate::common::unit::pt_to_emu;
use crate::error::{DeckError, Result};
use crate::palette::Rgb;
use crate::pptx::text::TextFrame;
use std::fmt::Write as FmtWrite;

/// Outline styling for a shape.
#[derive(Debug, Clone, Copy)]
pub enum Outline {
    /// No outline drawn
    None,
    /// Solid outline with a width in points
    Solid { color: Rgb, width_pt: f64 },
}

/// A shape on a slide (accent rectangle or text box).
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeKind {
    Rectangle {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Rgb,
        outline: Outline,
        text: Option<TextFrame>,
    },
    TextBox {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        frame: TextFrame,
    },
}

impl Shape {
    /// Create a new rectangle shape with a solid fill and no outline.
    pub(crate) fn new_rectangle(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Rgb,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Rectangle {
                x,
                y,
                width,
                height,
                fill,
                outline: Outline::None,
                text: None,
            },
        }
    }

    /// Create a new text box shape.
    pub(crate) fn new_text_box(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        frame: TextFrame,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                frame,
            },
        }
    }

    /// Builder method: give a rectangle a solid outline (only for rectangles).
    pub fn outline(&mut self, color: Rgb, width_pt: f64) -> &mut Self {
        if let ShapeKind::Rectangle {
            outline: ref mut o, ..
        } = self.kind
        {
            *o = Outline::Solid { color, width_pt };
        }
        self
    }

    /// Builder method: put a text frame inside a rectangle.
    ///
    /// Frames attached to a shape always wrap at the shape edge, unlike
    /// free-standing text boxes.
    pub fn text(&mut self, frame: TextFrame) -> &mut Self {
        if let ShapeKind::Rectangle {
            text: ref mut t, ..
        } = self.kind
        {
            *t = Some(frame.word_wrap());
        }
        self
    }

    /// Every palette color this shape draws with.
    pub(crate) fn colors(&self) -> Vec<Rgb> {
        let mut colors = Vec::new();
        match &self.kind {
            ShapeKind::Rectangle {
                fill,
                outline,
                text,
                ..
            } => {
                colors.push(*fill);
                if let Outline::Solid { color, .. } = outline {
                    colors.push(*color);
                }
                if let Some(frame) = text {
                    colors.extend(frame.paragraphs.iter().filter_map(|p| p.format.color));
                }
            },
            ShapeKind::TextBox { frame, .. } => {
                colors.extend(frame.paragraphs.iter().filter_map(|p| p.format.color));
            },
        }
        colors
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::Rectangle {
                x,
                y,
                width,
                height,
                fill,
                outline,
                text,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id, self.shape_id
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                Self::write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);

                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    fill.hex()
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;

                match outline {
                    Outline::None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                    Outline::Solid { color, width_pt } => {
                        write!(
                            xml,
                            r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                            pt_to_emu(*width_pt),
                            color.hex()
                        )
                        .map_err(|e| DeckError::Xml(e.to_string()))?;
                    },
                }
                xml.push_str("</p:spPr>");

                if let Some(frame) = text {
                    frame.to_xml(xml)?;
                }

                xml.push_str("</p:sp>");
            },
            ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                frame,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id, self.shape_id
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                Self::write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");

                frame.to_xml(xml)?;

                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }

    fn write_xfrm(xml: &mut String, x: i64, y: i64, width: i64, height: i64) -> Result<()> {
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)
            .map_err(|e| DeckError::Xml(e.to_string()))?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)
            .map_err(|e| DeckError::Xml(e.to_string()))?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches;
    use crate::palette;
    use crate::pptx::text::Paragraph;

    #[test]
    fn test_rectangle_xml() {
        let frost4 = palette::lookup("frost4").unwrap();
        let shape = Shape::new_rectangle(5, 0, 0, inches(0.3), inches(7.5), frost4);

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="5" name="Rectangle 5"/>"#));
        assert!(xml.contains(r#"<a:ext cx="274320" cy="6858000"/>"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="5E81AC"/></a:solidFill>"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_outlined_rectangle_with_text() {
        let polar3 = palette::lookup("polar3").unwrap();
        let frost4 = palette::lookup("frost4").unwrap();
        let mut shape = Shape::new_rectangle(6, 0, 0, inches(3.0), inches(0.8), polar3);
        shape
            .outline(frost4, 2.0)
            .text(TextFrame::single(Paragraph::new("Pro Tip")).anchor_middle());

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        // 2pt outline = 25400 EMU
        assert!(xml.contains(r#"<a:ln w="25400">"#));
        assert!(xml.contains("<a:t>Pro Tip</a:t>"));
        assert!(!xml.contains("<a:noFill/>"));
        // Shape-attached text wraps inside the shape.
        assert!(xml.contains(r#"wrap="square""#));
        assert!(!xml.contains(r#"wrap="none""#));
    }

    #[test]
    fn test_text_box_xml() {
        let frame = TextFrame::single(Paragraph::new("Thank You").size(54.0));
        let shape = Shape::new_text_box(7, inches(1.0), inches(2.8), inches(8.0), inches(1.0), frame);

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"name="Text Box 7""#));
        assert!(xml.contains("txBox=\"1\""));
        assert!(xml.contains(r#"sz="5400""#));
    }
}
