//! The Nord dark theme deck.
//!
//! Builds the six-slide template presentation: title, section header,
//! bulleted content, two-column comparison, palette showcase, and
//! closing slide. All geometry is fixed; every color is resolved through
//! [`crate::palette::lookup`], so a misspelled palette name aborts the
//! build instead of shipping a wrong color.

use crate::common::unit::inches;
use crate::error::Result;
use crate::palette::{self, AURORA, FROST};
use crate::pptx::{Paragraph, Presentation, Slide, SlideLayout, TextFrame};

const MARGIN: f64 = 0.5;
const ACCENT_LINE_HEIGHT: f64 = 0.08;

/// One summary line per slide, in deck order.
pub const SLIDE_CONTENTS: [&str; 6] = [
    "Title Slide (with geometric accents)",
    "Section Header (bold accent bar)",
    "Content Slide (bullet points + tip box)",
    "Two-Column Layout (comparison/parallel content)",
    "Color Palette Showcase (Frost & Aurora)",
    "Closing Slide (thank you + decorative elements)",
];

/// Feature bullets for the summary printout.
pub const FEATURES: [&str; 5] = [
    "Full Nord color palette integration",
    "Multiple layout options",
    "Decorative accent elements",
    "Professional typography hierarchy",
    "Improved Google Slides compatibility",
];

/// Build the complete six-slide presentation.
pub fn build() -> Result<Presentation> {
    let mut pres = Presentation::new();
    title_slide(&mut pres)?;
    section_header(&mut pres)?;
    content_slide(&mut pres)?;
    two_column_slide(&mut pres)?;
    palette_slide(&mut pres)?;
    closing_slide(&mut pres)?;
    Ok(pres)
}

/// Full-width horizontal accent line at the given vertical position.
fn accent_line(slide: &mut Slide, y: f64, color: &str) -> Result<()> {
    slide.add_rectangle(
        inches(MARGIN),
        inches(y),
        inches(9.0),
        inches(ACCENT_LINE_HEIGHT),
        palette::lookup(color)?,
    );
    Ok(())
}

/// Small decorative square in the top-right corner.
fn corner_accent(slide: &mut Slide, color: &str) -> Result<()> {
    slide.add_rectangle(
        inches(9.5),
        inches(0.2),
        inches(0.3),
        inches(0.3),
        palette::lookup(color)?,
    );
    Ok(())
}

fn dark_slide(pres: &mut Presentation, layout: SlideLayout) -> Result<&mut Slide> {
    let background = palette::lookup("polar1")?;
    let slide = pres.add_slide(layout);
    slide.set_background(background);
    Ok(slide)
}

fn title_slide(pres: &mut Presentation) -> Result<()> {
    let snow3 = palette::lookup("snow3")?;
    let frost2 = palette::lookup("frost2")?;
    let slide = dark_slide(pres, SlideLayout::TitleSlide)?;

    slide.set_title(
        Paragraph::new("Nord Dark Theme")
            .size(60.0)
            .bold()
            .color(snow3)
            .center(),
    );
    slide.set_subtitle(
        Paragraph::new("A Modern Presentation Template")
            .size(26.0)
            .color(frost2)
            .center(),
    );

    // Tall bar flush against the left edge
    slide.add_rectangle(
        0,
        0,
        inches(0.3),
        inches(7.5),
        palette::lookup("frost4")?,
    );
    accent_line(slide, 6.8, "frost3")?;

    // Row of small aurora squares under the subtitle
    for (i, color) in ["aurora_red", "aurora_orange", "aurora_yellow", "aurora_green"]
        .iter()
        .enumerate()
    {
        slide.add_rectangle(
            inches(3.5 + i as f64 * 0.8),
            inches(5.2),
            inches(0.5),
            inches(0.5),
            palette::lookup(color)?,
        );
    }
    Ok(())
}

fn section_header(pres: &mut Presentation) -> Result<()> {
    let snow3 = palette::lookup("snow3")?;
    let frost2 = palette::lookup("frost2")?;
    let slide = dark_slide(pres, SlideLayout::TitleOnly)?;

    slide.add_rectangle(
        0,
        inches(2.5),
        inches(0.15),
        inches(2.5),
        palette::lookup("aurora_purple")?,
    );

    slide.add_text_box(
        inches(0.5),
        inches(3.0),
        inches(9.0),
        inches(1.5),
        TextFrame::new(vec![
            Paragraph::new("Section Header")
                .size(54.0)
                .bold()
                .color(snow3),
            Paragraph::new("Use this for major section breaks")
                .size(24.0)
                .color(frost2)
                .space_before(12.0),
        ]),
    );
    Ok(())
}

fn content_slide(pres: &mut Presentation) -> Result<()> {
    let snow2 = palette::lookup("snow2")?;
    let frost2 = palette::lookup("frost2")?;
    let slide = dark_slide(pres, SlideLayout::TitleAndContent)?;

    slide.set_title(
        Paragraph::new("Key Features")
            .size(44.0)
            .bold()
            .color(palette::lookup("snow3")?),
    );
    accent_line(slide, 1.35, "frost4")?;
    corner_accent(slide, "aurora_green")?;

    for text in [
        "Clean, minimal design focused on content",
        "Nord color palette for comfortable reading",
        "Perfect for technical presentations",
        "Multiple layout options included",
    ] {
        slide.add_body(
            Paragraph::new(text)
                .size(24.0)
                .color(snow2)
                .space_after(18.0),
        );
    }

    // Outlined tip box at the bottom left
    slide
        .add_rectangle(
            inches(1.0),
            inches(6.2),
            inches(3.0),
            inches(0.8),
            palette::lookup("polar3")?,
        )
        .outline(palette::lookup("frost4")?, 2.0)
        .text(
            TextFrame::single(
                Paragraph::new("Pro Tip: Use Frost colors for accents")
                    .size(18.0)
                    .color(frost2)
                    .center(),
            )
            .anchor_middle(),
        );
    Ok(())
}

fn two_column_slide(pres: &mut Presentation) -> Result<()> {
    let snow1 = palette::lookup("snow1")?;
    let slide = dark_slide(pres, SlideLayout::TwoContent)?;

    slide.set_title(
        Paragraph::new("Two-Column Layout")
            .size(44.0)
            .bold()
            .color(palette::lookup("snow3")?),
    );
    accent_line(slide, 1.35, "frost3")?;
    corner_accent(slide, "aurora_orange")?;

    let column = |heading: &str,
                  heading_color: &str,
                  body: &str,
                  bullets: [&str; 3]|
     -> Result<TextFrame> {
        let mut paragraphs = vec![
            Paragraph::new(heading)
                .size(28.0)
                .bold()
                .color(palette::lookup(heading_color)?),
            Paragraph::new(body)
                .size(20.0)
                .color(snow1)
                .space_before(12.0),
        ];
        for item in bullets {
            paragraphs.push(
                Paragraph::new(format!("\u{2022} {item}"))
                    .size(18.0)
                    .color(snow1)
                    .space_before(8.0),
            );
        }
        Ok(TextFrame::new(paragraphs).word_wrap())
    };

    slide.add_text_box(
        inches(0.7),
        inches(2.2),
        inches(4.0),
        inches(4.5),
        column(
            "Left Column",
            "frost2",
            "Use this layout for comparisons, pros/cons, or parallel concepts.",
            ["Point one", "Point two", "Point three"],
        )?,
    );

    // Thin vertical divider between the columns
    slide.add_rectangle(
        inches(5.0),
        inches(2.0),
        inches(0.03),
        inches(4.8),
        palette::lookup("polar4")?,
    );

    slide.add_text_box(
        inches(5.3),
        inches(2.2),
        inches(4.0),
        inches(4.5),
        column(
            "Right Column",
            "aurora_green",
            "Each column can have its own accent color for visual distinction.",
            ["Feature A", "Feature B", "Feature C"],
        )?,
    );
    Ok(())
}

fn palette_slide(pres: &mut Presentation) -> Result<()> {
    let snow1 = palette::lookup("snow1")?;
    let snow2 = palette::lookup("snow2")?;
    let slide = dark_slide(pres, SlideLayout::TitleOnly)?;

    slide.set_title(
        Paragraph::new("Nord Color Palette")
            .size(44.0)
            .bold()
            .color(palette::lookup("snow3")?),
    );
    accent_line(slide, 1.35, "frost2")?;

    let groups: [(&str, &[&str]); 2] = [("Frost", &FROST), ("Aurora", &AURORA)];
    let mut y = 2.2;
    for (group_name, colors) in groups {
        slide.add_text_box(
            inches(0.8),
            inches(y),
            inches(2.0),
            inches(0.5),
            TextFrame::single(
                Paragraph::new(group_name).size(24.0).bold().color(snow2),
            ),
        );

        let mut x = 2.5;
        for color in colors {
            slide.add_rectangle(
                inches(x),
                inches(y),
                inches(1.2),
                inches(0.8),
                palette::lookup(color)?,
            );
            // Key label under each swatch
            slide.add_text_box(
                inches(x),
                inches(y + 0.85),
                inches(1.2),
                inches(0.3),
                TextFrame::single(
                    Paragraph::new(*color).size(10.0).color(snow1).center(),
                ),
            );
            x += 1.3;
        }
        y += 1.5;
    }

    slide.add_text_box(
        inches(1.0),
        inches(6.3),
        inches(8.0),
        inches(0.8),
        TextFrame::single(
            Paragraph::new(
                "Use Frost colors for UI elements and links \u{2022} \
                 Use Aurora colors for highlights and callouts",
            )
            .size(16.0)
            .color(palette::lookup("polar4")?)
            .center(),
        ),
    );
    Ok(())
}

fn closing_slide(pres: &mut Presentation) -> Result<()> {
    let slide = dark_slide(pres, SlideLayout::Blank)?;

    for (i, color) in ["frost4", "frost3", "frost2", "frost3", "frost4"]
        .iter()
        .enumerate()
    {
        slide.add_rectangle(
            inches(i as f64 * 2.0),
            0,
            inches(1.8),
            inches(0.2),
            palette::lookup(color)?,
        );
    }

    slide.add_text_box(
        inches(1.0),
        inches(2.8),
        inches(8.0),
        inches(1.0),
        TextFrame::single(
            Paragraph::new("Thank You")
                .size(54.0)
                .bold()
                .color(palette::lookup("snow3")?)
                .center(),
        ),
    );
    slide.add_text_box(
        inches(1.0),
        inches(4.0),
        inches(8.0),
        inches(0.6),
        TextFrame::single(
            Paragraph::new("Made with Nord Dark Theme")
                .size(24.0)
                .color(palette::lookup("frost2")?)
                .center(),
        ),
    );

    for (i, color) in AURORA.iter().enumerate() {
        slide.add_rectangle(
            inches(3.0 + i as f64 * 0.9),
            inches(5.5),
            inches(0.6),
            inches(0.6),
            palette::lookup(color)?,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::shape::ShapeKind;

    #[test]
    fn test_deck_has_six_slides() {
        let pres = build().unwrap();
        assert_eq!(pres.slides().len(), 6);
    }

    #[test]
    fn test_slide_layouts() {
        let pres = build().unwrap();
        let layouts: Vec<SlideLayout> =
            pres.slides().iter().map(|s| s.layout()).collect();
        assert_eq!(
            layouts,
            vec![
                SlideLayout::TitleSlide,
                SlideLayout::TitleOnly,
                SlideLayout::TitleAndContent,
                SlideLayout::TwoContent,
                SlideLayout::TitleOnly,
                SlideLayout::Blank,
            ]
        );
    }

    #[test]
    fn test_every_slide_is_dark() {
        let polar1 = palette::lookup("polar1").unwrap();
        let pres = build().unwrap();
        for slide in pres.slides() {
            assert_eq!(slide.background.as_ref().map(|b| b.color()), Some(polar1));
        }
    }

    #[test]
    fn test_all_colors_come_from_the_palette() {
        let pres = build().unwrap();
        for slide in pres.slides() {
            for color in slide.colors() {
                assert!(
                    palette::contains(color),
                    "color {} is not in the Nord palette",
                    color.hex()
                );
            }
        }
    }

    #[test]
    fn test_palette_slide_shows_every_frost_and_aurora_swatch() {
        let pres = build().unwrap();
        let slide = &pres.slides()[4];

        // Swatches are the 1.2 x 0.8 inch rectangles.
        let swatch_fills: Vec<_> = slide
            .shapes
            .iter()
            .filter_map(|shape| match &shape.kind {
                ShapeKind::Rectangle {
                    width,
                    height,
                    fill,
                    ..
                } if *width == inches(1.2) && *height == inches(0.8) => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(swatch_fills.len(), FROST.len() + AURORA.len());
        for name in FROST.iter().chain(AURORA.iter()) {
            assert!(swatch_fills.contains(&palette::lookup(name).unwrap()));
        }

        // Every swatch is labeled with its palette key.
        let xml = slide.to_xml().unwrap();
        for name in FROST.iter().chain(AURORA.iter()) {
            assert!(xml.contains(&format!("<a:t>{name}</a:t>")));
        }
    }

    #[test]
    fn test_closing_slide_carries_all_aurora_accents() {
        let pres = build().unwrap();
        let slide = &pres.slides()[5];
        for name in AURORA {
            let color = palette::lookup(name).unwrap();
            assert!(slide.colors().contains(&color));
        }
    }

    #[test]
    fn test_tip_box_outline() {
        let pres = build().unwrap();
        let xml = pres.slides()[2].to_xml().unwrap();
        assert!(xml.contains("<a:t>Pro Tip: Use Frost colors for accents</a:t>"));
        // 2pt outline in frost4
        assert!(xml.contains(r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="5E81AC"/>"#));
    }

    #[test]
    fn test_tip_box_text_wraps_inside_the_box() {
        // The tip string is wider than the 3 inch box at 18pt, so its
        // frame must wrap rather than spill past the outline.
        let pres = build().unwrap();
        let xml = pres.slides()[2].to_xml().unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="square" anchor="ctr" rtlCol="0"/>"#));
        assert!(!xml.contains(r#"wrap="none""#));
    }
}
