//! Presentation template parts.
//!
//! Minimal valid templates for the fixed parts of the package: theme,
//! slide master, slide layouts, and the property parts. Templates are
//! stored already minified. The theme's color scheme maps onto the Nord
//! palette so placeholder text inherits sensible colors even before the
//! deck paints its own.

use crate::error::{DeckError, Result};
use crate::palette::Rgb;
use crate::pptx::layout::SlideLayout;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// The empty group-shape header every `spTree` opens with.
pub(crate) const SP_TREE_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

// Stock placeholder geometry for the 10 x 7.5 inch canvas, in EMU.
// Slides inherit these through the layout chain, so a slide placeholder
// with an empty spPr still lands where PowerPoint's own templates put it.
const TITLE_XFRM: (i64, i64, i64, i64) = (457_200, 274_638, 8_229_600, 1_143_000);
const BODY_XFRM: (i64, i64, i64, i64) = (457_200, 1_600_200, 8_229_600, 4_525_963);
const CTR_TITLE_XFRM: (i64, i64, i64, i64) = (685_800, 2_130_425, 7_772_400, 1_470_025);
const SUBTITLE_XFRM: (i64, i64, i64, i64) = (1_371_600, 3_886_200, 6_400_800, 1_752_600);
const LEFT_BODY_XFRM: (i64, i64, i64, i64) = (457_200, 1_600_200, 4_038_600, 4_525_963);
const RIGHT_BODY_XFRM: (i64, i64, i64, i64) = (4_648_200, 1_600_200, 4_038_600, 4_525_963);

/// Emit a positioned, empty placeholder shape for a layout or master.
fn push_placeholder_sp(
    xml: &mut String,
    id: u32,
    name: &str,
    ph_type: &str,
    idx: Option<u32>,
    xfrm: (i64, i64, i64, i64),
) {
    let (x, y, cx, cy) = xfrm;
    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(&format!(r#"<p:cNvPr id="{id}" name="{name}"/>"#));
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    match idx {
        Some(idx) => xml.push_str(&format!(
            r#"<p:nvPr><p:ph type="{ph_type}" idx="{idx}"/></p:nvPr>"#
        )),
        None => xml.push_str(&format!(r#"<p:nvPr><p:ph type="{ph_type}"/></p:nvPr>"#)),
    }
    xml.push_str("</p:nvSpPr><p:spPr><a:xfrm>");
    xml.push_str(&format!(
        r#"<a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/>"#
    ));
    xml.push_str(concat!(
        r#"</a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr/><a:lstStyle/>"#,
        r#"<a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
    ));
}

/// Generate the theme part with the Nord color scheme.
pub(crate) fn theme_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Nord">"#);
    xml.push_str("<a:themeElements>");

    // Scheme slots filled from the palette: polar for dark, snow for
    // light, frost/aurora for accents.
    xml.push_str(r#"<a:clrScheme name="Nord">"#);
    for (slot, color) in [
        ("dk1", "2E3440"),
        ("lt1", "ECEFF4"),
        ("dk2", "3B4252"),
        ("lt2", "E5E9F0"),
        ("accent1", "88C0D0"),
        ("accent2", "81A1C1"),
        ("accent3", "5E81AC"),
        ("accent4", "A3BE8C"),
        ("accent5", "B48EAD"),
        ("accent6", "D08770"),
        ("hlink", "88C0D0"),
        ("folHlink", "B48EAD"),
    ] {
        xml.push_str(&format!(
            r#"<a:{slot}><a:srgbClr val="{color}"/></a:{slot}>"#
        ));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(concat!(
        r#"<a:fontScheme name="Nord">"#,
        r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
        r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
        r#"</a:fontScheme>"#,
    ));

    xml.push_str(r#"<a:fmtScheme name="Nord">"#);
    xml.push_str(concat!(
        "<a:fillStyleLst>",
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        "</a:fillStyleLst>",
    ));
    xml.push_str("<a:lnStyleLst>");
    for width in ["9525", "25400", "38100"] {
        xml.push_str(&format!(
            concat!(
                r#"<a:ln w="{}" cap="flat" cmpd="sng" algn="ctr">"#,
                r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
                r#"<a:prstDash val="solid"/></a:ln>"#,
            ),
            width
        ));
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str(concat!(
        "<a:effectStyleLst>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>",
        "</a:effectStyleLst>",
    ));
    xml.push_str(concat!(
        "<a:bgFillStyleLst>",
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        "</a:bgFillStyleLst>",
    ));
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("</a:theme>");
    xml
}

/// Generate the slide master part.
///
/// The color map points backgrounds at the dark theme slots (`bg1` =
/// `dk1`), which is what makes the master itself render dark.
pub(crate) fn slide_master_xml(layout_rel_ids: &[String]) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    ));
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_HEADER);
    push_placeholder_sp(&mut xml, 2, "Title Placeholder 1", "title", None, TITLE_XFRM);
    push_placeholder_sp(&mut xml, 3, "Text Placeholder 2", "body", Some(1), BODY_XFRM);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="dk1" tx1="lt1" bg2="dk2" tx2="lt2" "#,
        r#"accent1="accent1" accent2="accent2" accent3="accent3" "#,
        r#"accent4="accent4" accent5="accent5" accent6="accent6" "#,
        r#"hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str("<p:sldLayoutIdLst>");
    for (index, rel_id) in layout_rel_ids.iter().enumerate() {
        xml.push_str(&format!(
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            2_147_483_649_u64 + index as u64,
            rel_id
        ));
    }
    xml.push_str("</p:sldLayoutIdLst>");
    xml.push_str("<p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles>");
    xml.push_str("</p:sldMaster>");
    xml
}

/// Generate a slide layout part.
pub(crate) fn slide_layout_xml(layout: SlideLayout) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        concat!(
            r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
            r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
            r#"type="{}" preserve="1">"#,
        ),
        layout.type_attr()
    ));
    xml.push_str(&format!(r#"<p:cSld name="{}">"#, layout.name()));
    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_HEADER);
    match layout {
        SlideLayout::TitleSlide => {
            push_placeholder_sp(&mut xml, 2, "Title 1", "ctrTitle", None, CTR_TITLE_XFRM);
            push_placeholder_sp(&mut xml, 3, "Subtitle 2", "subTitle", Some(1), SUBTITLE_XFRM);
        },
        SlideLayout::TitleAndContent => {
            push_placeholder_sp(&mut xml, 2, "Title 1", "title", None, TITLE_XFRM);
            push_placeholder_sp(
                &mut xml,
                3,
                "Content Placeholder 2",
                "body",
                Some(1),
                BODY_XFRM,
            );
        },
        SlideLayout::TwoContent => {
            push_placeholder_sp(&mut xml, 2, "Title 1", "title", None, TITLE_XFRM);
            push_placeholder_sp(
                &mut xml,
                3,
                "Content Placeholder 2",
                "body",
                Some(1),
                LEFT_BODY_XFRM,
            );
            push_placeholder_sp(
                &mut xml,
                4,
                "Content Placeholder 3",
                "body",
                Some(2),
                RIGHT_BODY_XFRM,
            );
        },
        SlideLayout::TitleOnly => {
            push_placeholder_sp(&mut xml, 2, "Title 1", "title", None, TITLE_XFRM);
        },
        SlideLayout::Blank => {},
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// Rewrite a layout or master part, attaching a solid dark background as
/// the first child of `<p:cSld>`.
///
/// Best effort by contract: the caller skips any template this pass
/// cannot rewrite and uses it unmodified.
pub(crate) fn with_solid_background(xml: &str, color: Rgb) -> Result<String> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.local_name().as_ref() == b"cSld" => {
                let pos = reader.buffer_position() as usize;
                let mut out = String::with_capacity(xml.len() + 160);
                out.push_str(&xml[..pos]);
                out.push_str(&format!(
                    concat!(
                        "<p:bg><p:bgPr><a:solidFill>",
                        r#"<a:srgbClr val="{}"/>"#,
                        "</a:solidFill><a:effectLst/></p:bgPr></p:bg>",
                    ),
                    color.hex()
                ));
                out.push_str(&xml[pos..]);
                return Ok(out);
            },
            Event::Eof => {
                return Err(DeckError::Xml(
                    "no cSld element to attach a background to".to_string(),
                ));
            },
            _ => {},
        }
    }
}

/// Generate presProps.xml.
pub(crate) fn pres_props_xml() -> String {
    format!(
        r#"{XML_DECL}<p:presentationPr xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"/>"#
    )
}

/// Generate viewProps.xml.
pub(crate) fn view_props_xml() -> String {
    format!(
        r#"{XML_DECL}<p:viewPr xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"/>"#
    )
}

/// Generate tableStyles.xml.
pub(crate) fn table_styles_xml() -> String {
    format!(
        r#"{XML_DECL}<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

/// Generate docProps/core.xml.
///
/// Deliberately carries no created/modified timestamps so repeated runs
/// produce identical bytes.
pub(crate) fn core_props_xml() -> String {
    format!(concat!(
        r#"{}<cp:coreProperties "#,
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
        "<dc:title>Nord Dark Theme</dc:title>",
        "<dc:creator>norddeck</dc:creator>",
        "</cp:coreProperties>",
    ), XML_DECL)
}

/// Generate docProps/app.xml.
pub(crate) fn app_props_xml(slide_count: usize) -> String {
    format!(concat!(
        r#"{}<Properties "#,
        r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
        "<Application>norddeck</Application>",
        "<Slides>{}</Slides>",
        "</Properties>",
    ), XML_DECL, slide_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_theme_uses_nord_scheme() {
        let xml = theme_xml();
        assert!(xml.contains(r#"<a:dk1><a:srgbClr val="2E3440"/></a:dk1>"#));
        assert!(xml.contains(r#"<a:lt1><a:srgbClr val="ECEFF4"/></a:lt1>"#));
        assert!(xml.contains(r#"<a:fmtScheme name="Nord">"#));
    }

    #[test]
    fn test_master_lists_layouts() {
        let rel_ids: Vec<String> = (1..=5).map(|i| format!("rId{i}")).collect();
        let xml = slide_master_xml(&rel_ids);
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483653" r:id="rId5"/>"#));
        assert!(xml.contains(r#"bg1="dk1""#));
        // The master anchors the inheritance chain with positioned
        // title and body placeholders.
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains(r#"<a:off x="457200" y="274638"/>"#));
    }

    #[test]
    fn test_layout_xml() {
        let xml = slide_layout_xml(SlideLayout::TwoContent);
        assert!(xml.contains(r#"type="twoObj""#));
        assert!(xml.contains(r#"<p:cSld name="Two Content">"#));
    }

    #[test]
    fn test_title_slide_layout_positions_its_placeholders() {
        let xml = slide_layout_xml(SlideLayout::TitleSlide);
        let title = xml.find(r#"<p:ph type="ctrTitle"/>"#).unwrap();
        let title_off = xml.find(r#"<a:off x="685800" y="2130425"/>"#).unwrap();
        let subtitle = xml.find(r#"<p:ph type="subTitle" idx="1"/>"#).unwrap();
        let subtitle_off = xml.find(r#"<a:off x="1371600" y="3886200"/>"#).unwrap();
        assert!(title < title_off && title_off < subtitle && subtitle < subtitle_off);
    }

    #[test]
    fn test_content_layouts_position_their_bodies() {
        let xml = slide_layout_xml(SlideLayout::TitleAndContent);
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<a:off x="457200" y="274638"/>"#));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains(r#"<a:ext cx="8229600" cy="4525963"/>"#));

        let xml = slide_layout_xml(SlideLayout::TwoContent);
        assert!(xml.contains(r#"<p:ph type="body" idx="2"/>"#));
        assert!(xml.contains(r#"<a:off x="4648200" y="1600200"/>"#));

        // Blank stays empty.
        let xml = slide_layout_xml(SlideLayout::Blank);
        assert!(!xml.contains("<p:ph"));
    }

    #[test]
    fn test_recolor_inserts_bg_after_csld() {
        let polar1 = palette::lookup("polar1").unwrap();
        let xml = slide_layout_xml(SlideLayout::Blank);
        let recolored = with_solid_background(&xml, polar1).unwrap();
        let csld = recolored.find("<p:cSld").unwrap();
        let bg = recolored.find("<p:bg>").unwrap();
        let tree = recolored.find("<p:spTree>").unwrap();
        assert!(csld < bg && bg < tree);
        assert!(recolored.contains(r#"<a:srgbClr val="2E3440"/>"#));
    }

    #[test]
    fn test_recolor_rejects_bgless_xml() {
        let polar1 = palette::lookup("polar1").unwrap();
        assert!(with_solid_background("<p:sld></p:sld>", polar1).is_err());
    }

    #[test]
    fn test_core_props_carry_no_timestamps() {
        let xml = core_props_xml();
        assert!(!xml.contains("dcterms"));
        assert!(xml.contains("<dc:title>Nord Dark Theme</dc:title>"));
    }
}
