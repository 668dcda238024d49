//! Package assembly: serialize a [`Presentation`] into .pptx bytes.
//!
//! The part list and the relationships between parts are rebuilt from
//! scratch on every save, in a fixed order, so the archive is
//! byte-for-byte reproducible.

use crate::error::Result;
use crate::opc::constants::{content_type as ct, relationship_type as rt};
use crate::opc::packuri::PackURI;
use crate::opc::pkgwriter::{ContentTypesItem, PhysPkgWriter};
use crate::opc::rel::Relationships;
use crate::palette;
use crate::pptx::layout::SlideLayout;
use crate::pptx::presentation::Presentation;
use crate::pptx::template;

/// One serialized part plus its (possibly empty) relationship set.
struct Part {
    partname: PackURI,
    blob: String,
    rels: Relationships,
}

/// Serialize the presentation into a complete OPC package.
pub(crate) fn write_package(pres: &Presentation) -> Result<Vec<u8>> {
    let mut content_types = ContentTypesItem::new();
    let mut parts: Vec<Part> = Vec::new();

    let add = |content_types: &mut ContentTypesItem,
               parts: &mut Vec<Part>,
               uri: &str,
               content_type: &str,
               blob: String,
               rels: Relationships|
     -> Result<()> {
        let partname = PackURI::new(uri)?;
        content_types.add_override(&partname, content_type);
        parts.push(Part {
            partname,
            blob,
            rels,
        });
        Ok(())
    };

    // /ppt/presentation.xml
    let mut pres_rels = Relationships::new();
    let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    let slide_rel_ids: Vec<String> = (1..=pres.slides().len())
        .map(|n| pres_rels.add(rt::SLIDE, &format!("slides/slide{n}.xml")))
        .collect();
    pres_rels.add(rt::PRES_PROPS, "presProps.xml");
    pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
    pres_rels.add(rt::THEME, "theme/theme1.xml");
    pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");
    add(
        &mut content_types,
        &mut parts,
        "/ppt/presentation.xml",
        ct::PML_PRESENTATION_MAIN,
        pres.to_xml(&master_rel_id, &slide_rel_ids)?,
        pres_rels,
    )?;

    // /ppt/slideMasters/slideMaster1.xml
    let mut master_rels = Relationships::new();
    let layout_rel_ids: Vec<String> = SlideLayout::all()
        .iter()
        .map(|layout| {
            master_rels.add(
                rt::SLIDE_LAYOUT,
                &format!("../slideLayouts/slideLayout{}.xml", layout.part_number()),
            )
        })
        .collect();
    master_rels.add(rt::THEME, "../theme/theme1.xml");
    add(
        &mut content_types,
        &mut parts,
        "/ppt/slideMasters/slideMaster1.xml",
        ct::PML_SLIDE_MASTER,
        template::slide_master_xml(&layout_rel_ids),
        master_rels,
    )?;

    // /ppt/slideLayouts/slideLayoutN.xml, each repainted dark where the
    // template admits a background; a layout that cannot be repainted is
    // shipped as-is.
    let polar1 = palette::lookup("polar1")?;
    for layout in SlideLayout::all() {
        let xml = template::slide_layout_xml(layout);
        let xml = template::with_solid_background(&xml, polar1).unwrap_or(xml);
        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        add(
            &mut content_types,
            &mut parts,
            &format!("/ppt/slideLayouts/slideLayout{}.xml", layout.part_number()),
            ct::PML_SLIDE_LAYOUT,
            xml,
            layout_rels,
        )?;
    }

    // /ppt/theme/theme1.xml and the property parts
    add(
        &mut content_types,
        &mut parts,
        "/ppt/theme/theme1.xml",
        ct::OFC_THEME,
        template::theme_xml(),
        Relationships::new(),
    )?;
    add(
        &mut content_types,
        &mut parts,
        "/ppt/presProps.xml",
        ct::PML_PRES_PROPS,
        template::pres_props_xml(),
        Relationships::new(),
    )?;
    add(
        &mut content_types,
        &mut parts,
        "/ppt/viewProps.xml",
        ct::PML_VIEW_PROPS,
        template::view_props_xml(),
        Relationships::new(),
    )?;
    add(
        &mut content_types,
        &mut parts,
        "/ppt/tableStyles.xml",
        ct::PML_TABLE_STYLES,
        template::table_styles_xml(),
        Relationships::new(),
    )?;

    // /ppt/slides/slideN.xml
    for (index, slide) in pres.slides().iter().enumerate() {
        let mut slide_rels = Relationships::new();
        slide_rels.add(
            rt::SLIDE_LAYOUT,
            &format!(
                "../slideLayouts/slideLayout{}.xml",
                slide.layout().part_number()
            ),
        );
        add(
            &mut content_types,
            &mut parts,
            &format!("/ppt/slides/slide{}.xml", index + 1),
            ct::PML_SLIDE,
            slide.to_xml()?,
            slide_rels,
        )?;
    }

    // /docProps/core.xml and /docProps/app.xml
    add(
        &mut content_types,
        &mut parts,
        "/docProps/core.xml",
        ct::OPC_CORE_PROPERTIES,
        template::core_props_xml(),
        Relationships::new(),
    )?;
    add(
        &mut content_types,
        &mut parts,
        "/docProps/app.xml",
        ct::OFC_EXTENDED_PROPERTIES,
        template::app_props_xml(pres.slides().len()),
        Relationships::new(),
    )?;

    // Package-level relationships
    let mut pkg_rels = Relationships::new();
    pkg_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
    pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
    pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

    let mut writer = PhysPkgWriter::new();
    writer.write(
        &ContentTypesItem::partname()?,
        content_types.to_xml().as_bytes(),
    )?;
    writer.write(&PackURI::new("/_rels/.rels")?, pkg_rels.to_xml().as_bytes())?;
    for part in &parts {
        writer.write(&part.partname, part.blob.as_bytes())?;
        if !part.rels.is_empty() {
            writer.write(
                &part.partname.rels_uri()?,
                part.rels.to_xml().as_bytes(),
            )?;
        }
    }
    writer.finish()
}
