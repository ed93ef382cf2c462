/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::packuri::CONTENT_TYPES_URI;
use crate::ooxml::opc::{PackURI, PhysPkgWriter, Relationship, Relationships};
use crate::ooxml::pptx::format::SlideSize;
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;

use super::slide::MutableSlide;

/// Relationship IDs of `presentation.xml` before the first slide.
const PRESENTATION_FIXED_RELS: usize = 5;

/// A mutable PowerPoint presentation for writing.
///
/// Every slide is based on a single blank layout. The package is assembled in
/// memory by [`to_bytes`](Self::to_bytes).
///
/// # Examples
///
/// ```rust
/// use deckforge::ooxml::pptx::MutablePresentation;
/// use deckforge::ooxml::pptx::format::{Geometry, TextFormat};
///
/// let mut pres = MutablePresentation::new();
/// pres.add_slide()
///     .add_text_box("Hello", Geometry::new(914_400, 914_400, 4_572_000, 914_400), TextFormat::default());
/// let bytes = pres.to_bytes()?;
/// assert!(bytes.starts_with(b"PK"));
/// # Ok::<(), deckforge::ooxml::OoxmlError>(())
/// ```
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide dimensions in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_size: SlideSize,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_size: SlideSize::default(),
        }
    }

    /// Add a new blank slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slides in presentation order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the slide size.
    pub fn slide_size(&self) -> SlideSize {
        self.slide_size
    }

    /// Set the slide size.
    pub fn set_slide_size(&mut self, size: SlideSize) {
        self.slide_size = size;
    }

    /// Generate presentation.xml content.
    pub fn generate_presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    slide_rel_id(index)
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_size.width, self.slide_size.height
        )?;

        xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Generate the relationships of presentation.xml.
    fn generate_presentation_rels(&self) -> Result<String> {
        let mut rels = Relationships::new("/ppt");
        rels.push(Relationship::new("rId1", rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"));
        rels.push(Relationship::new("rId2", rt::PRES_PROPS, "presProps.xml"));
        rels.push(Relationship::new("rId3", rt::VIEW_PROPS, "viewProps.xml"));
        rels.push(Relationship::new("rId4", rt::THEME, "theme/theme1.xml"));
        rels.push(Relationship::new("rId5", rt::TABLE_STYLES, "tableStyles.xml"));
        for index in 0..self.slides.len() {
            rels.push(Relationship::new(
                slide_rel_id(index),
                rt::SLIDE,
                format!("slides/slide{}.xml", index + 1),
            ));
        }
        rels.to_xml()
    }

    /// Generate [Content_Types].xml for the package.
    fn generate_content_types(&self) -> Result<String> {
        let mut xml = String::with_capacity(1536 + self.slides.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES)?;
        write!(
            xml,
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            ct::OPC_RELATIONSHIPS
        )?;
        write!(xml, r#"<Default Extension="xml" ContentType="{}"/>"#, ct::XML)?;

        let overrides = [
            ("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN),
            ("/ppt/slideMasters/slideMaster1.xml", ct::PML_SLIDE_MASTER),
            ("/ppt/slideLayouts/slideLayout1.xml", ct::PML_SLIDE_LAYOUT),
            ("/ppt/theme/theme1.xml", ct::OFC_THEME),
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS),
            ("/ppt/tableStyles.xml", ct::PML_TABLE_STYLES),
        ];
        for (partname, content_type) in overrides {
            write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, content_type
            )?;
        }
        for index in 0..self.slides.len() {
            write!(
                xml,
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}"/>"#,
                index + 1,
                ct::PML_SLIDE
            )?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }

    /// Assemble the complete .pptx package in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = PhysPkgWriter::new();

        writer.write(&partname(CONTENT_TYPES_URI)?, self.generate_content_types()?.as_bytes())?;

        let mut root_rels = Relationships::new("/");
        root_rels.push(Relationship::new("rId1", rt::OFFICE_DOCUMENT, "ppt/presentation.xml"));
        writer.write(&partname("/_rels/.rels")?, root_rels.to_xml()?.as_bytes())?;

        writer.write(
            &partname("/ppt/presentation.xml")?,
            self.generate_presentation_xml()?.as_bytes(),
        )?;
        writer.write(
            &partname("/ppt/_rels/presentation.xml.rels")?,
            self.generate_presentation_rels()?.as_bytes(),
        )?;

        let mut master_rels = Relationships::new("/ppt/slideMasters");
        master_rels.push(Relationship::new(
            "rId1",
            rt::SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml",
        ));
        master_rels.push(Relationship::new("rId2", rt::THEME, "../theme/theme1.xml"));
        writer.write(
            &partname("/ppt/slideMasters/slideMaster1.xml")?,
            template::default_slide_master_xml().as_bytes(),
        )?;
        writer.write(
            &partname("/ppt/slideMasters/_rels/slideMaster1.xml.rels")?,
            master_rels.to_xml()?.as_bytes(),
        )?;

        let mut layout_rels = Relationships::new("/ppt/slideLayouts");
        layout_rels.push(Relationship::new(
            "rId1",
            rt::SLIDE_MASTER,
            "../slideMasters/slideMaster1.xml",
        ));
        writer.write(
            &partname("/ppt/slideLayouts/slideLayout1.xml")?,
            template::blank_slide_layout_xml().as_bytes(),
        )?;
        writer.write(
            &partname("/ppt/slideLayouts/_rels/slideLayout1.xml.rels")?,
            layout_rels.to_xml()?.as_bytes(),
        )?;

        writer.write(&partname("/ppt/theme/theme1.xml")?, template::default_theme_xml().as_bytes())?;
        writer.write(&partname("/ppt/presProps.xml")?, template::default_pres_props_xml().as_bytes())?;
        writer.write(&partname("/ppt/viewProps.xml")?, template::default_view_props_xml().as_bytes())?;
        writer.write(
            &partname("/ppt/tableStyles.xml")?,
            template::default_table_styles_xml().as_bytes(),
        )?;

        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = partname(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            writer.write(&slide_uri, slide.to_xml()?.as_bytes())?;

            let mut slide_rels = Relationships::new(slide_uri.base_uri());
            slide_rels.push(Relationship::new(
                "rId1",
                rt::SLIDE_LAYOUT,
                "../slideLayouts/slideLayout1.xml",
            ));
            let rels_uri = slide_uri.rels_uri().map_err(OoxmlError::InvalidPackUri)?;
            writer.write(&rels_uri, slide_rels.to_xml()?.as_bytes())?;
        }

        writer.finish()
    }

}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

fn slide_rel_id(index: usize) -> String {
    format!("rId{}", index + PRESENTATION_FIXED_RELS + 1)
}

fn partname(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(OoxmlError::InvalidPackUri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::Package;
    use crate::ooxml::pptx::format::{Geometry, TextFormat};

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_size().width, 9144000);
        assert_eq!(pres.slide_size().height, 6858000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slides()[1].slide_id(), 257);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.set_slide_size(SlideSize {
            width: 12_192_000,
            height: 6_858_000,
        });

        let xml = pres.generate_presentation_xml().unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_empty_presentation_has_no_slide_list() {
        let xml = MutablePresentation::new().generate_presentation_xml().unwrap();
        assert!(!xml.contains("<p:sldIdLst>"));
    }

    #[test]
    fn test_package_reads_back() {
        let mut pres = MutablePresentation::new();
        pres.add_slide().add_text_box(
            "First",
            Geometry::new(1, 2, 3, 4),
            TextFormat::default(),
        );
        pres.add_slide().add_text_box(
            "Second",
            Geometry::new(5, 6, 7, 8),
            TextFormat::default(),
        );

        let mut pkg = Package::from_bytes(pres.to_bytes().unwrap()).unwrap();
        assert_eq!(pkg.slide_count().unwrap(), 2);

        let first = pkg.first_slide().unwrap().unwrap();
        assert_eq!(first.slide_size, Some(SlideSize::default()));
        assert_eq!(first.shapes.len(), 1);
        assert_eq!(first.shapes[0].text().as_deref(), Some("First"));
    }
}
