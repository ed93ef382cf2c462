/// Slide writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::format::{Geometry, TextFormat};
use std::fmt::Write as FmtWrite;

use super::shape::MutableShape;

/// A slide being written, based on the presentation's blank layout.
#[derive(Debug)]
pub struct MutableSlide {
    /// Slide ID in `<p:sldIdLst>`
    slide_id: u32,
    /// Shapes in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Next shape ID; 1 is taken by the shape tree itself
    next_shape_id: u32,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            next_shape_id: 2,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Add a text box with the given position, size and formatting.
    ///
    /// Newlines in `text` start new paragraphs; vertical tabs become line breaks.
    pub fn add_text_box(&mut self, text: &str, geometry: Geometry, format: TextFormat) -> &mut MutableShape {
        let mut shape = MutableShape::new_text_box(self.next_shape_id, text.to_string(), geometry);
        shape.set_text_format(format);
        self.next_shape_id += 1;
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get the shapes in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 768);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::parts::parse_shape_tree;

    #[test]
    fn test_shape_ids_are_unique() {
        let mut slide = MutableSlide::new(256);
        slide.add_text_box("a", Geometry::default(), TextFormat::default());
        slide.add_text_box("b", Geometry::default(), TextFormat::default());
        let ids: Vec<u32> = slide.shapes().iter().map(|s| s.shape_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_slide_xml_reads_back() {
        let mut slide = MutableSlide::new(256);
        let bold = TextFormat {
            bold: Some(true),
            ..TextFormat::default()
        };
        slide.add_text_box("Q3 & Q4", Geometry::new(10, 20, 30, 40), bold);

        let xml = slide.to_xml().unwrap();
        let shapes = parse_shape_tree(xml.as_bytes()).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].text().as_deref(), Some("Q3 & Q4"));
        assert_eq!(shapes[0].geometry(), Some(Geometry::new(10, 20, 30, 40)));
        assert_eq!(
            shapes[0].text_body().unwrap().first_paragraph_format().bold,
            Some(true)
        );
    }

    #[test]
    fn test_empty_slide() {
        let slide = MutableSlide::new(256);
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains("<p:spTree>"));
        assert!(parse_shape_tree(xml.as_bytes()).unwrap().is_empty());
    }
}
