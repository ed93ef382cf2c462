/// Shape types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Geometry, TextFormat};
use crate::ooxml::pptx::shapes::LINE_BREAK;
use std::fmt::Write as FmtWrite;

/// A shape on a slide being written.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        text: String,
        geometry: Geometry,
        format: TextFormat,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, text: String, geometry: Geometry) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                text,
                geometry,
                format: TextFormat::default(),
            },
        }
    }

    /// Set text formatting for this shape.
    pub fn set_text_format(&mut self, format: TextFormat) -> &mut Self {
        let ShapeType::TextBox { format: f, .. } = &mut self.shape_type;
        *f = format;
        self
    }

    /// Get the text of a text box.
    pub fn text(&self) -> &str {
        let ShapeType::TextBox { text, .. } = &self.shape_type;
        text
    }

    /// Get the position and size of the shape.
    pub fn geometry(&self) -> Geometry {
        let ShapeType::TextBox { geometry, .. } = &self.shape_type;
        *geometry
    }

    /// Get the text formatting of a text box.
    pub fn text_format(&self) -> TextFormat {
        let ShapeType::TextBox { format, .. } = &self.shape_type;
        *format
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                text,
                geometry,
                format,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id.saturating_sub(1)
                )?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{}" y="{}"/>"#, geometry.x, geometry.y)?;
                write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, geometry.cx, geometry.cy)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0">"#);
                xml.push_str(r#"<a:spAutoFit/>"#);
                xml.push_str("</a:bodyPr>");
                xml.push_str("<a:lstStyle/>");
                for paragraph in text.split('\n') {
                    write_paragraph(xml, paragraph, format)?;
                }
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
        }
        Ok(())
    }
}

/// Write one `<a:p>`; vertical tabs become `<a:br/>` between runs.
fn write_paragraph(xml: &mut String, paragraph: &str, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:p>");
    let mut first = true;
    for segment in paragraph.split(LINE_BREAK) {
        if !first {
            xml.push_str("<a:br>");
            write_run_properties(xml, "a:rPr", format)?;
            xml.push_str("</a:br>");
        }
        first = false;
        if segment.is_empty() {
            continue;
        }
        xml.push_str("<a:r>");
        write_run_properties(xml, "a:rPr", format)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(segment))?;
        xml.push_str("</a:r>");
    }
    if paragraph.is_empty() {
        write_run_properties(xml, "a:endParaRPr", format)?;
    }
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_properties(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;

    if let Some(sz) = format.size_centipoints() {
        write!(xml, " sz=\"{}\"", sz)?;
    }

    if let Some(bold) = format.bold {
        xml.push_str(if bold { " b=\"1\"" } else { " b=\"0\"" });
    }

    if let Some(italic) = format.italic {
        xml.push_str(if italic { " i=\"1\"" } else { " i=\"0\"" });
    }

    xml.push_str(" dirty=\"0\"/>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, format: TextFormat) -> String {
        let mut shape = MutableShape::new_text_box(2, text.to_string(), Geometry::new(1, 2, 3, 4));
        shape.set_text_format(format);
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_geometry_and_name() {
        let xml = render("Hello", TextFormat::default());
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
        assert!(xml.contains(r#"<a:off x="1" y="2"/><a:ext cx="3" cy="4"/>"#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
    }

    #[test]
    fn test_paragraphs_and_line_breaks() {
        let xml = render("one\ntwo\u{b}three\n", TextFormat::default());
        assert_eq!(xml.matches("<a:p>").count(), 3);
        assert!(xml.contains("<a:t>two</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:endParaRPr"));
    }

    #[test]
    fn test_format_on_every_run() {
        let format = TextFormat {
            size: Some(24.0),
            bold: Some(true),
            italic: Some(false),
        };
        let xml = render("a\nb", format);
        assert_eq!(xml.matches(r#"sz="2400" b="1" i="0""#).count(), 2);
    }

    #[test]
    fn test_unset_format_writes_no_attributes() {
        let xml = render("plain", TextFormat::default());
        assert!(xml.contains(r#"<a:rPr lang="en-US" dirty="0"/>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render("R&D <beta>", TextFormat::default());
        assert!(xml.contains("<a:t>R&amp;D &lt;beta&gt;</a:t>"));
    }
}
