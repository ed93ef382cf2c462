/// Slide parts.
///
/// Slides, slide layouts and slide masters share the `<p:cSld>/<p:spTree>`
/// structure, so one reader serves all three.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Geometry, TextFormat};
use crate::ooxml::pptx::shapes::{LINE_BREAK, Placeholder, ShapeType, TemplateShape, TextBody};
use crate::ooxml::xml::{bool_attr, find_attr, int_attr, push_entity};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A slide, slide layout or slide master part.
///
/// Corresponds to `/ppt/slides/slideN.xml`, `/ppt/slideLayouts/slideLayoutN.xml`
/// or `/ppt/slideMasters/slideMasterN.xml` in the package.
#[derive(Debug, Clone)]
pub struct SlidePart {
    xml: Vec<u8>,
}

impl SlidePart {
    /// Create a SlidePart from the part's XML bytes.
    pub fn from_xml(xml: Vec<u8>) -> Self {
        Self { xml }
    }

    /// Get the XML bytes of the part.
    #[inline]
    pub fn xml_bytes(&self) -> &[u8] {
        &self.xml
    }

    /// Get the top-level shapes of the shape tree, in document order.
    ///
    /// Children of group shapes are not listed separately.
    pub fn shapes(&self) -> Result<Vec<TemplateShape>> {
        parse_shape_tree(self.xml_bytes())
    }
}

/// Parse the top-level children of `<p:spTree>` in one pass.
pub fn parse_shape_tree(xml: &[u8]) -> Result<Vec<TemplateShape>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut shapes = Vec::new();
    let mut depth = 0usize;
    let mut sp_tree_depth: Option<usize> = None;
    let mut current: Option<ShapeBuilder> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                let name = e.local_name();
                let name = name.as_ref();
                if let Some(builder) = current.as_mut() {
                    builder.start(&e, name, depth)?;
                } else if sp_tree_depth.is_none() && name == b"spTree" {
                    sp_tree_depth = Some(depth);
                } else if sp_tree_depth.is_some_and(|d| depth == d + 1)
                    && let Some(kind) = ShapeType::from_tag(name)
                {
                    current = Some(ShapeBuilder::new(kind, depth));
                }
            },
            Event::Empty(e) => {
                let name = e.local_name();
                let name = name.as_ref();
                if let Some(builder) = current.as_mut() {
                    builder.empty(&e, name, depth + 1)?;
                } else if sp_tree_depth.is_some_and(|d| depth == d)
                    && let Some(kind) = ShapeType::from_tag(name)
                {
                    shapes.push(TemplateShape::new(kind));
                }
            },
            Event::End(e) => {
                if let Some(builder) = current.as_mut() {
                    if depth == builder.depth {
                        if let Some(done) = current.take() {
                            shapes.push(done.finish());
                        }
                    } else {
                        builder.end(e.local_name().as_ref(), depth);
                    }
                } else if sp_tree_depth == Some(depth) {
                    sp_tree_depth = None;
                }
                depth = depth.saturating_sub(1);
            },
            Event::Text(e) => {
                if let Some(builder) = current.as_mut()
                    && builder.in_text
                {
                    builder.text.push_str(std::str::from_utf8(&e)?);
                }
            },
            Event::CData(e) => {
                if let Some(builder) = current.as_mut()
                    && builder.in_text
                {
                    builder.text.push_str(std::str::from_utf8(&e)?);
                }
            },
            Event::GeneralRef(e) => {
                if let Some(builder) = current.as_mut()
                    && builder.in_text
                {
                    push_entity(&mut builder.text, &e)?;
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(shapes)
}

/// Read `sz`, `b` and `i` from a run property element.
fn text_format(e: &BytesStart<'_>) -> Result<TextFormat> {
    Ok(TextFormat {
        size: int_attr(e, b"sz")?.map(|sz| sz as f64 / 100.0),
        bold: bool_attr(e, b"b")?,
        italic: bool_attr(e, b"i")?,
    })
}

/// Accumulates one top-level shape while its subtree is read.
struct ShapeBuilder {
    kind: ShapeType,
    /// Depth of the shape element itself
    depth: usize,
    name: Option<String>,
    placeholder: Option<Placeholder>,
    geometry: Option<Geometry>,
    xfrm_depth: Option<usize>,
    xfrm_seen: bool,
    body: Option<TextBody>,
    body_depth: Option<usize>,
    in_paragraph: bool,
    first_run_seen: bool,
    in_text: bool,
    text: String,
}

impl ShapeBuilder {
    fn new(kind: ShapeType, depth: usize) -> Self {
        Self {
            kind,
            depth,
            name: None,
            placeholder: None,
            geometry: None,
            xfrm_depth: None,
            xfrm_seen: false,
            body: None,
            body_depth: None,
            in_paragraph: false,
            first_run_seen: false,
            in_text: false,
            text: String::new(),
        }
    }

    fn in_first_paragraph(&self) -> bool {
        self.in_paragraph && self.body.as_ref().is_some_and(|b| b.paragraph_count() == 1)
    }

    /// Handle a child element, whether it has content (`Start`) or not (`Empty`).
    fn element(&mut self, e: &BytesStart<'_>, name: &[u8]) -> Result<()> {
        match name {
            b"cNvPr" if self.name.is_none() => {
                self.name = Some(find_attr(e, b"name")?.unwrap_or_default());
            },
            b"ph" if self.placeholder.is_none() => {
                self.placeholder = Some(Placeholder {
                    ph_type: find_attr(e, b"type")?,
                    idx: int_attr(e, b"idx")?.and_then(|idx| u32::try_from(idx).ok()),
                });
            },
            b"off" if self.xfrm_depth.is_some() => {
                let geometry = self.geometry.get_or_insert_with(Geometry::default);
                geometry.x = int_attr(e, b"x")?.unwrap_or(0);
                geometry.y = int_attr(e, b"y")?.unwrap_or(0);
            },
            b"ext" if self.xfrm_depth.is_some() => {
                let geometry = self.geometry.get_or_insert_with(Geometry::default);
                geometry.cx = int_attr(e, b"cx")?.unwrap_or(0);
                geometry.cy = int_attr(e, b"cy")?.unwrap_or(0);
            },
            b"p" if self.body_depth.is_some() => {
                if let Some(body) = self.body.as_mut() {
                    body.start_paragraph();
                }
            },
            b"defRPr" if self.in_first_paragraph() => {
                let format = text_format(e)?;
                if let Some(body) = self.body.as_mut() {
                    body.set_paragraph_format(format);
                }
            },
            b"rPr" if self.in_first_paragraph() && !self.first_run_seen => {
                self.first_run_seen = true;
                let format = text_format(e)?;
                if let Some(body) = self.body.as_mut() {
                    body.set_first_run_format(format);
                }
            },
            b"br" if self.in_paragraph => {
                if let Some(body) = self.body.as_mut() {
                    body.push_char(LINE_BREAK);
                }
            },
            _ => {},
        }
        Ok(())
    }

    fn start(&mut self, e: &BytesStart<'_>, name: &[u8], depth: usize) -> Result<()> {
        self.element(e, name)?;
        match name {
            b"xfrm" if !self.xfrm_seen => {
                self.xfrm_seen = true;
                self.xfrm_depth = Some(depth);
            },
            b"txBody" if self.kind == ShapeType::Shape && self.body.is_none() => {
                self.body = Some(TextBody::default());
                self.body_depth = Some(depth);
            },
            b"p" if self.body_depth.is_some() => self.in_paragraph = true,
            b"t" if self.in_paragraph => {
                self.in_text = true;
                self.text.clear();
            },
            _ => {},
        }
        Ok(())
    }

    fn empty(&mut self, e: &BytesStart<'_>, name: &[u8], _depth: usize) -> Result<()> {
        match name {
            b"xfrm" if !self.xfrm_seen => self.xfrm_seen = true,
            b"txBody" if self.kind == ShapeType::Shape && self.body.is_none() => {
                self.body = Some(TextBody::default());
            },
            _ => self.element(e, name)?,
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8], depth: usize) {
        match name {
            b"xfrm" if self.xfrm_depth == Some(depth) => self.xfrm_depth = None,
            b"txBody" if self.body_depth == Some(depth) => {
                self.body_depth = None;
                self.in_paragraph = false;
            },
            b"p" if self.body_depth.is_some() => self.in_paragraph = false,
            b"t" if self.in_text => {
                self.in_text = false;
                if let Some(body) = self.body.as_mut() {
                    body.push_text(&self.text);
                }
                self.text.clear();
            },
            _ => {},
        }
    }

    fn finish(self) -> TemplateShape {
        let mut shape = TemplateShape::new(self.kind).with_name(self.name.unwrap_or_default());
        if let Some(geometry) = self.geometry {
            shape = shape.with_geometry(geometry);
        }
        if let Some(placeholder) = self.placeholder {
            shape = shape.with_placeholder(placeholder);
        }
        if let Some(body) = self.body {
            shape = shape.with_text_body(body);
        }
        shape
    }
}
