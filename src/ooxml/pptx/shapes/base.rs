/// Base shape types for template slides.
use crate::ooxml::pptx::format::Geometry;
use crate::ooxml::pptx::shapes::textframe::TextBody;

/// Shape type enumeration.
///
/// Indicates what kind of element a shape-tree child is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    /// An auto shape, text box or placeholder (p:sp)
    Shape,
    /// A picture shape (p:pic)
    Picture,
    /// A graphic frame containing a table or chart (p:graphicFrame)
    GraphicFrame,
    /// A group shape (p:grpSp)
    GroupShape,
    /// A connector shape (p:cxnSp)
    Connector,
}

impl ShapeType {
    /// Map a shape-tree child's local tag name to a shape type.
    pub fn from_tag(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"sp" => Some(Self::Shape),
            b"pic" => Some(Self::Picture),
            b"graphicFrame" => Some(Self::GraphicFrame),
            b"grpSp" => Some(Self::GroupShape),
            b"cxnSp" => Some(Self::Connector),
            _ => None,
        }
    }
}

/// Placeholder reference of a shape (`<p:ph>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholder {
    /// The `type` attribute, e.g. "title", "body", "ctrTitle", "subTitle", "dt"
    pub ph_type: Option<String>,
    /// The `idx` attribute
    pub idx: Option<u32>,
}

impl Placeholder {
    /// Placeholder type, applying the schema default of "obj".
    pub fn effective_type(&self) -> &str {
        self.ph_type.as_deref().unwrap_or("obj")
    }

    /// The type a slide master uses for this placeholder.
    ///
    /// Masters only carry the generic title, body, date, footer and slide
    /// number placeholders.
    pub fn master_type(&self) -> &str {
        match self.effective_type() {
            "ctrTitle" | "title" => "title",
            "subTitle" | "obj" | "body" => "body",
            other => other,
        }
    }

    /// Check whether `inherited`, a placeholder on a slide layout, is the one
    /// this slide placeholder inherits from.
    ///
    /// Placeholders are matched by `idx` when both sides carry one, else by type.
    pub fn inherits_from(&self, inherited: &Placeholder) -> bool {
        match (self.idx, inherited.idx) {
            (Some(a), Some(b)) => a == b,
            _ => self.effective_type() == inherited.effective_type(),
        }
    }
}

/// One top-level shape of a template slide.
///
/// # Examples
///
/// ```rust
/// use deckforge::ooxml::pptx::format::Geometry;
/// use deckforge::ooxml::pptx::shapes::{ShapeType, TemplateShape, TextBody};
///
/// let shape = TemplateShape::new(ShapeType::Shape)
///     .with_geometry(Geometry::new(0, 0, 914_400, 457_200))
///     .with_text_body(TextBody::from_paragraphs(["{{TITLE}}"]));
/// assert!(shape.is_text_bearing());
/// assert_eq!(shape.text().as_deref(), Some("{{TITLE}}"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateShape {
    shape_type: ShapeType,
    /// Name from `<p:cNvPr>`
    name: String,
    /// Own transform; `None` when inherited from the layout
    geometry: Option<Geometry>,
    placeholder: Option<Placeholder>,
    text_body: Option<TextBody>,
}

impl TemplateShape {
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            name: String::new(),
            geometry: None,
            placeholder: None,
            text_body: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_text_body(mut self, body: TextBody) -> Self {
        self.text_body = Some(body);
        self
    }

    /// Get the shape type.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Get the shape name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position and size, if known.
    #[inline]
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Placeholder reference, if this shape is a placeholder.
    #[inline]
    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// Text body, if this shape has one.
    #[inline]
    pub fn text_body(&self) -> Option<&TextBody> {
        self.text_body.as_ref()
    }

    /// Check if this is a text-bearing shape: a `p:sp` with a text body.
    ///
    /// Pictures, graphic frames, groups and connectors never are.
    pub fn is_text_bearing(&self) -> bool {
        self.shape_type == ShapeType::Shape && self.text_body.is_some()
    }

    /// Extract text content from this shape if it has any.
    pub fn text(&self) -> Option<String> {
        if !self.is_text_bearing() {
            return None;
        }
        self.text_body.as_ref().map(TextBody::text)
    }

    pub(crate) fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph(ph_type: Option<&str>, idx: Option<u32>) -> Placeholder {
        Placeholder {
            ph_type: ph_type.map(str::to_string),
            idx,
        }
    }

    #[test]
    fn test_placeholder_matches_by_idx_first() {
        let slide = ph(Some("body"), Some(2));
        assert!(slide.inherits_from(&ph(Some("body"), Some(2))));
        assert!(!slide.inherits_from(&ph(Some("body"), Some(1))));
    }

    #[test]
    fn test_placeholder_matches_by_type_without_idx() {
        let title = ph(Some("title"), None);
        assert!(title.inherits_from(&ph(Some("title"), None)));
        assert!(!title.inherits_from(&ph(Some("body"), None)));
        assert!(ph(None, None).inherits_from(&ph(Some("obj"), None)));
    }

    #[test]
    fn test_master_type_folds_variants() {
        assert_eq!(ph(Some("ctrTitle"), None).master_type(), "title");
        assert_eq!(ph(Some("subTitle"), Some(1)).master_type(), "body");
        assert_eq!(ph(None, Some(1)).master_type(), "body");
        assert_eq!(ph(Some("dt"), Some(10)).master_type(), "dt");
    }

    #[test]
    fn test_picture_is_not_text_bearing() {
        let pic = TemplateShape::new(ShapeType::Picture).with_text_body(TextBody::default());
        assert!(!pic.is_text_bearing());
        assert_eq!(pic.text(), None);

        let bare = TemplateShape::new(ShapeType::Shape);
        assert!(!bare.is_text_bearing());
    }
}
