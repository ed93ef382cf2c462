/// Text body captured from a template shape.
use crate::ooxml::pptx::format::TextFormat;

/// Line break inside a paragraph (`<a:br/>`), reported as a vertical tab.
pub const LINE_BREAK: char = '\u{b}';

/// The text of a shape's `<p:txBody>`.
///
/// Holds the plain text of each paragraph and the formatting declared on the
/// first paragraph. Run boundaries are not kept: a template's text is resolved
/// and rewritten as a whole.
///
/// # Examples
///
/// ```rust
/// use deckforge::ooxml::pptx::shapes::TextBody;
///
/// let body = TextBody::from_paragraphs(["Q3 Report", "Finance"]);
/// assert_eq!(body.text(), "Q3 Report\nFinance");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBody {
    paragraphs: Vec<String>,
    /// `a:pPr/a:defRPr` of the first paragraph
    paragraph_format: TextFormat,
    /// `a:rPr` of the first run of the first paragraph
    first_run_format: TextFormat,
}

impl TextBody {
    /// Create a text body from paragraph texts, without formatting.
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the formatting declared on the first paragraph.
    pub fn with_paragraph_format(mut self, format: TextFormat) -> Self {
        self.paragraph_format = format;
        self
    }

    /// Set the formatting of the first run of the first paragraph.
    pub fn with_first_run_format(mut self, format: TextFormat) -> Self {
        self.first_run_format = format;
        self
    }

    /// Paragraph texts in document order.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// All text, paragraphs joined with `\n`.
    ///
    /// Line breaks inside a paragraph appear as [`LINE_BREAK`].
    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// Formatting of the first paragraph.
    ///
    /// Paragraph-level default run properties win; each attribute they leave
    /// unset is taken from the first run, if that run sets it.
    pub fn first_paragraph_format(&self) -> TextFormat {
        self.paragraph_format.or(self.first_run_format)
    }

    pub(crate) fn start_paragraph(&mut self) {
        self.paragraphs.push(String::new());
    }

    pub(crate) fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(para) = self.paragraphs.last_mut() {
            para.push_str(text);
        }
    }

    pub(crate) fn push_char(&mut self, c: char) {
        if let Some(para) = self.paragraphs.last_mut() {
            para.push(c);
        }
    }

    pub(crate) fn set_paragraph_format(&mut self, format: TextFormat) {
        self.paragraph_format = format;
    }

    pub(crate) fn set_first_run_format(&mut self, format: TextFormat) {
        self.first_run_format = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_paragraphs() {
        let body = TextBody::from_paragraphs(["one", "", "three"]);
        assert_eq!(body.text(), "one\n\nthree");
    }

    #[test]
    fn test_empty_body_has_empty_text() {
        assert_eq!(TextBody::default().text(), "");
    }

    #[test]
    fn test_first_paragraph_format_prefers_paragraph_defaults() {
        let body = TextBody::from_paragraphs(["Title"])
            .with_paragraph_format(TextFormat {
                size: Some(40.0),
                ..Default::default()
            })
            .with_first_run_format(TextFormat {
                size: Some(18.0),
                bold: Some(true),
                italic: None,
            });

        let format = body.first_paragraph_format();
        assert_eq!(format.size, Some(40.0));
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.italic, None);
    }
}
