//! Merging slide content into a template slide.

use crate::content::ContentMap;
use crate::ooxml::pptx::format::{Geometry, TextFormat};
use crate::ooxml::pptx::{MutableSlide, SlideTemplate};
use crate::resolver::PlaceholderResolver;
use tracing::debug;

/// One resolved text box, ready to be written to an output slide.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedText {
    pub geometry: Geometry,
    pub text: String,
    pub format: TextFormat,
}

/// Produces the text boxes of an output slide from a template slide and
/// one slide's content.
#[derive(Debug, Clone, Copy)]
pub struct SlideContentMerger<'a> {
    resolver: PlaceholderResolver<'a>,
}

impl<'a> SlideContentMerger<'a> {
    pub fn new(resolver: PlaceholderResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Resolve the text of every text-bearing shape, in z-order.
    ///
    /// Shapes without text are skipped. A placeholder whose geometry could
    /// not be found anywhere is placed at the origin with zero extent.
    pub fn merge(&self, template: &SlideTemplate, content: &ContentMap) -> Vec<MergedText> {
        template
            .shapes
            .iter()
            .filter_map(|shape| {
                let body = shape.text_body().filter(|_| shape.is_text_bearing())?;
                let geometry = shape.geometry().unwrap_or_else(|| {
                    debug!(shape = shape.name(), "no geometry found, placing at origin");
                    Geometry::default()
                });
                Some(MergedText {
                    geometry,
                    text: self.resolver.resolve(&body.text(), content),
                    format: body.first_paragraph_format(),
                })
            })
            .collect()
    }

    /// Merge into `slide`, adding one text box per text-bearing shape.
    ///
    /// Returns the number of text boxes added.
    pub fn merge_into(
        &self,
        template: &SlideTemplate,
        content: &ContentMap,
        slide: &mut MutableSlide,
    ) -> usize {
        let merged = self.merge(template, content);
        for item in &merged {
            slide.add_text_box(&item.text, item.geometry, item.format);
        }
        merged.len()
    }
}
