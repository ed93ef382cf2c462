/// Parts for PowerPoint presentation documents.
///
/// This module contains wrapper types for the XML parts in a .pptx package
/// that a template is read from.
pub mod presentation;
pub mod slide;

pub use presentation::PresentationPart;
pub use slide::{SlidePart, parse_shape_tree};
