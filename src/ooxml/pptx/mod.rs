//! PowerPoint (.pptx) presentation support.
//!
//! Two halves share this module:
//!
//! - Reading: [`Package`] opens a template presentation and loads its first
//!   slide as a list of [`TemplateShape`](shapes::TemplateShape)s, with
//!   placeholder geometry inherited from the layout and master.
//! - Writing: [`MutablePresentation`] builds a new deck of blank slides with
//!   text boxes and serializes it to a complete package.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckforge::ooxml::pptx::{MutablePresentation, Package};
//! use deckforge::ooxml::pptx::format::TextFormat;
//!
//! let mut template = Package::open("slides/title.pptx")?;
//! let mut deck = MutablePresentation::new();
//! if let Some(source) = template.first_slide()? {
//!     let slide = deck.add_slide();
//!     for shape in source.shapes.iter().filter(|s| s.is_text_bearing()) {
//!         let text = shape.text().unwrap_or_default();
//!         slide.add_text_box(&text, shape.geometry().unwrap_or_default(), TextFormat::default());
//!     }
//! }
//! std::fs::write("output/deck.pptx", deck.to_bytes()?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod format;
pub mod package;
pub mod parts;
pub mod shapes;
pub mod template;
pub mod writer;

pub use package::{Package, SlideTemplate};
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
