/// Shape types captured from template slides.
pub mod base;
pub mod textframe;

pub use base::{Placeholder, ShapeType, TemplateShape};
pub use textframe::{LINE_BREAK, TextBody};
