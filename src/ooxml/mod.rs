//! Office Open XML (OOXML) package support for presentations.
//!
//! The module is organized in layers:
//!
//! 1. **OPC Layer** (`opc`): part names, relationships and ZIP packaging
//! 2. **Shared Utilities** (`error`, `xml`): error type and XML helpers
//! 3. **PresentationML** (`pptx`): template reading and deck writing
pub mod error;
pub mod opc;
pub mod pptx;
pub(crate) mod xml;

pub use error::{OoxmlError, Result};
