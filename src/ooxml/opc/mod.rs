/// Open Packaging Conventions (OPC) support.
///
/// This module covers the parts of the OPC specification a presentation
/// assembler needs:
///
/// - Part names (`PackURI`) and relative reference resolution
/// - Relationship parsing and serialization
/// - Content type and relationship type constants
/// - ZIP-based physical packaging, for reading and writing
pub mod constants;
pub mod packuri;
pub mod phys_pkg;
pub mod rel;

// Re-export commonly used types
pub use packuri::PackURI;
pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
pub use rel::{Relationship, Relationships};
