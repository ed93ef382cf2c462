//! deckforge - generate PowerPoint decks from reusable slide templates
//!
//! A request lists slides, each naming a template file ("variant") and a map
//! of content values. For every slide, the first slide of the template is
//! read, the text of each text-bearing shape has its placeholders replaced by
//! content values, and the result is written as positioned text boxes onto a
//! new slide of the output deck.
//!
//! # Features
//!
//! - **Schema-driven substitution**: a variant schema maps content keys to
//!   the exact placeholder literals of a template
//! - **Generic fallback**: `{key}`, `{{key}}`, `<key>`, `<KEY>`, `KEY` and
//!   `Key` spellings when no schema matches
//! - **OOXML package layer**: reading templates and writing decks with
//!   `quick-xml` and `zip`, no Office installation needed
//!
//! # Example
//!
//! ```no_run
//! use deckforge::{AssemblerConfig, DeckAssembler};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AssemblerConfig::new()
//!     .with_templates_dir("slides")
//!     .with_schemas_path("variants.json")
//!     .with_output_path("output/GeneratedPresentation.pptx");
//!
//! let report = DeckAssembler::new(config).assemble_json(
//!     r#"{"slides": [
//!         {"variant": "Cover.pptx",
//!          "content": {"title": "Q3 Report", "subtitle": "Finance", "date": "2024-01-01"}}
//!     ]}"#,
//! )?;
//! println!("{} slides, {} bytes", report.added(), report.bytes);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Resolving text directly
//!
//! ```
//! use deckforge::resolver::PlaceholderResolver;
//! use deckforge::schema::{SchemaStore, VariantSchema};
//! use serde_json::json;
//!
//! let store = SchemaStore::from_schemas(vec![VariantSchema::new([("title", "{{TITLE}}")])]);
//! let content = json!({"title": "Q3 Report"}).as_object().cloned().unwrap();
//! let resolved = PlaceholderResolver::new(&store).resolve("{{TITLE}}", &content);
//! assert_eq!(resolved, "Q3 Report");
//! ```

pub mod assembler;
pub mod common;
pub mod config;
pub mod content;
pub mod error;
pub mod merge;
pub mod ooxml;
pub mod resolver;
pub mod schema;
pub mod template;

pub use assembler::{AssemblyReport, DeckAssembler, SkipReason, SlideOutcome, SlideStatus};
pub use config::AssemblerConfig;
pub use content::{ContentMap, ContentValue};
pub use error::DeckError;
pub use schema::{SchemaError, SchemaStore, VariantSchema};
