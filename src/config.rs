//! Configuration for deck assembly.

use std::path::{Path, PathBuf};

/// Default template directory, relative to the base directory.
pub const DEFAULT_TEMPLATES_DIR: &str = "slides";
/// Default schema file, relative to the base directory.
pub const DEFAULT_SCHEMAS_FILE: &str = "variants.json";
/// Default output deck, relative to the base directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output/GeneratedPresentation.pptx";

/// Where templates and schemas are read from and where the deck is written.
///
/// # Examples
///
/// ```rust
/// use deckforge::AssemblerConfig;
/// use std::path::Path;
///
/// let config = AssemblerConfig::from_base_dir("/srv/decks")
///     .with_output_path("/tmp/out.pptx");
/// assert_eq!(config.templates_dir, Path::new("/srv/decks/slides"));
/// assert_eq!(config.output_path, Path::new("/tmp/out.pptx"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Directory holding one `.pptx` template per variant
    pub templates_dir: PathBuf,
    /// JSON file of variant schemas
    pub schemas_path: PathBuf,
    /// Output deck path; an existing file is replaced
    pub output_path: PathBuf,
}

impl AssemblerConfig {
    /// Create a configuration with the default paths, relative to the
    /// current directory.
    pub fn new() -> Self {
        Self {
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            schemas_path: PathBuf::from(DEFAULT_SCHEMAS_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Create a configuration with the default paths under `base`.
    pub fn from_base_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            templates_dir: base.join(DEFAULT_TEMPLATES_DIR),
            schemas_path: base.join(DEFAULT_SCHEMAS_FILE),
            output_path: base.join(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Set the template directory.
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }

    /// Set the schema file.
    pub fn with_schemas_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schemas_path = path.into();
        self
    }

    /// Set the output deck path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self::new()
    }
}
