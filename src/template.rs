//! Template loading: variant names to first slides of template presentations.

use crate::ooxml::OoxmlError;
use crate::ooxml::pptx::{Package, SlideTemplate};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The variant name is not a plain file name
    #[error("variant name {0:?} is not a plain file name")]
    InvalidName(String),

    /// No template file exists for the variant
    #[error("template file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The template presentation has no slides
    #[error("template {} has no slides", .0.display())]
    NoSlides(PathBuf),

    /// The template could not be read as a presentation
    #[error("failed to read template {}: {source}", .path.display())]
    Package {
        path: PathBuf,
        #[source]
        source: OoxmlError,
    },
}

/// Check that a variant name names a file directly inside the template
/// directory: one normal path component, no separators.
pub fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Loads template slides from a directory, caching each variant for the
/// lifetime of the library.
///
/// # Examples
///
/// ```rust,no_run
/// use deckforge::template::TemplateLibrary;
///
/// let mut library = TemplateLibrary::new("slides");
/// let cover = library.load("Cover.pptx")?;
/// println!("{} shapes", cover.shapes.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TemplateLibrary {
    dir: PathBuf,
    cache: HashMap<String, Arc<SlideTemplate>>,
}

impl TemplateLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Resolve a variant name to its template path.
    pub fn path_for(&self, variant: &str) -> Result<PathBuf, TemplateError> {
        if !is_plain_file_name(variant) {
            return Err(TemplateError::InvalidName(variant.to_string()));
        }
        Ok(self.dir.join(variant))
    }

    /// Load the first slide of a variant's template.
    pub fn load(&mut self, variant: &str) -> Result<Arc<SlideTemplate>, TemplateError> {
        if let Some(template) = self.cache.get(variant) {
            debug!(variant, "template cache hit");
            return Ok(Arc::clone(template));
        }

        let path = self.path_for(variant)?;
        if !path.is_file() {
            return Err(TemplateError::NotFound(path));
        }

        let package_err = |source| TemplateError::Package {
            path: path.clone(),
            source,
        };
        let mut package = Package::open(&path).map_err(package_err)?;
        let slide = package
            .first_slide()
            .map_err(package_err)?
            .ok_or_else(|| TemplateError::NoSlides(path.clone()))?;

        debug!(
            variant,
            shapes = slide.shapes.len(),
            "loaded template slide"
        );
        let template = Arc::new(slide);
        self.cache.insert(variant.to_string(), Arc::clone(&template));
        Ok(template)
    }

    /// Get the number of cached templates.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_names() {
        assert!(is_plain_file_name("Cover.pptx"));
        assert!(is_plain_file_name("two words.pptx"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name("../secret.pptx"));
        assert!(!is_plain_file_name("sub/Cover.pptx"));
        assert!(!is_plain_file_name("sub\\Cover.pptx"));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("."));
        assert!(!is_plain_file_name("/etc/passwd"));
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = TemplateLibrary::new(dir.path());
        assert!(matches!(
            library.load("Missing.pptx"),
            Err(TemplateError::NotFound(_))
        ));
        assert!(matches!(
            library.load("../Missing.pptx"),
            Err(TemplateError::InvalidName(_))
        ));
    }

    #[test]
    fn test_corrupt_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Broken.pptx"), b"not a zip").unwrap();
        let mut library = TemplateLibrary::new(dir.path());
        assert!(matches!(
            library.load("Broken.pptx"),
            Err(TemplateError::Package { .. })
        ));
        assert_eq!(library.cached(), 0);
    }
}
