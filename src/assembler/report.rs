//! Outcome of an assembly run.

use crate::template::TemplateError;
use std::fmt;
use std::path::PathBuf;

/// Why a requested slide was left out of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The `slides` entry is not a JSON object
    NotAnObject,
    /// No non-empty `variant` string
    MissingVariant,
    /// The variant is not a plain file name
    InvalidVariantName(String),
    /// `content` is present but not a JSON object
    ContentNotAnObject,
    /// No template file for the variant
    TemplateNotFound(PathBuf),
    /// The template file could not be read as a presentation
    TemplateUnreadable(String),
    /// The template presentation has no slides
    NoSlides,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "slide entry is not an object"),
            SkipReason::MissingVariant => write!(f, "slide without variant name"),
            SkipReason::InvalidVariantName(name) => {
                write!(f, "variant name {:?} is not a plain file name", name)
            },
            SkipReason::ContentNotAnObject => write!(f, "slide content is not an object"),
            SkipReason::TemplateNotFound(path) => {
                write!(f, "variant file not found: {}", path.display())
            },
            SkipReason::TemplateUnreadable(message) => write!(f, "{}", message),
            SkipReason::NoSlides => write!(f, "template has no slides"),
        }
    }
}

impl From<TemplateError> for SkipReason {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::InvalidName(name) => SkipReason::InvalidVariantName(name),
            TemplateError::NotFound(path) => SkipReason::TemplateNotFound(path),
            TemplateError::NoSlides(_) => SkipReason::NoSlides,
            err @ TemplateError::Package { .. } => SkipReason::TemplateUnreadable(err.to_string()),
        }
    }
}

/// What happened to one requested slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideStatus {
    /// A slide was added with this many text boxes
    Added { text_boxes: usize },
    /// The slide was left out
    Skipped(SkipReason),
}

/// One entry of the report, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutcome {
    /// 1-based position in the request
    pub position: usize,
    /// Requested variant, when the entry named one
    pub variant: Option<String>,
    pub status: SlideStatus,
}

impl SlideOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self.status, SlideStatus::Added { .. })
    }
}

/// Summary of an assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub slides: Vec<SlideOutcome>,
    /// Where the deck was written
    pub output_path: PathBuf,
    /// Size of the written deck in bytes
    pub bytes: u64,
}

impl AssemblyReport {
    /// Number of slides in the written deck.
    pub fn added(&self) -> usize {
        self.slides.iter().filter(|slide| slide.is_added()).count()
    }

    /// Number of requested slides left out.
    pub fn skipped(&self) -> usize {
        self.slides.len() - self.added()
    }

    /// Iterate over the skipped slides and their reasons.
    pub fn skip_reasons(&self) -> impl Iterator<Item = (&SlideOutcome, &SkipReason)> {
        self.slides.iter().filter_map(|slide| match &slide.status {
            SlideStatus::Skipped(reason) => Some((slide, reason)),
            SlideStatus::Added { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let report = AssemblyReport {
            slides: vec![
                SlideOutcome {
                    position: 1,
                    variant: Some("Cover.pptx".to_string()),
                    status: SlideStatus::Added { text_boxes: 3 },
                },
                SlideOutcome {
                    position: 2,
                    variant: None,
                    status: SlideStatus::Skipped(SkipReason::MissingVariant),
                },
            ],
            output_path: PathBuf::from("out.pptx"),
            bytes: 1024,
        };
        assert_eq!(report.added(), 1);
        assert_eq!(report.skipped(), 1);
        let (slide, reason) = report.skip_reasons().next().unwrap();
        assert_eq!(slide.position, 2);
        assert_eq!(reason, &SkipReason::MissingVariant);
    }

    #[test]
    fn test_template_errors_map_to_reasons() {
        let reason = SkipReason::from(TemplateError::NotFound(PathBuf::from("slides/X.pptx")));
        assert_eq!(reason.to_string(), "variant file not found: slides/X.pptx");
        assert_eq!(
            SkipReason::from(TemplateError::NoSlides(PathBuf::from("a"))),
            SkipReason::NoSlides
        );
    }
}
