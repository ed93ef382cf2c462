//! Deck assembly: from a JSON request to a written presentation.
//!
//! Slides are processed strictly in request order. A problem with one slide
//! (bad entry, unknown variant, unreadable template) skips that slide with a
//! warning and the run continues; only problems with the request as a whole
//! or with writing the output abort the run.

mod report;
mod request;

pub use report::{AssemblyReport, SkipReason, SlideOutcome, SlideStatus};
pub use request::{SlideRequest, parse_request};

use crate::config::AssemblerConfig;
use crate::error::{DeckError, Result};
use crate::merge::SlideContentMerger;
use crate::ooxml::pptx::MutablePresentation;
use crate::resolver::PlaceholderResolver;
use crate::schema::SchemaStore;
use crate::template::TemplateLibrary;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// Builds a deck from slide requests.
///
/// # Examples
///
/// ```rust,no_run
/// use deckforge::{AssemblerConfig, DeckAssembler};
///
/// let assembler = DeckAssembler::new(AssemblerConfig::from_base_dir("."));
/// let report = assembler.assemble_json(
///     r#"{"slides": [{"variant": "Cover.pptx", "content": {"title": "Q3 Report"}}]}"#,
/// )?;
/// println!("Presentation saved to: {}", report.output_path.display());
/// # Ok::<(), deckforge::DeckError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeckAssembler {
    config: AssemblerConfig,
}

impl DeckAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Parse a JSON request and assemble its slides.
    ///
    /// The request is fully validated before the output file is touched.
    pub fn assemble_json(&self, input: &str) -> Result<AssemblyReport> {
        let slides = parse_request(input)?;
        let schemas = SchemaStore::load_or_empty(&self.config.schemas_path);
        self.assemble(&slides, &schemas)
    }

    /// Assemble the entries of a `slides` array and write the deck.
    pub fn assemble(&self, entries: &[Value], schemas: &SchemaStore) -> Result<AssemblyReport> {
        debug!(dir = %self.config.templates_dir.display(), exists = self.config.templates_dir.is_dir(), "template directory");
        info!("Processing {} slides", entries.len());

        let merger = SlideContentMerger::new(PlaceholderResolver::new(schemas));
        let mut library = TemplateLibrary::new(&self.config.templates_dir);
        let mut deck = MutablePresentation::new();
        let mut size_adopted = false;
        let mut outcomes = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let position = index + 1;
            let variant = entry
                .get("variant")
                .and_then(Value::as_str)
                .map(str::to_string);

            let status = match SlideRequest::from_entry(entry) {
                Ok(request) => {
                    debug!(
                        slide = position,
                        variant = %request.variant,
                        keys = ?request.content.keys().collect::<Vec<_>>(),
                        "slide request"
                    );
                    match library.load(&request.variant) {
                        Ok(template) => {
                            if !size_adopted && let Some(size) = template.slide_size {
                                deck.set_slide_size(size);
                                size_adopted = true;
                            }
                            let slide = deck.add_slide();
                            let text_boxes = merger.merge_into(&template, &request.content, slide);
                            info!(slide = position, variant = %request.variant, text_boxes, "added slide");
                            SlideStatus::Added { text_boxes }
                        },
                        Err(err) => SlideStatus::Skipped(err.into()),
                    }
                },
                Err(reason) => SlideStatus::Skipped(reason),
            };

            if let SlideStatus::Skipped(reason) = &status {
                warn!(slide = position, "Skipping slide: {reason}");
            }
            outcomes.push(SlideOutcome {
                position,
                variant,
                status,
            });
        }

        let bytes = write_deck(&deck, &self.config.output_path)?;
        info!(
            path = %self.config.output_path.display(),
            slides = deck.slide_count(),
            bytes,
            "presentation saved"
        );

        Ok(AssemblyReport {
            slides: outcomes,
            output_path: self.config.output_path.clone(),
            bytes,
        })
    }
}

/// Replace the file at `path` with the serialized deck.
fn write_deck(deck: &MutablePresentation, path: &Path) -> Result<u64> {
    let output_err = |source| DeckError::Output {
        path: path.to_path_buf(),
        source,
    };

    let bytes = deck.to_bytes()?;

    match std::fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed previous output"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {},
        Err(err) => return Err(output_err(err)),
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(output_err)?;
    }
    std::fs::write(path, &bytes).map_err(output_err)?;

    Ok(bytes.len() as u64)
}
