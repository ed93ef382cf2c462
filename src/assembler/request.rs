//! Parsing of the deck request JSON.

use super::report::SkipReason;
use crate::content::ContentMap;
use crate::error::{DeckError, Result};
use serde_json::Value;

/// One requested slide: the variant to copy and the content to fill it with.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideRequest {
    pub variant: String,
    pub content: ContentMap,
}

impl SlideRequest {
    pub fn new(variant: impl Into<String>, content: ContentMap) -> Self {
        Self {
            variant: variant.into(),
            content,
        }
    }

    /// Interpret one entry of the `slides` array.
    ///
    /// A missing or null `content` is an empty map.
    pub fn from_entry(entry: &Value) -> std::result::Result<Self, SkipReason> {
        let Value::Object(fields) = entry else {
            return Err(SkipReason::NotAnObject);
        };
        let variant = match fields.get("variant") {
            Some(Value::String(variant)) if !variant.is_empty() => variant.clone(),
            _ => return Err(SkipReason::MissingVariant),
        };
        let content = match fields.get("content") {
            None | Some(Value::Null) => ContentMap::new(),
            Some(Value::Object(content)) => content.clone(),
            Some(_) => return Err(SkipReason::ContentNotAnObject),
        };
        Ok(Self { variant, content })
    }
}

/// Parse a request and return the entries of its `slides` array.
///
/// Surrounding whitespace is ignored. Entries are returned unvalidated so
/// that one malformed entry only skips its own slide.
pub fn parse_request(input: &str) -> Result<Vec<Value>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DeckError::EmptyInput);
    }
    let request: Value = serde_json::from_str(input)?;
    match request.get("slides") {
        None => Err(DeckError::MissingSlides),
        Some(Value::Array(slides)) => Ok(slides.clone()),
        Some(other) => Err(DeckError::SlidesNotArray(json_type_name(other))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
