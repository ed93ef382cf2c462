//! Placeholder resolution.
//!
//! Text taken from a template slide is resolved against one slide's content
//! in two ways. When a variant schema matches the content, each content key
//! the schema declares replaces its placeholder literal. Otherwise every
//! content key is looked up under a fixed set of generic spellings, see
//! [`fallback_patterns`].
//!
//! Replacements are applied one content key at a time, in content order, each
//! on the output of the previous one. Resolution never fails: a key with no
//! placeholder in the text leaves the text as it is.

mod patterns;

pub use patterns::{fallback_patterns, title_case};

use crate::content::{ContentMap, render_value};
use crate::schema::{SchemaStore, VariantSchema};
use tracing::debug;

/// Resolves placeholder text against slide content.
///
/// # Examples
///
/// ```rust
/// use deckforge::resolver::PlaceholderResolver;
/// use deckforge::schema::SchemaStore;
/// use serde_json::json;
///
/// let store = SchemaStore::empty();
/// let resolver = PlaceholderResolver::new(&store);
/// let content = json!({"title": "Q3 Report"}).as_object().cloned().unwrap();
/// assert_eq!(resolver.resolve("{title}", &content), "Q3 Report");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderResolver<'a> {
    store: &'a SchemaStore,
}

impl<'a> PlaceholderResolver<'a> {
    pub fn new(store: &'a SchemaStore) -> Self {
        Self { store }
    }

    /// Substitute content values into `text`.
    pub fn resolve(&self, text: &str, content: &ContentMap) -> String {
        if content.is_empty() || text.is_empty() {
            return text.to_string();
        }
        match self.store.find_match(content) {
            Some(schema) => {
                debug!(schema = schema.name.as_deref().unwrap_or("<unnamed>"), "resolving with schema");
                resolve_with_schema(text, schema, content)
            },
            None => resolve_with_patterns(text, content),
        }
    }
}

/// Replace every schema placeholder whose key is in `content`.
pub fn resolve_with_schema(text: &str, schema: &VariantSchema, content: &ContentMap) -> String {
    content.iter().fold(text.to_string(), |current, (key, value)| {
        match schema.placeholder(key) {
            Some(placeholder) if !placeholder.is_empty() && current.contains(placeholder) => {
                current.replace(placeholder, &render_value(value))
            },
            _ => current,
        }
    })
}

/// Replace, for each content key, the first generic spelling found in the text.
pub fn resolve_with_patterns(text: &str, content: &ContentMap) -> String {
    content.iter().fold(text.to_string(), |current, (key, value)| {
        let found = fallback_patterns(key)
            .into_iter()
            .find(|pattern| !pattern.is_empty() && current.contains(pattern.as_str()));
        match found {
            Some(pattern) => {
                debug!(key = %key, pattern = %pattern, "replacing generic placeholder");
                current.replace(pattern.as_str(), &render_value(value))
            },
            None => current,
        }
    })
}
