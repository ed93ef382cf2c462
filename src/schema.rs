//! Variant schemas: which placeholder literal each content key replaces.
//!
//! The schema file is a JSON array of objects:
//!
//! ```json
//! [
//!   { "name": "Cover.pptx",
//!     "properties": { "title": "{{TITLE}}", "subtitle": "{{SUBTITLE}}" } }
//! ]
//! ```
//!
//! Only `properties` takes part in matching; `name` (or `variant`) is kept for
//! diagnostics. Unknown fields are ignored.

use crate::content::ContentMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a schema file.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file does not exist
    #[error("schema file not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The schema file could not be read
    #[error("failed to read schema file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not a JSON array of schemas
    #[error("failed to parse schema file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One variant's mapping from content keys to placeholder literals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSchema")]
pub struct VariantSchema {
    /// Optional identifier, for diagnostics only
    pub name: Option<String>,
    /// Content key to the literal text it replaces
    pub properties: BTreeMap<String, String>,
}

/// A schema entry as written in the file.
///
/// Identifiers of any JSON type are accepted; only `properties` can make
/// an entry invalid.
#[derive(Deserialize)]
struct RawSchema {
    #[serde(default)]
    name: Option<serde_json::Value>,
    #[serde(default)]
    variant: Option<serde_json::Value>,
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

impl From<RawSchema> for VariantSchema {
    fn from(raw: RawSchema) -> Self {
        let as_name = |value: Option<serde_json::Value>| match value {
            Some(serde_json::Value::String(name)) => Some(name),
            _ => None,
        };
        Self {
            name: as_name(raw.name).or_else(|| as_name(raw.variant)),
            properties: raw.properties,
        }
    }
}

impl VariantSchema {
    /// Create a schema from `(content key, placeholder)` pairs.
    pub fn new<I, K, P>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<String>,
    {
        Self {
            name: None,
            properties: properties
                .into_iter()
                .map(|(k, p)| (k.into(), p.into()))
                .collect(),
        }
    }

    /// Set the schema's identifier.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check whether every declared property is a key of `content`.
    ///
    /// A schema without properties matches any content.
    pub fn matches(&self, content: &ContentMap) -> bool {
        self.properties.keys().all(|key| content.contains_key(key))
    }

    /// Get the placeholder literal for a content key.
    pub fn placeholder(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Ordered, read-only collection of variant schemas.
///
/// # Examples
///
/// ```rust
/// use deckforge::schema::{SchemaStore, VariantSchema};
/// use serde_json::json;
///
/// let store = SchemaStore::from_schemas(vec![
///     VariantSchema::new([("title", "{{TITLE}}")]),
/// ]);
/// let content = json!({"title": "Q3"}).as_object().cloned().unwrap();
/// assert!(store.find_match(&content).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaStore {
    schemas: Vec<VariantSchema>,
}

impl SchemaStore {
    /// A store with no schemas; every resolution uses the fallback patterns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store from schemas, keeping their order.
    pub fn from_schemas(schemas: Vec<VariantSchema>) -> Self {
        Self { schemas }
    }

    /// Parse a store from the JSON text of a schema file.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let schemas: Vec<VariantSchema> = serde_json::from_str(json)?;
        Ok(Self { schemas })
    }

    /// Load the schema file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SchemaError::NotFound(path.to_path_buf())
            } else {
                SchemaError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let store = Self::from_json(&json).map_err(|source| SchemaError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), schemas = store.len(), "loaded variant schemas");
        Ok(store)
    }

    /// Load the schema file, degrading to an empty store on any failure.
    ///
    /// The failure is logged once as a warning.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(store) => store,
            Err(err) => {
                warn!("{err}; placeholder resolution falls back to generic patterns");
                Self::empty()
            },
        }
    }

    /// Find the first schema, in file order, whose properties are all
    /// present in `content`.
    pub fn find_match(&self, content: &ContentMap) -> Option<&VariantSchema> {
        self.schemas.iter().find(|schema| schema.matches(content))
    }

    /// Get the number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if the store holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over schemas in file order.
    pub fn iter(&self) -> impl Iterator<Item = &VariantSchema> {
        self.schemas.iter()
    }
}
