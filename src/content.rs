//! Content values supplied for one slide.

use serde_json::Value;
use std::borrow::Cow;

/// A single content value, as it appears in the request JSON.
pub type ContentValue = Value;

/// Content keys mapped to values, in the order the request lists them.
///
/// Iteration order is the order substitutions are applied in.
pub type ContentMap = serde_json::Map<String, Value>;

/// Render a content value as the text that replaces a placeholder.
///
/// Strings are used verbatim and numbers in their JSON form. Booleans and
/// null use the Python spellings `True`, `False` and `None`, which is what
/// existing templates were filled with. Arrays and objects are written as
/// compact JSON.
///
/// # Examples
///
/// ```rust
/// use deckforge::content::render_value;
/// use serde_json::json;
///
/// assert_eq!(render_value(&json!("Q3 Report")), "Q3 Report");
/// assert_eq!(render_value(&json!(42)), "42");
/// assert_eq!(render_value(&json!(null)), "None");
/// ```
pub fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("None"),
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}
