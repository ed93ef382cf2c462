//! Generic placeholder spellings tried when no schema matches.

use smallvec::SmallVec;

/// Placeholder spellings for `key`, in the order they are tried:
/// `{key}`, `{{key}}`, `<key>`, `<KEY>`, `KEY`, then the title-cased key.
///
/// # Examples
///
/// ```rust
/// use deckforge::resolver::fallback_patterns;
///
/// let patterns = fallback_patterns("title");
/// assert_eq!(
///     patterns.as_slice(),
///     ["{title}", "{{title}}", "<title>", "<TITLE>", "TITLE", "Title"]
/// );
/// ```
pub fn fallback_patterns(key: &str) -> SmallVec<[String; 6]> {
    let upper = key.to_uppercase();
    let mut patterns = SmallVec::new();
    patterns.push(format!("{{{key}}}"));
    patterns.push(format!("{{{{{key}}}}}"));
    patterns.push(format!("<{key}>"));
    patterns.push(format!("<{upper}>"));
    patterns.push(upper);
    patterns.push(title_case(key));
    patterns
}

/// Title-case a string the way Python's `str.title` does.
///
/// Each run of letters starts upper-case and continues lower-case; any
/// non-letter (digit, underscore, apostrophe, space) ends the run.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("HELLO"), "Hello");
        assert_eq!(title_case("sub_title"), "Sub_Title");
        assert_eq!(title_case("q3report"), "Q3Report");
        assert_eq!(title_case("they're"), "They'Re");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_patterns_for_compound_key() {
        let patterns = fallback_patterns("due_date");
        assert_eq!(patterns[3], "<DUE_DATE>");
        assert_eq!(patterns[5], "Due_Date");
    }
}
