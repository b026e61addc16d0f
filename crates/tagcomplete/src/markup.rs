//! Markup stripping for raw input text.
//!
//! Rich-text input surfaces hand over their content with inline markup
//! (`<b>ap</b>ple`). Before the text reaches listeners or the matcher, every
//! tag-like run `<...>` is removed.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// An opening `<`, at least one non-`>` character, and the closing `>`.
const MARKUP_PATTERN: &str = r"<[^>]+>";

fn markup_regex() -> &'static Regex {
    static MARKUP: OnceLock<Regex> = OnceLock::new();
    MARKUP.get_or_init(|| Regex::new(MARKUP_PATTERN).expect("markup pattern is a valid regex"))
}

/// Remove every markup tag from `input`.
///
/// Total on any string. Returns the input borrowed when it contains no
/// markup. A lone `<` or an empty `<>` is not a tag and is kept.
///
/// # Example
///
/// ```
/// use tagcomplete::markup::strip_markup;
///
/// assert_eq!(strip_markup("<b>ap</b>ple"), "apple");
/// assert_eq!(strip_markup("a < b"), "a < b");
/// ```
pub fn strip_markup(input: &str) -> Cow<'_, str> {
    markup_regex().replace_all(input, "")
}

/// Returns true if `input` contains at least one markup tag.
pub fn contains_markup(input: &str) -> bool {
    markup_regex().is_match(input)
}
