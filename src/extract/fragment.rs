use std::sync::LazyLock;

use regex::Regex;

/// Text strictly between a `>` and the next `<`.
static INNER_TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">([^<>]+)<").unwrap());

/// Byte order mark, stripped along with whitespace.
const BOM: char = '\u{FEFF}';

/// Return the trimmed inner-text fragments of an extraction buffer.
///
/// Fragments keep their order of occurrence and duplicates are kept.
/// Whitespace-only runs are dropped. Trimming also removes a byte order mark.
///
/// This only looks at consecutive `>...<` pairs, so a pair inside an
/// attribute value (`<p title="x>y<z">`) yields a fragment as well.
pub fn text_fragments(buffer: &str) -> Vec<&str> {
    INNER_TEXT_REGEX
        .captures_iter(buffer)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_matches(|c: char| c.is_whitespace() || c == BOM))
        .filter(|text| !text.is_empty())
        .collect()
}
