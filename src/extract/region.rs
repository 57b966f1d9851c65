use std::sync::LazyLock;

use regex::Regex;

/// Matches `<template>` or `<template attr...>` up to the first `</template>`.
///
/// Case-insensitive and non-greedy. A nested `<template>` is not balanced:
/// the first closing tag ends the region.
static TEMPLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<template(?:\s+[^>]*)?>(.*?)</template>").unwrap());

/// Separator placed between region contents in the extraction buffer.
pub const REGION_SEPARATOR: &str = "\n";

/// Return the inner content of every template region, in document order.
pub fn template_regions(source: &str) -> Vec<&str> {
    TEMPLATE_REGEX
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Join all template regions of a document into one extraction buffer.
///
/// Returns `None` if the document has no template region at all.
pub fn extraction_buffer(source: &str) -> Option<String> {
    let regions = template_regions(source);
    if regions.is_empty() {
        return None;
    }
    Some(regions.join(REGION_SEPARATOR))
}
