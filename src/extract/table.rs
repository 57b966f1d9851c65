//! Key derivation and resource table building.
//!
//! Every fragment becomes one [`ResourceEntry`]. Its key is derived from the
//! last word of the fragment, falling back to `w<index>` when that word
//! yields no usable identifier. Collisions within one table get `_1`, `_2`,
//! ... suffixes.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;

/// `{{ expr }}` with optional inner whitespace. The expression is captured lazily.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").unwrap());

static NON_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());

static LEADING_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d").unwrap());

/// Prefix of keys generated from the fragment position.
pub const FALLBACK_KEY_PREFIX: &str = "w";

/// Rewrite every `{{ expr }}` interpolation to the `{expr}` form.
///
/// Single braces are left as they are.
pub fn normalize_placeholders(text: &str) -> String {
    PLACEHOLDER_REGEX.replace_all(text, "{${1}}").into_owned()
}

/// Escape raw backticks so the text can sit inside a template literal.
pub fn escape_backticks(text: &str) -> String {
    text.replace('`', "\\`")
}

/// Derive the key candidate of a normalized fragment.
///
/// Takes the last whitespace-separated token and strips every non-word
/// character. Returns `None` when nothing usable is left, i.e. the result is
/// empty or starts with a digit.
pub fn key_candidate(text: &str) -> Option<String> {
    let last = text.split_whitespace().last()?;
    let key = NON_WORD_REGEX.replace_all(last, "");

    if key.is_empty() || LEADING_DIGIT_REGEX.is_match(&key) {
        None
    } else {
        Some(key.into_owned())
    }
}

/// Key for a fragment without a usable candidate.
pub fn fallback_key(index: usize) -> String {
    format!("{}{}", FALLBACK_KEY_PREFIX, index)
}

/// Assigns unique keys within one table.
///
/// Holds the set of keys handed out so far and, per base key, the suffix
/// counter reached by the last collision.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    used: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or the first free `base_<n>` if `base` is taken.
    pub fn allocate(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }

        let counter = self.next_suffix.entry(base.to_string()).or_insert(1);
        loop {
            let candidate = format!("{}_{}", base, counter);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            *counter += 1;
        }
    }
}

/// One key/text pair of a resource table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub key: String,
    /// Fragment text after placeholder normalization, unescaped.
    pub text: String,
}

impl ResourceEntry {
    /// The text as a backtick-delimited template literal.
    pub fn template_literal(&self) -> String {
        format!("`{}`", escape_backticks(&self.text))
    }
}

/// Ordered key/text mapping for one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTable {
    entries: Vec<ResourceEntry>,
}

impl ResourceTable {
    /// Build a table from fragments in discovery order.
    ///
    /// Collision tracking starts empty on every call, so two calls with the
    /// same fragments always give the same table.
    pub fn from_fragments<S: AsRef<str>>(fragments: &[S]) -> Self {
        let mut allocator = KeyAllocator::new();

        let entries = fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| {
                let text = normalize_placeholders(fragment.as_ref());
                let base = key_candidate(&text).unwrap_or_else(|| fallback_key(index));
                let key = allocator.allocate(&base);
                ResourceEntry { key, text }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResourceTable {
    type Item = &'a ResourceEntry;
    type IntoIter = std::slice::Iter<'a, ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
