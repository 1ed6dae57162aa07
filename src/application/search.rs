use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Separator between paragraphs of a rendered price listing.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Lowercase `input` and drop combining marks after canonical decomposition,
/// so that "José" and "JOSE" compare equal. Spacing and enclosing marks are
/// dropped as well as nonspacing ones.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Split a rendered listing into its paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .collect()
}

/// Keep the blocks whose normalized text contains the normalized query.
pub fn filter<'a, S: AsRef<str>>(blocks: &'a [S], query: &str) -> Vec<&'a str> {
    let needle = normalize(query);
    blocks
        .iter()
        .map(|block| block.as_ref())
        .filter(|block| needle.is_empty() || normalize(block).contains(&needle))
        .collect()
}
