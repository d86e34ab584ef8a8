// src/extract/wiki.rs
// =============================================================================
// This module extracts wiki links from raw page markup.
//
// The rule is deliberately substring-based (no DOM):
// - Only text from the first <p> or <P> onwards is scanned
// - A link is "/wiki/..." directly after a double quote, up to the next quote
// - Links containing '#' (fragments) or ':' (namespaces) are dropped
// - Each link is returned once, in the order it first appears
// =============================================================================

use std::collections::HashSet;

// Path prefix every same-origin article link starts with.
const WIKI_PREFIX: &str = "/wiki/";

/// Tags that mark the start of the page body. Links before the first one are
/// navigation chrome and are ignored.
const BODY_MARKERS: [&str; 2] = ["<p>", "<P>"];

const QUOTE: u8 = b'"';

// Extracts wiki links from a page
//
// Parameters:
//   markup: the raw HTML of one page
//
// Returns: Vec<String> of page identifiers like "/wiki/Rust", deduplicated,
// in document order
//
// Example:
//   markup = r#"<p><a href="/wiki/A">A</a> <a href="/wiki/B">B</a>"#
//   result = ["/wiki/A", "/wiki/B"]
pub fn extract_links(markup: &str) -> Vec<String> {
    let bytes = markup.as_bytes();
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    let mut cursor = body_start(markup);

    while let Some(offset) = markup[cursor..].find(WIKI_PREFIX) {
        let start = cursor + offset;

        // Must be an attribute value, i.e. directly after an opening quote.
        // Anything else is incidental text: skip it and keep scanning.
        if start == 0 || bytes[start - 1] != QUOTE {
            cursor = start + WIKI_PREFIX.len();
            continue;
        }

        // No closing quote means nothing after this point can be a complete link
        let Some(len) = markup[start..].find('"') else {
            break;
        };
        let end = start + len;
        let candidate = &markup[start..end];

        if is_article_link(candidate) && seen.insert(candidate) {
            links.push(candidate.to_string());
        }

        cursor = end + 1;
    }

    links
}

// Byte offset where scanning begins: the earliest body marker, or 0 if the page
// has none.
fn body_start(markup: &str) -> usize {
    BODY_MARKERS
        .iter()
        .filter_map(|marker| markup.find(marker))
        .min()
        .unwrap_or(0)
}

// Fragments point into a page we already have; a colon means a namespace
// (Category:, File:, Help:, ...), not an article.
fn is_article_link(candidate: &str) -> bool {
    !candidate.contains('#') && !candidate.contains(':')
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why work with byte offsets?
//    - str::find returns a byte offset, not a character index
//    - Slicing a &str at a byte offset is only valid on a char boundary
//    - Every offset we slice at comes from finding an ASCII pattern ('"' or
//      "/wiki/"), and ASCII bytes never occur inside a multi-byte character,
//      so these slices can't panic even on non-English pages
//
// 2. What is let-else?
//    - let Some(x) = expr else { ... };
//    - Binds x if the pattern matches, otherwise runs the else block,
//      which must leave the current scope (break, continue, return)
//
// 3. Why both a HashSet and a Vec?
//    - The Vec keeps the order links appear in
//    - The HashSet makes "have we already seen this link?" O(1)
//    - seen.insert() returns false if the value was already present
// -----------------------------------------------------------------------------
