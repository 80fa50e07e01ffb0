use crate::models::Note;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped in a slug. Unreserved characters, the sub-delimiters that are
/// legal inside a path segment, and `/` (so nested slugs stay path-shaped) are
/// kept literal.
const SLUG_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@')
    .remove(b'/');

/// Normalizes `note.slug` in place, falling back to the title when no slug is set.
pub fn build_slug(note: &mut Note) {
    note.slug = normalize_slug(&note.slug, &note.title);
}

pub fn normalize_slug(slug: &str, title: &str) -> String {
    let slug = slug.strip_suffix(".md").unwrap_or(slug);
    let source = if slug.is_empty() { title } else { slug };

    let dashed = collapse_dashes(&source.replace(' ', "-"));
    let trimmed = trim_separators(&dashed);

    utf8_percent_encode(trimmed, SLUG_ENCODE_SET).to_string()
}

fn collapse_dashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

// Slashes first, then dashes; repeated because each pass can expose the other.
fn trim_separators(mut s: &str) -> &str {
    loop {
        let next = s.trim_matches('/').trim_matches('-');
        if next.len() == s.len() {
            return next;
        }
        s = next;
    }
}
