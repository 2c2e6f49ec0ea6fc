//! String primitives for path segments and display names.
//!
//! Node paths are slash-delimited slugs (`about/our-team`). When a node is
//! created without an explicit display name, its last path segment is
//! humanized: dashes and underscores become spaces and every word gets an
//! uppercase first letter.
//!
//! - `our-team` → "Our Team"
//! - `contact_us` → "Contact Us"
//! - `FAQ` → "FAQ" (existing capitals are kept)
//! - `90` → "90"

/// Turn a kebab-case or snake_case slug into Title Case.
///
/// Only the first character of each word is changed; the rest of the word
/// is left as written.
pub fn humanize(slug: &str) -> String {
    let spaced = slug.replace(['-', '_'], " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Remove `prefix` from the start of `s` if present, otherwise return `s` unchanged.
pub fn remove_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Remove `suffix` from the end of `s` if present, otherwise return `s` unchanged.
pub fn remove_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Whether `path` lies strictly below `ancestor` in the slash hierarchy.
///
/// `is_below("a", "a/b")` is true, `is_below("a", "ab")` and
/// `is_below("a", "a")` are false.
pub fn is_below(ancestor: &str, path: &str) -> bool {
    path.strip_prefix(ancestor).is_some_and(|rest| rest.starts_with('/'))
}
