//! Wildcard and regex string helpers for filter inputs.
//!
//! Users type DOS-style patterns (`*`, `?`) into search boxes; these convert
//! them to regex source the way the grid editor's search expects.

use regex::Regex;

use crate::error::Result;

/// Convert a string containing DOS-style `*` or `?` to regex source.
///
/// `*` becomes a lazy `.*?`, `?` becomes `.`, and regex metacharacters in
/// the remainder are escaped.
#[must_use]
pub fn wildcard_to_regex_string(wildcard: &str) -> String {
    let mut s = String::with_capacity(wildcard.len() * 2);
    for c in wildcard.chars() {
        match c {
            '*' => s.push_str(".*?"),
            '?' => s.push('.'),
            // escape special regexp-characters
            '(' | ')' | '[' | ']' | '$' | '^' | '.' | '{' | '}' | '|' | '\\' => {
                s.push('\\');
                s.push(c);
            }
            _ => s.push(c),
        }
    }
    s
}

/// Escape regex metacharacters in a source string, e.g. period becomes `\.`.
#[must_use]
pub fn escape_regex(source: &str) -> String {
    let mut s = String::with_capacity(source.len() * 2);
    for c in source.chars() {
        match c {
            '.' | '*' | '+' | '?' | '^' | '=' | '!' | ':' | '$' | '{' | '}' | '(' | ')' | '|'
            | '[' | ']' | '/' | '\\' => {
                s.push('\\');
                s.push(c);
            }
            _ => s.push(c),
        }
    }
    s
}

/// Compile a DOS-style wildcard into an anchored matcher.
///
/// # Errors
/// Returns an error if the converted pattern fails to compile.
pub fn wildcard_matcher(wildcard: &str) -> Result<Regex> {
    let pattern = format!("^{}$", wildcard_to_regex_string(wildcard));
    Ok(Regex::new(&pattern)?)
}
