//! Tests for wildcard-to-regex conversion against the real regex engine.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridclip::pattern::{escape_regex, wildcard_matcher, wildcard_to_regex_string};
use regex::Regex;

// ============================================================================
// Conversion output
// ============================================================================

#[test]
fn test_star_becomes_lazy_any() {
    assert_eq!(wildcard_to_regex_string("*"), ".*?");
    assert_eq!(wildcard_to_regex_string("pre*post"), "pre.*?post");
}

#[test]
fn test_question_becomes_single_any() {
    assert_eq!(wildcard_to_regex_string("???"), "...");
}

#[test]
fn test_every_escaped_character_survives_compilation() {
    let converted = wildcard_to_regex_string("()[]$^.{}|\\");
    let re = Regex::new(&converted).unwrap();
    assert!(re.is_match("()[]$^.{}|\\"));
}

// ============================================================================
// Matching behavior
// ============================================================================

#[test]
fn test_wildcard_matcher_is_anchored() {
    let re = wildcard_matcher("rate*").unwrap();
    assert!(re.is_match("rate.cube"));
    assert!(!re.is_match("shipping.rate.cube"));
}

#[test]
fn test_wildcard_dot_is_literal() {
    let re = wildcard_matcher("a.b").unwrap();
    assert!(re.is_match("a.b"));
    assert!(!re.is_match("axb"));
}

#[test]
fn test_escape_regex_makes_literal_pattern() {
    let source = "price (usd) [2024]";
    let re = Regex::new(&escape_regex(source)).unwrap();
    assert!(re.is_match(source));
    assert!(!re.is_match("price usd 2024"));
}
