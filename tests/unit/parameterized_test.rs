//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use making_of::{BodyEntry, HookPolicy};
use making_of::parser::{parse_body, parse_title};
use making_of::paths;
use std::path::{Path, PathBuf};
use test_case::test_case;

// =============================================================================
// Bullet Tests
// =============================================================================

#[test_case("* item", "item" ; "star space")]
#[test_case("*item", "item" ; "star no space")]
#[test_case("*   item", "item" ; "star many spaces")]
#[test_case("*\titem", "item" ; "star tab")]
#[test_case("  * item  ", "item" ; "surrounding whitespace")]
#[test_case("*", "" ; "bare star")]
#[test_case("* item with * inside", "item with * inside" ; "inner star kept")]
fn test_single_bullet(line: &str, expected: &str) {
    let entries = parse_body(line);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], BodyEntry::from(vec![expected]));
}

#[test_case("- dash" ; "dash bullet is a paragraph")]
#[test_case("1. numbered" ; "numbered item is a paragraph")]
#[test_case("plain text" ; "plain text")]
fn test_non_star_lines_are_paragraphs(line: &str) {
    let entries = parse_body(line);
    assert_eq!(entries, vec![BodyEntry::from(line)]);
}

// =============================================================================
// Title Tests
// =============================================================================

#[test_case("Subject", "Subject" ; "single line")]
#[test_case("Subject\nMore", "Subject" ; "embedded newline")]
#[test_case("", "" ; "empty subject")]
fn test_title(subject: &str, expected: &str) {
    assert_eq!(parse_title(subject), expected);
}

// =============================================================================
// Hook Policy Tests
// =============================================================================

#[test_case("ignore", HookPolicy::Ignore ; "ignore policy")]
#[test_case("IGNORE", HookPolicy::Ignore ; "uppercase ignore")]
#[test_case("fail", HookPolicy::Fail ; "fail policy")]
#[test_case("Fail", HookPolicy::Fail ; "mixed case fail")]
#[test_case("skip", HookPolicy::Skip ; "skip policy")]
fn test_hook_policy_parsing(input: &str, expected: HookPolicy) {
    let parsed: HookPolicy = input.parse().unwrap();
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), input.to_lowercase());
}

#[test_case("" ; "empty string")]
#[test_case("abort" ; "unknown policy")]
fn test_hook_policy_parsing_errors(input: &str) {
    let result: Result<HookPolicy, _> = input.parse();
    assert!(result.is_err());
}

// =============================================================================
// Path Tests
// =============================================================================

#[test_case("making-of/commits", "/repo/making-of/commits" ; "relative dir")]
#[test_case("out.js", "/repo/out.js" ; "relative file")]
#[test_case("/abs/out.js", "/abs/out.js" ; "absolute path")]
fn test_resolve(input: &str, expected: &str) {
    assert_eq!(paths::resolve(Path::new("/repo"), Path::new(input)), PathBuf::from(expected));
}
