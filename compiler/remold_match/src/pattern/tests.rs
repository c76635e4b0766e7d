#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use pretty_assertions::assert_eq;
use regex::Regex;

fn full(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", type_regex(pattern))).unwrap()
}

#[test]
fn literal_names_escape_dots() {
    assert_eq!(type_regex("java.util.List"), r"java\.util\.List");
    assert!(full("java.util.List").is_match("java.util.List"));
    assert!(!full("java.util.List").is_match("javaXutil.List"));
}

#[test]
fn star_stays_inside_one_segment() {
    let regex = full("java.util.*");
    assert!(regex.is_match("java.util.List"));
    assert!(!regex.is_match("java.util.concurrent.Future"));
}

#[test]
fn lone_star_matches_any_type() {
    let regex = full("*");
    assert!(regex.is_match("java.util.concurrent.Future"));
    assert!(regex.is_match("int[]"));
    assert!(!regex.is_match("int,long"));
}

#[test]
fn double_dot_spans_packages() {
    let regex = full("com..Service");
    assert!(regex.is_match("com.Service"));
    assert!(regex.is_match("com.acme.billing.Service"));
    assert!(!regex.is_match("org.acme.Service"));
}

#[test]
fn java_lang_names_are_qualified() {
    assert!(full("String").is_match("java.lang.String"));
    assert!(full("Object[]").is_match("java.lang.Object[]"));
    assert!(full("int").is_match("int"));
    assert!(full("Foo").is_match("Foo"));
}

#[test]
fn dollar_in_nested_names_is_literal() {
    assert!(full("a.Outer$Inner").is_match("a.Outer$Inner"));
}

#[test]
fn scanner_reports_position_of_bad_char() {
    let mut scanner = Scanner::new("a.B#");
    assert_eq!(scanner.type_pattern().unwrap(), "a.B");
    match scanner.expect('(') {
        Err(MatcherError::UnexpectedChar {
            position, found, ..
        }) => {
            assert_eq!(position, 3);
            assert_eq!(found, '#');
        }
        other => panic!("expected an unexpected-char error, got {other:?}"),
    }
    scanner.bump();
    assert!(matches!(scanner.expect(')'), Err(MatcherError::UnexpectedEnd)));
}
