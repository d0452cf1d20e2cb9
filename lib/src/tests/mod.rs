/*! End-to-end tests. */

use pretty_assertions::assert_eq;

use crate::{compile, Matcher};

macro_rules! pattern_match {
    ($description:literal, $candidate:expr) => {{
        let pattern = compile($description).unwrap();
        assert!(
            Matcher::new(&pattern).matches($candidate),
            "`{}` should match `{}`",
            $candidate,
            $description
        );
    }};
}

macro_rules! pattern_no_match {
    ($description:literal, $candidate:expr) => {{
        let pattern = compile($description).unwrap();
        assert!(
            !Matcher::new(&pattern).matches($candidate),
            "`{}` should not match `{}`",
            $candidate,
            $description
        );
    }};
}

#[test]
fn email_shaped() {
    pattern_match!("[:graph:]@[:graph:].[:alpha:]", "a@b.c");
    pattern_match!("[:graph:]@[:graph:].[:alpha:]", "1@#.z");
    pattern_no_match!("[:graph:]@[:graph:].[:alpha:]", "a@b.1");
    pattern_no_match!("[:graph:]@[:graph:].[:alpha:]", "a@b.cd");
    pattern_no_match!("[:graph:]@[:graph:].[:alpha:]", "a b.c");
    pattern_no_match!("[:graph:]@[:graph:].[:alpha:]", "a@b,c");
}

#[test]
fn date_shaped() {
    let description = "[:digit:][:digit:][:digit:][:digit:]-\
                       [:digit:][:digit:]-[:digit:][:digit:]";
    let pattern = compile(description).unwrap();
    let matcher = Matcher::new(&pattern);
    assert!(matcher.matches("2026-08-30"));
    assert!(!matcher.matches("2026-8-30"));
    assert!(!matcher.matches("2026/08/30"));
}

#[test]
fn token_count_matches_description() {
    // One token per literal character plus one per class token.
    let pattern = compile("[:graph:]@[:graph:].[:alpha:]").unwrap();
    assert_eq!(pattern.len(), 5);

    let pattern = compile("v[:digit:].[:digit:]").unwrap();
    assert_eq!(pattern.len(), 4);
}

#[test]
fn determinism() {
    let a = compile("[:graph:]@[:graph:].[:alpha:]").unwrap();
    let b = compile("[:graph:]@[:graph:].[:alpha:]").unwrap();
    assert_eq!(a, b);
    for candidate in ["a@b.c", "", "x", "a@b,c", "a@b.cc"] {
        assert_eq!(a.matches(candidate), b.matches(candidate));
    }
}

#[test]
fn pattern_is_shareable_across_threads() {
    let pattern = compile("[:digit:][:digit:]").unwrap();
    std::thread::scope(|scope| {
        let ok = scope.spawn(|| Matcher::new(&pattern).matches("42"));
        let err = scope.spawn(|| Matcher::new(&pattern).matches("4a"));
        assert!(ok.join().unwrap());
        assert!(!err.join().unwrap());
    });
}
