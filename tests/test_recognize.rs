//! Integration tests for the concrete end-to-end scenarios of spec §8.

mod support;

use earleo::parse;
use support::{chars, json_like_grammar, r, rule, t};

fn parse_str(grammar: &earleo::Grammar, s: &str) -> bool {
    let tokens = chars(s);
    parse(grammar, tokens.iter().map(String::as_str))
}

#[test]
fn json_like_grammar_accepts_nested_structure() {
    let g = json_like_grammar();
    assert!(parse_str(&g, r#"{"a":"aaaaaaaaa","a":0123}"#));
}

#[test]
fn json_like_grammar_rejects_missing_closing_brace() {
    let g = json_like_grammar();
    assert!(!parse_str(&g, r#"{"a":"aaaaaaaaa","a":0123"#));
}

#[test]
fn json_like_grammar_rejects_empty_pairs() {
    let g = json_like_grammar();
    assert!(!parse_str(&g, "{}"));
}

#[test]
fn grammar_round_trip_recognizes_same_language() {
    let rules = || {
        vec![
            rule("start", vec![r("A")]),
            rule("A", vec![t("a"), r("A")]),
            rule("A", vec![t("a")]),
        ]
    };
    let g1 = earleo::Grammar::new(rules()).unwrap();
    let g2 = earleo::Grammar::new(rules()).unwrap();
    for input in ["a", "aa", "aaaaa", "", "b"] {
        assert_eq!(parse_str(&g1, input), parse_str(&g2, input), "input {:?}", input);
    }
}

#[test]
fn right_recursive_grammar_succeeds_at_scale() {
    // A -> a A | a. Item-count linearity from Leo collapsing is exercised
    // directly in src/parser.rs's unit tests, which can see chart
    // internals; here we just confirm correctness holds at a size that
    // would be unreasonably slow to recheck quadratically by hand.
    let g = earleo::Grammar::new(vec![
        rule("start", vec![r("A")]),
        rule("A", vec![t("a"), r("A")]),
        rule("A", vec![t("a")]),
    ])
    .unwrap();

    for n in [5, 50, 200] {
        assert!(parse_str(&g, &"a".repeat(n)), "n = {}", n);
    }
}

#[test]
fn single_pair_json_like_object_succeeds() {
    let g = json_like_grammar();
    assert!(parse_str(&g, r#"{"a":"b"}"#));
}
