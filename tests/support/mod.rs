//! Grammar-building helpers shared by the integration tests, mirroring the
//! concrete end-to-end scenarios of spec §8.

use earleo::{Elem, Grammar, RuleSpec};

/// `lhs -> rhs`, with `rhs` built from [`r`] (nonterminal ref) and
/// [`t`] (terminal literal) calls.
pub fn rule(lhs: &str, rhs: Vec<Elem>) -> RuleSpec {
    RuleSpec::new(lhs, rhs)
}

/// A reference to another rule's left-hand side.
pub fn r(name: &str) -> Elem {
    Elem::Ref(name.to_owned())
}

/// A terminal, matched literally against an input token.
pub fn t(literal: &str) -> Elem {
    Elem::Terminal(literal.to_owned())
}

/// Splits `s` into one single-character token per `char`, the reference
/// tokenization spec §6 describes ("input is a string and each character
/// is a token").
pub fn chars(s: &str) -> Vec<String> {
    s.chars().map(|c| c.to_string()).collect()
}

/// A minimal JSON-like grammar (spec §8 scenario 7): numbers, quoted
/// strings, and `{ "key": value, ... }` objects, tokenized character by
/// character.
pub fn json_like_grammar() -> Grammar {
    Grammar::new(vec![
        rule("start", vec![r("object")]),
        rule("object", vec![t("{"), r("pairs"), t("}")]),
        rule("pairs", vec![r("pair")]),
        rule("pairs", vec![r("pair"), t(","), r("pairs")]),
        rule("pair", vec![r("string"), t(":"), r("value")]),
        rule("value", vec![r("string")]),
        rule("value", vec![r("number")]),
        rule("string", vec![t("\""), r("chars"), t("\"")]),
        rule("chars", vec![r("char")]),
        rule("chars", vec![r("char"), r("chars")]),
        rule("char", vec![t("a")]),
        rule("char", vec![t("b")]),
        rule("char", vec![t("c")]),
        rule("number", vec![r("digit")]),
        rule("number", vec![r("number"), r("digit")]),
        rule("digit", vec![t("0")]),
        rule("digit", vec![t("1")]),
        rule("digit", vec![t("2")]),
        rule("digit", vec![t("3")]),
        rule("digit", vec![t("4")]),
        rule("digit", vec![t("5")]),
        rule("digit", vec![t("6")]),
        rule("digit", vec![t("7")]),
        rule("digit", vec![t("8")]),
        rule("digit", vec![t("9")]),
    ])
    .unwrap()
}
