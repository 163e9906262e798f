//! Parses a right-recursive grammar against a run of input, with `RUST_LOG`
//! controlling the recognizer's trace-level instrumentation.
//!
//! ```text
//! RUST_LOG=earleo=trace cargo run --example recognize
//! ```

use earleo::{parse, Elem, RuleSpec};

fn main() {
    env_logger::init();

    // start -> A; A -> a A; A -> a  (right-recursive, Leo-eligible)
    let rules = vec![
        RuleSpec::new("start", vec![Elem::Ref("A".into())]),
        RuleSpec::new("A", vec![Elem::Terminal("a".into()), Elem::Ref("A".into())]),
        RuleSpec::new("A", vec![Elem::Terminal("a".into())]),
    ];
    let grammar = earleo::Grammar::new(rules).expect("valid grammar");

    let input = "a".repeat(20);
    let tokens: Vec<String> = input.chars().map(|c| c.to_string()).collect();
    let ok = parse(&grammar, tokens.iter().map(String::as_str));

    println!("parsed {} a's: {}", input.len(), if ok { "success" } else { "failure" });
}
