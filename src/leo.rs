//! Leo's right-recursion optimization (spec §4.5): eligibility test and the
//! bookkeeping that collapses a chain of right-recursive completions into a
//! single chart item per Earley set.
//!
//! Grounded in the same reachability-matrix reasoning the teacher's
//! `cfg-classify-recursive` crate uses to classify a rule as right-recursive
//! (`rule.rhs.last()` tested against a transitively-closed derivation
//! matrix), generalized here from grammar-level classification to a
//! per-item eligibility test performed at parse time.

use crate::chart::SetIndex;
use crate::grammar::Grammar;
use crate::rule::RuleId;

/// Whether `rule` is right-recursive: its rightmost rhs symbol either *is*
/// its own lhs, or can reach the lhs through a chain of rules each
/// recursing on their own rightmost symbol (spec §4.5's eligibility
/// clause, first half).
pub(crate) fn rule_is_right_recursive(grammar: &Grammar, rule: RuleId) -> bool {
    let rule = grammar.rule(rule);
    match rule.last_rhs() {
        Some(last) => last == rule.lhs() || grammar.right_recursion(rule.lhs(), last),
        None => false,
    }
}

/// Decides the `leo` field for a freshly produced item for `rule` at dot
/// position `pos`, originating at Earley set `origin`.
///
/// Eligible iff `rule` is right-recursive *and* `pos` is positioned so that
/// only the tail (right-recursive) symbol remains, i.e. `pos == rhs.len() -
/// 1`. When eligible, the item is annotated with `origin` as the base of a
/// new Leo chain; otherwise it carries no Leo annotation.
pub(crate) fn eligible_leo_origin(
    grammar: &Grammar,
    rule: RuleId,
    pos: usize,
    origin: SetIndex,
) -> Option<SetIndex> {
    let rhs_len = grammar.rule(rule).rhs().len();
    if rhs_len == 0 || pos != rhs_len - 1 {
        return None;
    }
    if rule_is_right_recursive(grammar, rule) {
        Some(origin)
    } else {
        None
    }
}

/// Computes the `leo` field to carry on an item advanced from `from_leo`
/// (the advancing item's own `leo` field) over to a new position `new_pos`
/// of `rule`, originating at `origin` (spec §4.5 "Leo-field propagation on
/// advance"): carry forward if already present, otherwise recompute from
/// the rule's new dot position. This is what collapses an entire
/// right-recursive chain back to its common origin rather than losing the
/// annotation at every step.
pub(crate) fn propagate_on_advance(
    grammar: &Grammar,
    from_leo: Option<SetIndex>,
    rule: RuleId,
    new_pos: usize,
    origin: SetIndex,
) -> Option<SetIndex> {
    from_leo.or_else(|| eligible_leo_origin(grammar, rule, new_pos, origin))
}
