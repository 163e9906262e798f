//! The grammar builder (spec §4.2): interns a caller-supplied, name-based
//! rule list into numeric form and precomputes the bit matrices that drive
//! the recognizer's hot path.

use log::debug;

use crate::bitmatrix::SymbolMatrix;
use crate::error::GrammarError;
use crate::rule::{Rule, RuleId, RuleSpec};
use crate::symbol::{Symbol, SymbolTable, ACCEPT_NAME, START_NAME};

/// An immutable, precomputed context-free grammar (spec §3 "Grammar").
///
/// Constructed once via [`Grammar::new`] and shared read-only across any
/// number of [`Parser`](crate::parser::Parser)s.
pub struct Grammar {
    symbols: SymbolTable,
    rules: Vec<Rule>,
    by_symbol: Vec<Vec<RuleId>>,
    /// Reflexive transitive closure of "symbol `a` can begin a rule whose
    /// lhs is `b`" (spec §3 "sympred").
    sympred: SymbolMatrix,
    /// For each symbol, the rules to add to the chart when it's predicted
    /// (spec §3 "predictions_for_symbols"), in a fast-iteration list form.
    predictions_for_symbols: Vec<Vec<RuleId>>,
    /// Transitive closure of "a rule with lhs X ends in symbol Y" (spec §3
    /// "right_recursion"), used for Leo eligibility.
    right_recursion: SymbolMatrix,
    accept_rule: RuleId,
}

impl Grammar {
    /// Builds a grammar from a caller-supplied rule list, following the
    /// six-step pipeline of spec §4.2. Order matters: each step depends on
    /// the ones before it.
    ///
    /// Returns an error only for malformed caller input (an explicit use of
    /// the reserved `_accept` name, or an empty rule list). A rule list with
    /// no rule whose lhs is named `start` is **not** an error: construction
    /// still succeeds permissively (spec §4.2 "Failure mode"), and the
    /// resulting grammar simply accepts nothing.
    pub fn new(mut rule_specs: Vec<RuleSpec>) -> Result<Grammar, GrammarError> {
        if rule_specs.is_empty() {
            return Err(GrammarError::EmptyRuleSet);
        }
        for spec in &rule_specs {
            for name in spec.names() {
                if name == ACCEPT_NAME {
                    return Err(GrammarError::ReservedName(name.to_owned()));
                }
            }
        }

        // Step 1: append the synthetic accept rule. Its id is the last one,
        // since rule ids are assigned in (post-append) input order.
        rule_specs.push(RuleSpec::new(
            ACCEPT_NAME,
            vec![crate::rule::Elem::Ref(START_NAME.to_owned())],
        ));
        let accept_rule: RuleId = rule_specs.len() - 1;

        // Step 2: census symbols and rewrite rules from names to ids.
        let mut symbols = SymbolTable::new();
        let rules: Vec<Rule> = rule_specs
            .iter()
            .map(|spec| {
                let lhs = symbols.intern(&spec.lhs);
                let rhs = spec
                    .rhs
                    .iter()
                    .map(|elem| symbols.intern(match elem {
                        crate::rule::Elem::Ref(name) | crate::rule::Elem::Terminal(name) => name,
                    }))
                    .collect();
                Rule { lhs, rhs }
            })
            .collect();
        let num_syms = symbols.num_syms();

        // A symbol is terminal iff it never occurs as any rule's lhs.
        let mut is_lhs = vec![false; num_syms];
        for rule in &rules {
            is_lhs[rule.lhs.usize()] = true;
        }
        let terminal_flags: Vec<bool> = is_lhs.iter().map(|&lhs| !lhs).collect();
        symbols.set_terminal_flags(terminal_flags);

        // Step 3: index by_symbol.
        let mut by_symbol: Vec<Vec<RuleId>> = vec![Vec::new(); num_syms];
        for (id, rule) in rules.iter().enumerate() {
            by_symbol[rule.lhs.usize()].push(id);
        }

        // Step 4: sympred = reflexive transitive closure of
        // "rhs[0] can begin a rule whose lhs is r.lhs".
        let mut sympred = SymbolMatrix::new(num_syms);
        for rule in &rules {
            if let Some(&first) = rule.rhs.first() {
                sympred.set(first, rule.lhs, true);
            }
        }
        sympred.set_reflexive();
        sympred.transitive_closure();

        // Step 5: predictions_for_symbols[s] = rules to add when s is
        // predicted. A rule with lhs b belongs here iff b transitively
        // feeds s as a leftmost symbol, i.e. sympred[b][s] — a *column*
        // read of sympred, not a row read: sympred[x][y] is built from
        // "rhs[0]=x, lhs=y" base facts (step 4), so the chain that starts
        // at a predicted symbol s and walks outward through "which rule's
        // lhs was s, and what did that rule start with" runs backwards
        // along sympred's rows, landing on column s.
        let mut predictions_for_symbols: Vec<Vec<RuleId>> = Vec::with_capacity(num_syms);
        for s in 0..num_syms {
            let sym = Symbol::from(s);
            let mut preds: Vec<RuleId> = sympred
                .iter_col(sym)
                .flat_map(|b| by_symbol[b.usize()].iter().copied())
                .collect();
            preds.sort_unstable();
            preds.dedup();
            predictions_for_symbols.push(preds);
        }

        // Step 6: right_recursion = transitive closure of "a rule with lhs X
        // ends in symbol Y".
        let mut right_recursion = SymbolMatrix::new(num_syms);
        for rule in &rules {
            if let Some(last) = rule.last_rhs() {
                right_recursion.set(rule.lhs, last, true);
            }
        }
        right_recursion.transitive_closure();

        debug!(
            "grammar built: {} symbols, {} rules, sympred/right_recursion closed",
            num_syms,
            rules.len()
        );

        Ok(Grammar {
            symbols,
            rules,
            by_symbol,
            sympred,
            predictions_for_symbols,
            right_recursion,
            accept_rule,
        })
    }

    /// The synthetic `_accept → start` rule's id.
    #[inline]
    pub fn accept_rule(&self) -> RuleId {
        self.accept_rule
    }

    /// A rule by id.
    #[inline]
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }

    /// The number of rules, including the synthetic accept rule.
    #[inline]
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// The number of distinct symbols.
    #[inline]
    pub fn num_syms(&self) -> usize {
        self.symbols.num_syms()
    }

    /// The rule ids to add to the chart when `sym` is predicted.
    #[inline]
    pub(crate) fn predictions_for(&self, sym: Symbol) -> &[RuleId] {
        &self.predictions_for_symbols[sym.usize()]
    }

    /// `sympred[a][b]`: starting an item expecting `a` could transitively
    /// require beginning a rule whose lhs is `b`.
    #[inline]
    pub(crate) fn sympred(&self, a: Symbol, b: Symbol) -> bool {
        self.sympred[(a, b)]
    }

    /// `right_recursion[lhs][sym]`: a rule with this lhs can, through a
    /// chain of rightmost symbols, reach a rule ending in `sym`.
    #[inline]
    pub(crate) fn right_recursion(&self, lhs: Symbol, sym: Symbol) -> bool {
        self.right_recursion[(lhs, sym)]
    }

    /// Rule ids whose lhs is `sym`.
    #[inline]
    pub(crate) fn by_symbol(&self, sym: Symbol) -> &[RuleId] {
        &self.by_symbol[sym.usize()]
    }

    /// Resolves an input token's literal to a symbol id, or `None` if the
    /// literal is unknown to this grammar (spec §4.2: such tokens "match
    /// nothing").
    pub fn symbol_of(&self, literal: &str) -> Option<Symbol> {
        self.symbols.lookup(literal)
    }

    /// The name a symbol was interned with.
    pub fn symbol_name(&self, sym: Symbol) -> &str {
        self.symbols.name_of(sym)
    }

    /// Whether `sym` is terminal (never occurs as any rule's lhs).
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.symbols.is_terminal(sym)
    }

    /// The `start` symbol, if any rule defines it.
    pub fn start_symbol(&self) -> Option<Symbol> {
        self.symbols.lookup(START_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Elem::{Ref, Terminal};

    fn spec(lhs: &str, rhs: Vec<crate::rule::Elem>) -> RuleSpec {
        RuleSpec::new(lhs, rhs)
    }

    #[test]
    fn accept_rule_is_appended_last() {
        let g = Grammar::new(vec![spec("start", vec![Terminal("a".into())])]).unwrap();
        assert_eq!(g.accept_rule(), g.num_rules() - 1);
        let accept = g.rule(g.accept_rule());
        assert_eq!(g.symbol_name(accept.lhs()), ACCEPT_NAME);
        assert_eq!(accept.rhs().len(), 1);
        assert_eq!(g.symbol_name(accept.rhs()[0]), "start");
    }

    #[test]
    fn reserved_name_is_rejected() {
        let err = Grammar::new(vec![spec("_accept", vec![Terminal("a".into())])]).unwrap_err();
        assert_eq!(err, GrammarError::ReservedName("_accept".into()));
    }

    #[test]
    fn empty_rule_set_is_rejected() {
        let err = Grammar::new(vec![]).unwrap_err();
        assert_eq!(err, GrammarError::EmptyRuleSet);
    }

    #[test]
    fn missing_start_rule_builds_but_accepts_nothing() {
        let g = Grammar::new(vec![spec("other", vec![Terminal("a".into())])]).unwrap();
        assert!(g.start_symbol().is_none());
    }

    #[test]
    fn terminal_classification() {
        let g = Grammar::new(vec![
            spec("start", vec![Ref("a_rule".into())]),
            spec("a_rule", vec![Terminal("a".into())]),
        ])
        .unwrap();
        let a_rule_sym = g.symbol_of("a_rule").unwrap();
        let a_sym = g.symbol_of("a").unwrap();
        assert!(!g.is_terminal(a_rule_sym));
        assert!(g.is_terminal(a_sym));
    }

    #[test]
    fn sympred_is_reflexive_and_transitive_over_leftmost_symbols() {
        // start -> A; A -> B; B -> "x"
        // sympred[rhs[0]][lhs] = 1 per the construction rule, so the edges
        // run A->start, B->A, x->B before closure; closure must chain them
        // into B->start, x->A, x->start as well.
        let g = Grammar::new(vec![
            spec("start", vec![Ref("A".into())]),
            spec("A", vec![Ref("B".into())]),
            spec("B", vec![Terminal("x".into())]),
        ])
        .unwrap();
        let start = g.symbol_of("start").unwrap();
        let a = g.symbol_of("A").unwrap();
        let b = g.symbol_of("B").unwrap();
        assert!(g.sympred(start, start));
        assert!(g.sympred(a, a));
        assert!(g.sympred(a, start));
        assert!(g.sympred(b, a));
        assert!(g.sympred(b, start));
        assert!(!g.sympred(start, a));
        assert!(!g.sympred(a, b));
    }

    #[test]
    fn right_recursion_detects_tail_chain() {
        // start -> A; A -> "a" A; A -> "a"
        let g = Grammar::new(vec![
            spec("start", vec![Ref("A".into())]),
            spec("A", vec![Terminal("a".into()), Ref("A".into())]),
            spec("A", vec![Terminal("a".into())]),
        ])
        .unwrap();
        let a = g.symbol_of("A").unwrap();
        assert!(g.right_recursion(a, a));
    }
}
