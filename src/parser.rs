//! The recognizer driver (spec §4.4): orchestrates predict / scan / advance
//! / complete for each token and answers success queries.

use log::trace;

use crate::chart::{Chart, Item, Kind, SetIndex};
use crate::grammar::Grammar;
use crate::leo;
use crate::rule::RuleId;
use crate::symbol::Symbol;

/// A parser for one input stream over a shared, immutable [`Grammar`].
///
/// Owns one [`Chart`] for the lifetime of the parse. Not thread-safe: a
/// `Grammar` may be shared across parsers running on independent threads,
/// but each `Parser`'s chart is exclusive to it (spec §5).
pub struct Parser<'g> {
    grammar: &'g Grammar,
    chart: Chart,
}

impl<'g> Parser<'g> {
    /// Constructs a parser over `grammar`, seeding Earley set 0 with the
    /// accept rule's full prediction closure and running an initial
    /// `complete` pass to resolve any immediately-nullable derivations.
    pub fn new(grammar: &'g Grammar) -> Self {
        let mut parser = Parser {
            grammar,
            chart: Chart::new(),
        };
        let accept_symbol = grammar.rule(grammar.accept_rule()).lhs();
        for &rule in grammar.predictions_for(accept_symbol) {
            parser.chart.set_mut(0).add(Item::new(rule, 0, 0, None, Kind::Initial));
        }
        parser.complete(0);
        parser
    }

    /// Advances the parser by one input token, resolving it against the
    /// grammar's terminal literals. A token whose literal isn't present in
    /// the symbol table matches nothing and blocks advancement through it
    /// (spec §4.2); this is not an error, the parse simply cannot progress
    /// past it.
    pub fn push(&mut self, token: &str) {
        let sym = self.grammar.symbol_of(token);
        let prev = self.chart.len() - 1;
        let k = self.chart.push_set();

        if let Some(sym) = sym {
            self.advance(prev, k, sym);
        }
        trace!("push({:?}): set {} has {} items after advance", token, k, self.chart.set(k).len());

        self.complete(k);
        trace!("push({:?}): set {} has {} items after complete", token, k, self.chart.set(k).len());
    }

    /// Advance phase (spec §4.4 step 2): for every item in `prev` expecting
    /// `sym` next, insert its advanced form into `k`, then immediately run
    /// the local predict-from-candidate step for the advanced item.
    fn advance(&mut self, prev: SetIndex, k: SetIndex, sym: Symbol) {
        let candidates: Vec<Item> = self.chart.set(prev).iter().copied().collect();
        for item in candidates {
            let rule = self.grammar.rule(item.rule());
            if item.pos() >= rule.rhs().len() || rule.rhs()[item.pos()] != sym {
                continue;
            }
            let new_pos = item.pos() + 1;
            let new_leo = leo::propagate_on_advance(self.grammar, item.leo(), item.rule(), new_pos, item.origin());
            self.chart
                .set_mut(k)
                .add(Item::new(item.rule(), new_pos, item.origin(), new_leo, Kind::Advanced));
            self.predict_from(k, item.rule(), new_pos);
        }
    }

    /// Predict-from-candidate step: if `rule` dotted at `pos` still expects
    /// a further symbol, union that symbol's prediction closure into set
    /// `k`. Run after every advance, whether produced by scanning a token
    /// (`advance`) or by completing a nonterminal (`complete_item`/
    /// `complete_leo`) — otherwise a completion landing mid-rhs would leave
    /// the symbol that follows it unpredicted, and nothing could ever scan
    /// past it.
    fn predict_from(&mut self, k: SetIndex, rule: RuleId, pos: usize) {
        let rhs = self.grammar.rule(rule).rhs();
        if pos < rhs.len() {
            let next_sym = rhs[pos];
            for &predicted in self.grammar.predictions_for(next_sym) {
                self.chart.set_mut(k).add(Item::new(predicted, 0, k, None, Kind::Predicted));
            }
        }
    }

    /// Complete phase (spec §4.5): runs to a fixed point over set `k`,
    /// since completions can themselves complete further items. Index-based
    /// so items appended mid-loop (by this very loop) are visited within
    /// the same pass.
    fn complete(&mut self, k: SetIndex) {
        let mut i = 0;
        while i < self.chart.set(k).len() {
            let item = self.chart.set(k).item_at(i);
            i += 1;
            let rule = self.grammar.rule(item.rule());
            if item.pos() == rule.rhs().len() {
                self.complete_item(k, item, rule.lhs());
            }
        }
    }

    fn complete_item(&mut self, k: SetIndex, item: Item, lhs: Symbol) {
        if let Some(leo_origin) = item.leo() {
            self.complete_leo(k, leo_origin, lhs);
        } else {
            self.advance_items_at_origin(k, item.origin(), lhs);
        }
    }

    /// Leo path (spec §4.5a): jump straight to the chain's base instead of
    /// walking the ladder of intermediate completions.
    fn complete_leo(&mut self, k: SetIndex, leo_origin: SetIndex, lhs: Symbol) {
        let target = self.find_leo_target(leo_origin, lhs);
        let Some(target) = target else { return };

        let new_origin = target.leo().unwrap_or(target.origin());
        let new_pos = target.pos() + 1;
        let new_leo = leo::propagate_on_advance(self.grammar, None, target.rule(), new_pos, new_origin);
        trace!("leo completion: rule {} pos {} origin {}", target.rule(), new_pos, new_origin);
        self.chart
            .set_mut(k)
            .add(Item::new(target.rule(), new_pos, new_origin, new_leo, Kind::Leo));
        self.predict_from(k, target.rule(), new_pos);
    }

    /// Finds the unique item in `sets[leo_origin]` whose next-expected
    /// symbol is `lhs` — the "Leo target". Spec §9 says this should be
    /// asserted, not silently assumed: more than one target is a grammar
    /// bug, not a runtime condition to tolerate.
    fn find_leo_target(&self, leo_origin: SetIndex, lhs: Symbol) -> Option<Item> {
        let mut found: Option<Item> = None;
        for item in self.chart.set(leo_origin).iter() {
            let rule = self.grammar.rule(item.rule());
            if item.pos() < rule.rhs().len() && rule.rhs()[item.pos()] == lhs {
                assert!(
                    found.is_none(),
                    "more than one Leo target for (set {}, symbol {:?})",
                    leo_origin,
                    lhs
                );
                found = Some(*item);
            }
        }
        found
    }

    /// Earley path (spec §4.5b): every item in `sets[origin]` — at *any*
    /// dot position, not only the pos-0 items freshly predicted there —
    /// whose next-expected symbol is sympred-reachable from `lhs` advances
    /// into `k`. `origin` here is the completed item's own origin, i.e. the
    /// set in which its rule instance began; an item `X -> α • Y β` with
    /// `α` non-empty lives in that very set, not one token further back,
    /// since that's where the dot walked up to `Y` in the first place.
    fn advance_items_at_origin(&mut self, k: SetIndex, origin: SetIndex, lhs: Symbol) {
        let candidates: Vec<Item> = self.chart.set(origin).iter().copied().collect();
        for c in candidates {
            let rule = self.grammar.rule(c.rule());
            if c.pos() >= rule.rhs().len() {
                continue;
            }
            let expected = rule.rhs()[c.pos()];
            if self.grammar.sympred(lhs, expected) {
                let new_pos = c.pos() + 1;
                let new_leo = leo::propagate_on_advance(self.grammar, c.leo(), c.rule(), new_pos, c.origin());
                self.chart
                    .set_mut(k)
                    .add(Item::new(c.rule(), new_pos, c.origin(), new_leo, Kind::Completed));
                self.predict_from(k, c.rule(), new_pos);
            }
        }
    }

    /// The number of distinct accepting items in the final set: an item for
    /// the accept rule, fully dotted, originating at 0. Exactly one means
    /// success; more than one is an ambiguous parse (spec §4.4, §9 "Open
    /// questions": exposed here so callers can implement their own
    /// ambiguity policy instead of the default fail-on-ambiguity one).
    pub fn accept_count(&self) -> usize {
        let k = self.chart.len() - 1;
        let accept_rule = self.grammar.accept_rule();
        let accept_len = self.grammar.rule(accept_rule).rhs().len();
        self.chart
            .set(k)
            .iter()
            .filter(|item| item.rule() == accept_rule && item.pos() == accept_len && item.origin() == 0)
            .count()
    }

    /// Whether the input pushed so far is in the grammar's language: the
    /// final Earley set contains exactly one accepting item for the accept
    /// rule (spec §4.4). Ambiguous parses (more than one) are reported as
    /// failure, matching spec §7's current fail-on-ambiguity policy.
    pub fn success(&self) -> bool {
        self.accept_count() == 1
    }
}

/// Convenience wrapper (spec §6): builds a [`Parser`], pushes every token in
/// `input` in order, and returns [`Parser::success`].
pub fn parse<'t>(grammar: &Grammar, input: impl IntoIterator<Item = &'t str>) -> bool {
    let mut parser = Parser::new(grammar);
    for token in input {
        parser.push(token);
    }
    parser.success()
}
