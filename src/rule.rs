//! Grammar rules. Each rule in a context-free grammar consists of a single
//! symbol on its left-hand side and an ordered sequence of symbols on its
//! right-hand side (possibly empty, i.e. nullable).

use crate::symbol::Symbol;

/// One element of a caller-supplied rule's right-hand side (spec §6).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Elem {
    /// Refers to another rule's left-hand side by name.
    Ref(String),
    /// Matched literally against an input token's literal (spec §4.2: a
    /// terminal is simply a symbol that never occurs as any rule's lhs, so
    /// this carries no information beyond the name it interns).
    Terminal(String),
}

impl Elem {
    fn name(&self) -> &str {
        match self {
            Elem::Ref(name) | Elem::Terminal(name) => name,
        }
    }
}

/// A caller-constructed production, referencing symbols by name (spec §6:
/// "Constructors accept plain records").
#[derive(Clone, Debug)]
pub struct RuleSpec {
    /// The rule's left-hand side, by name.
    pub lhs: String,
    /// The rule's right-hand side, in order.
    pub rhs: Vec<Elem>,
}

impl RuleSpec {
    /// Creates a rule `lhs → rhs`.
    pub fn new(lhs: impl Into<String>, rhs: Vec<Elem>) -> Self {
        RuleSpec {
            lhs: lhs.into(),
            rhs,
        }
    }

    /// All names mentioned by this rule (lhs first, then rhs in order).
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.lhs.as_str()).chain(self.rhs.iter().map(Elem::name))
    }
}

/// A rule id, assigned in input order (spec §3: "Rules are identified by
/// small-integer ids assigned in input order").
pub type RuleId = usize;

/// The grammar's internal, numeric representation of a rule (spec §3):
/// a left-hand-side symbol id and an ordered sequence of right-hand-side
/// symbol ids.
#[derive(Clone, Debug)]
pub struct Rule {
    pub(crate) lhs: Symbol,
    pub(crate) rhs: Vec<Symbol>,
}

impl Rule {
    /// The rule's left-hand-side symbol.
    #[inline]
    pub fn lhs(&self) -> Symbol {
        self.lhs
    }

    /// The rule's right-hand-side symbols, in order.
    #[inline]
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// Whether this rule is nullable (has an empty right-hand side).
    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.rhs.is_empty()
    }

    /// The rightmost rhs symbol, if any; used by Leo eligibility (spec §4.5).
    #[inline]
    pub fn last_rhs(&self) -> Option<Symbol> {
        self.rhs.last().copied()
    }
}
