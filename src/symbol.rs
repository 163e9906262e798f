//! A type that can represent symbols in a context-free grammar. Symbols are
//! distinguished by their IDs.

use std::collections::HashMap;
use std::fmt;

/// The reserved name of the synthetic accept rule's left-hand side.
pub const ACCEPT_NAME: &str = "_accept";

/// The conventional name of the grammar's start rule.
pub const START_NAME: &str = "start";

type SymbolRepr = u32;

/// A common grammar symbol type: a small, stable integer ID.
///
/// Symbols are deduplicated by name during grammar construction; two
/// `RuleSpec`s that reference the same name end up with the same `Symbol`.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(SymbolRepr);

impl Symbol {
    /// Cast the symbol's ID to `usize`, for bit-vector/bit-matrix indexing.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol(id as SymbolRepr)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interns symbol names to small integer IDs ("census" in the grammar
/// builder's pipeline, spec step 2) and remembers, post-construction, which
/// symbols are terminal.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    names: Vec<String>,
    by_name: HashMap<String, Symbol>,
    terminal: Vec<bool>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Returns the symbol for `name`, assigning a fresh ID if `name` hasn't
    /// been seen before.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.by_name.get(name) {
            return sym;
        }
        let sym = Symbol::from(self.names.len());
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), sym);
        sym
    }

    /// Looks up a symbol by name without interning; used to resolve input
    /// tokens against terminal literals. Unknown literals return `None`,
    /// which the recognizer treats as "matches nothing" (spec §4.2).
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// The name a symbol was interned with.
    pub fn name_of(&self, sym: Symbol) -> &str {
        &self.names[sym.usize()]
    }

    /// The number of distinct symbols interned so far.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Marks symbols as terminal or nonterminal. Called once, after all rules
    /// have been censused: a symbol is terminal iff it never occurs as any
    /// rule's lhs (spec §4.2 edge policy).
    pub fn set_terminal_flags(&mut self, flags: Vec<bool>) {
        debug_assert_eq!(flags.len(), self.names.len());
        self.terminal = flags;
    }

    /// Whether `sym` is terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminal.get(sym.usize()).copied().unwrap_or(false)
    }
}
