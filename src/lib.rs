//! An Earley recognizer with Joop Leo's right-recursion optimization and
//! Aycock–Horspool-style precomputation of prediction closures over bit
//! matrices.
//!
//! Given a grammar expressed as a list of production rules and a sequence
//! of input tokens, [`Parser`] decides whether the sequence is in the
//! language of the grammar. The crate is split into the three
//! tightly-coupled subsystems that make up the hot path:
//!
//! - [`grammar`] — interns a caller-supplied rule list into numeric form
//!   and precomputes the `sympred`/`right_recursion` closure matrices.
//! - [`chart`] — the per-position Earley sets of dotted-rule items.
//! - [`parser`] — the per-token predict/scan/advance/complete driver,
//!   consulting [`leo`] for right-recursion collapsing.
//!
//! Tokenization, semantic actions, parse-forest construction, and tree
//! reconstruction are out of scope; see the crate's design notes.

#![deny(
    missing_docs,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod bitmatrix;
pub mod chart;
pub mod error;
pub mod grammar;
pub mod leo;
pub mod parser;
pub mod rule;
pub mod symbol;

pub use error::GrammarError;
pub use grammar::Grammar;
pub use parser::{parse, Parser};
pub use rule::{Elem, RuleSpec};
pub use symbol::Symbol;
