//! Bit-vector / bit-matrix kernel (spec §4.1).
//!
//! A thin domain wrapper over the `bit_matrix`/`bit_vec` crates, the same
//! pair the teacher's `cfg-symbol-bit-matrix` and `cfg-symbol-matrix` crates
//! wrap for their own reachability/derivation matrices.

use bit_matrix::BitMatrix;
use bit_vec::BitVec;
use std::ops::Index;

use crate::symbol::Symbol;

/// A fixed-width bitset over symbol IDs.
#[derive(Clone, Debug, Default)]
pub struct SymbolSet {
    bits: BitVec,
}

impl SymbolSet {
    /// An empty set over `num_syms` symbols.
    pub fn new(num_syms: usize) -> Self {
        SymbolSet {
            bits: BitVec::from_elem(num_syms, false),
        }
    }

    /// `set(v, i)`.
    pub fn set(&mut self, sym: Symbol) {
        self.bits.set(sym.usize(), true);
    }

    /// `test(v, i)`.
    pub fn test(&self, sym: Symbol) -> bool {
        self.bits[sym.usize()]
    }

    /// `union_assign(dst, src)`: `dst ← dst ∪ src`.
    pub fn union_assign(&mut self, other: &SymbolSet) {
        self.bits.or(&other.bits);
    }

    /// Iterates over the symbols present in this set.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, present)| present.then(|| Symbol::from(i)))
    }
}

/// An N×N bit matrix over symbol IDs, supporting Warshall-style transitive
/// closure (spec §4.1). Closure never shrinks the matrix: bits set before
/// the call remain set.
#[derive(Clone, Debug)]
pub struct SymbolMatrix {
    matrix: BitMatrix,
    num_syms: usize,
}

impl SymbolMatrix {
    /// An all-zero `num_syms` × `num_syms` matrix.
    pub fn new(num_syms: usize) -> Self {
        SymbolMatrix {
            matrix: BitMatrix::new(num_syms, num_syms),
            num_syms,
        }
    }

    /// Sets bit `(row, col)`.
    pub fn set(&mut self, row: Symbol, col: Symbol, value: bool) {
        self.matrix.set(row.usize(), col.usize(), value);
    }

    /// Sets the diagonal, `M[s][s] = true` for every symbol.
    pub fn set_reflexive(&mut self) {
        self.matrix.reflexive_closure();
    }

    /// Computes the transitive closure in place: `M[i][j]` becomes true iff
    /// `j` is reachable from `i` in one or more steps through already-set
    /// bits. Cubic (Warshall) over machine words.
    pub fn transitive_closure(&mut self) {
        self.matrix.transitive_closure();
    }

    /// Iterates over the symbols `s` for which `M[row][s]` is set.
    pub fn iter_row(&self, row: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        self.matrix
            .iter_row(row.usize())
            .enumerate()
            .filter_map(|(i, present)| present.then(|| Symbol::from(i)))
    }

    /// Iterates over the symbols `s` for which `M[s][col]` is set. Used to
    /// walk a matrix "backwards" (e.g. `predictions_for_symbols` needs the
    /// set of symbols that transitively feed into a given one, which is a
    /// column read of `sympred`, not a row read).
    pub fn iter_col(&self, col: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.num_syms).filter_map(move |i| self.matrix[(i, col.usize())].then(|| Symbol::from(i)))
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl Index<(Symbol, Symbol)> for SymbolMatrix {
    type Output = bool;

    fn index(&self, (row, col): (Symbol, Symbol)) -> &bool {
        if self.matrix[(row.usize(), col.usize())] {
            &TRUE
        } else {
            &FALSE
        }
    }
}
