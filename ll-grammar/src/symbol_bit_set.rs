//! Sets of symbols in the form of bit vectors.

use std::{iter, ops};

use bit_vec::BitVec;

use ll_symbol::Symbol;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` with room for the given number of symbols,
    /// all absent.
    pub fn with_capacity(num_syms: usize) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, false),
        }
    }

    /// Adds a symbol to the set, or removes it.
    pub fn set(&mut self, index: Symbol, elem: bool) {
        self.bit_vec.set(index.usize(), elem);
    }

    /// Unions another set into this one.
    pub fn union(&mut self, other: &SymbolBitSet) {
        self.bit_vec.or(&other.bit_vec);
    }

    /// Returns the capacity in symbols.
    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    /// Reports whether the capacity is zero.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.is_empty()
    }

    /// Counts the symbols present in the set.
    pub fn count(&self) -> usize {
        self.bit_vec.iter().filter(|&present| present).count()
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.bit_vec.get(index.usize()).unwrap_or(false) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
