//! Source of named symbols.

use crate::intern::StringInterner;
use crate::symbol::Symbol;

/// The canonical spelling of the empty-derivation marker.
pub const EPSILON_NAME: &str = "ε";
/// The canonical spelling of the end-of-input marker.
pub const END_OF_INPUT_NAME: &str = "$";

/// A source of named symbols.
///
/// Symbol IDs are assigned in interning order. The two reserved sentinels
/// ε and `$` are interned on construction and therefore always occupy
/// IDs 0 and 1.
pub struct SymbolSource {
    names: StringInterner,
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource {
    /// Creates a source of named symbols with the two sentinels interned.
    pub fn new() -> Self {
        let names = StringInterner::new();
        names.get_or_intern(EPSILON_NAME);
        names.get_or_intern(END_OF_INPUT_NAME);
        SymbolSource { names }
    }

    /// The reserved empty-derivation marker ε.
    pub fn epsilon() -> Symbol {
        Symbol::from(0u32)
    }

    /// The reserved end-of-input marker `$`.
    pub fn end_of_input() -> Symbol {
        Symbol::from(1u32)
    }

    /// Interns a name, returning the same symbol for the same spelling.
    pub fn sym(&self, name: &str) -> Symbol {
        Symbol::from(self.names.get_or_intern(name))
    }

    /// Looks up the symbol for an already interned name.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.names.get(name).map(Symbol::from)
    }

    /// Returns the name a symbol was interned under.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        self.names.resolve(sym.usize())
    }

    /// Returns the number of symbols in use, sentinels included.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }
}
