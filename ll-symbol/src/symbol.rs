use core::num::NonZeroU32;

/// The numeric representation of a symbol ID.
pub type SymbolRepr = u32;

/// A common grammar symbol type.
///
/// Stores the symbol ID plus one, so that `Option<Symbol>` is no larger
/// than `Symbol` itself.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(NonZeroU32);

impl From<SymbolRepr> for Symbol {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        debug_assert_ne!(id, SymbolRepr::MAX, "ran out of Symbol space?");
        Symbol(NonZeroU32::new(id.wrapping_add(1)).expect("symbol ID overflow"))
    }
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.0.get() - 1
    }
}

impl Symbol {
    /// Returns the symbol ID as an array index.
    #[inline]
    pub fn usize(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}
