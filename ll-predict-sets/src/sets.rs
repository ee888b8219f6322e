//! Shared representation of FIRST and FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use ll_symbol::Symbol;

/// The representation of FIRST and FOLLOW sets.
///
/// Every classified symbol in the map's domain has an entry, possibly
/// empty; a missing entry means the queried symbol is outside the domain.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

/// Common access to a finished set computation.
pub trait PredictSets {
    /// Returns a reference to the computed sets.
    fn predict_sets(&self) -> &PerSymbolSets;
}
