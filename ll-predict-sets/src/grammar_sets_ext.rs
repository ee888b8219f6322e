//! Convenience access to set computations from a grammar.

use ll_grammar::{Grammar, SymbolClassification};

use crate::{FirstSets, FollowSets};

/// Computes predict sets directly from a classified grammar.
pub trait GrammarSetsExt {
    /// Computes the FIRST sets.
    fn first_sets(&self, classes: &SymbolClassification) -> FirstSets;
    /// Computes the FIRST sets, then the FOLLOW sets from them.
    fn follow_sets(&self, classes: &SymbolClassification) -> FollowSets;
    /// Computes the FOLLOW sets from previously computed FIRST sets.
    fn follow_sets_with_first(
        &self,
        classes: &SymbolClassification,
        first_sets: &FirstSets,
    ) -> FollowSets;
}

impl GrammarSetsExt for Grammar {
    fn first_sets(&self, classes: &SymbolClassification) -> FirstSets {
        FirstSets::new(self, classes)
    }

    fn follow_sets(&self, classes: &SymbolClassification) -> FollowSets {
        FollowSets::new(self, classes, &self.first_sets(classes))
    }

    fn follow_sets_with_first(
        &self,
        classes: &SymbolClassification,
        first_sets: &FirstSets,
    ) -> FollowSets {
        FollowSets::new(self, classes, first_sets)
    }
}
