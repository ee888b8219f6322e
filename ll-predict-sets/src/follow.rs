//! FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use ll_grammar::{Grammar, GrammarError, SymbolClassification};
use ll_symbol::{Symbol, SymbolSource};

use crate::first::FirstSets;

use super::{PerSymbolSets, PredictSets};

/// FOLLOW sets.
///
/// Requires a converged FIRST computation; the FIRST map is read-only
/// input here. Every non-terminal has an entry, seeded with `$` for the
/// start symbol, and grows monotonically until the fixed point.
pub struct FollowSets {
    /// Mapping from non-terminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    pub fn new(
        grammar: &Grammar,
        classes: &SymbolClassification,
        first_sets: &FirstSets,
    ) -> Self {
        let mut this = FollowSets {
            map: BTreeMap::new(),
        };

        for nonterminal in classes.nonterminals() {
            let follow_set = this.map.entry(nonterminal).or_insert_with(BTreeSet::new);
            if nonterminal == classes.start() {
                follow_set.insert(SymbolSource::end_of_input());
            }
        }

        let mut passes = 0u32;
        while this.pass(grammar, classes, first_sets) {
            passes += 1;
        }
        trace!("FOLLOW sets converged after {} passes", passes + 1);

        this
    }

    /// Returns the FOLLOW set of a non-terminal, or an error for a symbol
    /// outside the non-terminal alphabet.
    pub fn follow_of(&self, sym: Symbol) -> Result<&BTreeSet<Symbol>, GrammarError> {
        self.map
            .get(&sym)
            .ok_or(GrammarError::UnknownSymbol { symbol: sym })
    }

    /// Runs one full pass over all rules. Returns whether any set grew.
    ///
    /// The trailer starts from a snapshot of FOLLOW(lhs) taken at the
    /// start of each rule, so in-pass growth of FOLLOW(lhs) only becomes
    /// visible on the next pass.
    fn pass(
        &mut self,
        grammar: &Grammar,
        classes: &SymbolClassification,
        first_sets: &FirstSets,
    ) -> bool {
        let epsilon = SymbolSource::epsilon();
        let mut changed = false;
        for rule in grammar.rules() {
            let mut trailer = self
                .map
                .get(&rule.lhs)
                .expect("FOLLOW entry missing for an LHS symbol")
                .clone();

            for &sym in rule.rhs.iter().rev() {
                if sym == epsilon {
                    continue;
                }
                if classes.is_terminal(sym) {
                    trailer.clear();
                    trailer.insert(sym);
                } else {
                    let followed = self
                        .map
                        .get_mut(&sym)
                        .expect("FOLLOW entry missing for a non-terminal");
                    let prev_cardinality = followed.len();
                    followed.extend(trailer.iter().copied());
                    changed |= prev_cardinality != followed.len();

                    let first_set = first_sets
                        .first_of(sym)
                        .expect("FIRST set missing for a non-terminal");
                    if !first_set.contains(&epsilon) {
                        trailer.clear();
                    }
                    trailer.extend(first_set.iter().copied().filter(|&s| s != epsilon));
                }
            }
        }
        changed
    }
}

impl PredictSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
