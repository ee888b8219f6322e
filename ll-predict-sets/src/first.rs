//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use ll_grammar::{Grammar, GrammarError, SymbolBitSet, SymbolClassification};
use ll_symbol::{Symbol, SymbolSource};

use super::{PerSymbolSets, PredictSets};

/// Collector of FIRST sets.
///
/// Entries for every classified symbol are materialized up front: each
/// terminal maps to the singleton of itself and never grows, each
/// non-terminal starts empty and grows monotonically until the iteration
/// reaches its fixed point.
pub struct FirstSets {
    map: PerSymbolSets,
    terminal_set: SymbolBitSet,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// Repeats full passes over the rule list until no set grows.
    /// Termination is guaranteed: sets are bounded by the finite terminal
    /// alphabet plus ε, and passes never remove elements.
    pub fn new(grammar: &Grammar, classes: &SymbolClassification) -> Self {
        let mut this = Self::init(classes);
        this.collect_from(grammar);
        this
    }

    fn init(classes: &SymbolClassification) -> Self {
        let mut this = FirstSets {
            map: BTreeMap::new(),
            terminal_set: classes.terminal_set().clone(),
        };

        for terminal in classes.terminals() {
            this.map.insert(terminal, BTreeSet::from([terminal]));
        }
        for nonterminal in classes.nonterminals() {
            this.map.insert(nonterminal, BTreeSet::new());
        }

        this
    }

    /// Returns the FIRST set of a single symbol, or an error for a symbol
    /// outside the classified alphabet.
    pub fn first_of(&self, sym: Symbol) -> Result<&BTreeSet<Symbol>, GrammarError> {
        self.map
            .get(&sym)
            .ok_or(GrammarError::UnknownSymbol { symbol: sym })
    }

    /// Calculates the FIRST set for a string of symbols.
    ///
    /// Contains ε iff every symbol of the string can derive empty.
    pub fn first_of_string(&self, string: &[Symbol]) -> BTreeSet<Symbol> {
        let mut lookahead = vec![];
        self.first_set_collect(&mut lookahead, string);
        lookahead.into_iter().collect()
    }

    fn collect_from(&mut self, grammar: &Grammar) {
        let mut passes = 0u32;
        while self.pass(grammar) {
            passes += 1;
        }
        trace!("FIRST sets converged after {} passes", passes + 1);
    }

    /// Runs one full pass over all rules. Returns whether any set grew.
    fn pass(&mut self, grammar: &Grammar) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            changed |= self.process_rule(rule.lhs, &rule.rhs[..]);
        }
        changed
    }

    fn process_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) -> bool {
        let mut lookahead = vec![];
        self.first_set_collect(&mut lookahead, rhs);
        let first_set = self
            .map
            .get_mut(&lhs)
            .expect("FIRST entry missing for an LHS symbol");
        let prev_cardinality = first_set.len();
        first_set.extend(lookahead);
        first_set.len() != prev_cardinality
    }

    /// Compute a FIRST set for a symbol string into `vec`.
    fn first_set_collect(&self, vec: &mut Vec<Symbol>, rhs: &[Symbol]) {
        let epsilon = SymbolSource::epsilon();
        for &sym in rhs {
            let mut nullable = false;
            if sym == epsilon {
                // An ε marker contributes nothing and vanishes.
                nullable = true;
            } else if self.terminal_set[sym] {
                vec.push(sym);
            } else {
                match self.map.get(&sym) {
                    None => {
                        // A non-terminal outside the classified alphabet;
                        // it contributes an empty set.
                    }
                    Some(set) => {
                        vec.extend(set.iter().copied().filter(|&s| s != epsilon));
                        nullable = set.contains(&epsilon);
                    }
                }
            }
            if !nullable {
                // Found a FIRST symbol that cannot vanish; symbols further
                // right contribute nothing.
                return;
            }
        }
        vec.push(epsilon);
    }
}

impl PredictSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
