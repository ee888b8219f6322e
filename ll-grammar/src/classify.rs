//! Partitioning of the symbol alphabet into terminals and non-terminals.

use log::warn;

use ll_symbol::{Symbol, SymbolSource};

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::symbol_bit_set::{Iter, SymbolBitSet};

/// The grammar-authoring convention that tells terminals and non-terminals
/// apart when a symbol is not defined by any rule.
///
/// Symbols that appear as a left-hand side are non-terminals under every
/// convention; the convention only decides the remaining right-hand side
/// symbols.
#[derive(Clone, Copy)]
pub enum Convention<'a> {
    /// A symbol is a non-terminal iff it appears as some rule's LHS.
    LhsDefined,
    /// Non-terminals are the members of an explicit list.
    Declared(&'a [Symbol]),
    /// Non-terminals are recognized by a predicate over symbol names,
    /// e.g. "spelled in uppercase".
    Spelling(&'a dyn Fn(&str) -> bool),
}

/// The result of classifying a grammar's symbols.
#[derive(Clone, Debug)]
pub struct SymbolClassification {
    nonterminals: SymbolBitSet,
    terminals: SymbolBitSet,
    start: Symbol,
    ambiguous: Vec<Symbol>,
}

impl SymbolClassification {
    /// Reports whether a symbol is a non-terminal.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminals[sym]
    }

    /// Reports whether a symbol is a terminal. The sentinels ε and `$`
    /// count as terminals.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminals[sym]
    }

    /// Iterates over the non-terminal symbols.
    pub fn nonterminals(&self) -> Iter<'_> {
        self.nonterminals.iter()
    }

    /// Iterates over the terminal symbols, sentinels included.
    pub fn terminals(&self) -> Iter<'_> {
        self.terminals.iter()
    }

    /// Returns the terminal set as a bit set.
    pub fn terminal_set(&self) -> &SymbolBitSet {
        &self.terminals
    }

    /// Returns the validated start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Symbols the convention spelled as terminals but the grammar defines
    /// as non-terminals. Non-terminal classification won for these; the
    /// grammar author should resolve the ambiguity.
    pub fn ambiguous(&self) -> &[Symbol] {
        &self.ambiguous
    }
}

impl Grammar {
    /// Partitions the symbol alphabet into terminals and non-terminals
    /// under the given convention, validating the grammar along the way.
    ///
    /// Fails on a grammar without a defined start symbol, on ε mixed into
    /// a longer right-hand side, and on a sentinel used as an LHS. No
    /// partial result is produced on failure.
    pub fn classify(&self, convention: Convention) -> Result<SymbolClassification, GrammarError> {
        let epsilon = SymbolSource::epsilon();
        let end_of_input = SymbolSource::end_of_input();
        let num_syms = self.num_syms();
        let mut nonterminals = SymbolBitSet::with_capacity(num_syms);
        let mut terminals = SymbolBitSet::with_capacity(num_syms);

        let name_of = |sym: Symbol| self.name_of(sym).unwrap_or("?").to_string();

        for (idx, rule) in self.rules().enumerate() {
            if rule.lhs == epsilon || rule.lhs == end_of_input {
                return Err(GrammarError::ReservedSymbolOnLhs {
                    name: name_of(rule.lhs),
                    rule: idx,
                });
            }
            if rule.rhs.len() > 1 && rule.rhs.contains(&epsilon) {
                return Err(GrammarError::EpsilonNotAlone {
                    lhs: name_of(rule.lhs),
                    rule: idx,
                });
            }
            nonterminals.set(rule.lhs, true);
        }

        let start = self.start().ok_or(GrammarError::NoStartSymbol)?;
        if !nonterminals[start] {
            return Err(GrammarError::UndeclaredStartSymbol {
                start: name_of(start),
            });
        }

        // Symbols the convention declares non-terminal without a defining
        // rule stay in the partition with empty FIRST and FOLLOW sets.
        if let Convention::Declared(declared) = convention {
            for &sym in declared {
                if sym == epsilon || sym == end_of_input {
                    continue;
                }
                if !nonterminals[sym] {
                    warn!(
                        "non-terminal {:?} has no defining rule; \
                         its FIRST and FOLLOW sets will stay empty",
                        name_of(sym)
                    );
                    nonterminals.set(sym, true);
                }
            }
        }

        for rule in self.rules() {
            for &sym in &rule.rhs[..] {
                if sym == epsilon || nonterminals[sym] || terminals[sym] {
                    continue;
                }
                let nonterminal_spelling = match convention {
                    Convention::LhsDefined => false,
                    Convention::Declared(declared) => declared.contains(&sym),
                    Convention::Spelling(pred) => pred(self.name_of(sym).unwrap_or("")),
                };
                if nonterminal_spelling {
                    warn!(
                        "non-terminal {:?} has no defining rule; \
                         its FIRST and FOLLOW sets will stay empty",
                        name_of(sym)
                    );
                    nonterminals.set(sym, true);
                } else {
                    terminals.set(sym, true);
                }
            }
        }

        // A symbol spelled like a terminal but defined by a rule is
        // classified as a non-terminal; report it instead of silently
        // picking a side.
        let mut ambiguous = vec![];
        if let Convention::Spelling(pred) = convention {
            for sym in nonterminals.iter() {
                if !pred(self.name_of(sym).unwrap_or("")) {
                    warn!(
                        "symbol {:?} is spelled like a terminal but defined by a rule; \
                         classifying as a non-terminal",
                        name_of(sym)
                    );
                    ambiguous.push(sym);
                }
            }
        }
        if let Convention::Declared(declared) = convention {
            for sym in nonterminals.iter() {
                if !declared.contains(&sym) {
                    warn!(
                        "symbol {:?} is not in the declared non-terminal list \
                         but is defined by a rule; classifying as a non-terminal",
                        name_of(sym)
                    );
                    ambiguous.push(sym);
                }
            }
        }

        terminals.set(end_of_input, true);
        terminals.set(epsilon, true);

        Ok(SymbolClassification {
            nonterminals,
            terminals,
            start,
            ambiguous,
        })
    }
}
