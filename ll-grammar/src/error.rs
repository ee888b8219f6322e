//! Errors reported while validating and classifying a grammar.

use std::error::Error;
use std::fmt;

use ll_symbol::{Symbol, SymbolRepr};

/// Represents an error in the structure or use of a grammar.
///
/// Classification errors are fatal: no FIRST or FOLLOW set is computed for
/// a grammar that fails validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// No start symbol was assigned before classification.
    NoStartSymbol,
    /// The start symbol has no defining rule.
    UndeclaredStartSymbol {
        /// Name of the offending start symbol.
        start: String,
    },
    /// A right-hand side mixes ε with other symbols.
    EpsilonNotAlone {
        /// Name of the rule's left-hand side.
        lhs: String,
        /// Zero-based position of the rule in the grammar.
        rule: usize,
    },
    /// One of the reserved markers ε and `$` appears as a left-hand side.
    ReservedSymbolOnLhs {
        /// Name of the reserved symbol.
        name: String,
        /// Zero-based position of the rule in the grammar.
        rule: usize,
    },
    /// A set was queried for a symbol outside its domain.
    UnknownSymbol {
        /// The unrecognized symbol.
        symbol: Symbol,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::NoStartSymbol => {
                write!(f, "no start symbol was assigned to the grammar")
            }
            GrammarError::UndeclaredStartSymbol { start } => {
                write!(f, "start symbol {:?} has no defining rule", start)
            }
            GrammarError::EpsilonNotAlone { lhs, rule } => {
                write!(
                    f,
                    "rule {} for {:?} mixes ε with other right-hand side symbols",
                    rule, lhs
                )
            }
            GrammarError::ReservedSymbolOnLhs { name, rule } => {
                write!(
                    f,
                    "rule {} uses the reserved symbol {:?} as a left-hand side",
                    rule, name
                )
            }
            GrammarError::UnknownSymbol { symbol } => {
                write!(
                    f,
                    "symbol with ID {} is outside the known alphabet",
                    SymbolRepr::from(*symbol)
                )
            }
        }
    }
}

impl Error for GrammarError {}
