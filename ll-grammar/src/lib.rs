//! Context-free grammar representation for predictive parser analysis.
//!
//! A [`Grammar`] is a start symbol plus an ordered list of rules over named
//! symbols. [`Grammar::classify`] partitions the symbol alphabet into
//! terminals and non-terminals under a caller-chosen authoring convention,
//! validating the grammar along the way.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod classify;
pub mod error;
pub mod grammar;
pub mod rule_builder;
pub mod symbol_bit_set;

pub use crate::classify::{Convention, SymbolClassification};
pub use crate::error::GrammarError;
pub use crate::grammar::{Grammar, Rule};
pub use crate::rule_builder::RuleBuilder;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use ll_symbol::{Symbol, SymbolSource};
