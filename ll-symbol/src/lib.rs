//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by
//! their IDs, and carry interned names for diagnostics and display.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod intern;
mod source;
mod symbol;

pub use self::source::{END_OF_INPUT_NAME, EPSILON_NAME, SymbolSource};
pub use self::symbol::{Symbol, SymbolRepr};
