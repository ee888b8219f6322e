//! Example grammars and report rendering for FIRST/FOLLOW computation.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod arith;
pub mod display;
