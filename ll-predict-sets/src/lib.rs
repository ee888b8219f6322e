//! Predict sets: FIRST and FOLLOW set computation.
//!
//! Both solvers are monotone fixed-point iterations over a classified
//! grammar. FIRST runs first; FOLLOW consumes the converged FIRST map as
//! read-only input. Once a solver returns, its map never changes.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod first;
pub mod follow;
pub mod grammar_sets_ext;
pub mod sets;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::grammar_sets_ext::GrammarSetsExt;
pub use self::sets::{PerSymbolSets, PredictSets};
