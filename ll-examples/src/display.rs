//! Human-readable rendering of computed sets.
//!
//! Enumeration order is a presentation choice made here, not by the
//! solvers: non-terminals sort by name, and so do set members.

use std::fmt::Write;

use ll_grammar::{Grammar, SymbolClassification};
use ll_predict_sets::{FirstSets, FollowSets, PredictSets};

/// Renders one map as `LABEL(name) = { member, ... }` lines, one per
/// non-terminal with a non-empty set, sorted by non-terminal name.
pub fn render_sets(
    grammar: &Grammar,
    classes: &SymbolClassification,
    label: &str,
    sets: &dyn PredictSets,
) -> String {
    let mut rows: Vec<(&str, Vec<&str>)> = sets
        .predict_sets()
        .iter()
        .filter(|&(&sym, set)| classes.is_nonterminal(sym) && !set.is_empty())
        .map(|(&sym, set)| {
            let mut members: Vec<&str> = set
                .iter()
                .map(|&member| grammar.name_of(member).unwrap_or("?"))
                .collect();
            members.sort_unstable();
            (grammar.name_of(sym).unwrap_or("?"), members)
        })
        .collect();
    rows.sort_by_key(|&(name, _)| name);

    let mut out = String::new();
    for (name, members) in rows {
        let _ = writeln!(out, "{}({}) = {{ {} }}", label, name, members.join(", "));
    }
    out
}

/// Renders the full FIRST/FOLLOW report for a grammar.
pub fn render_report(
    grammar: &Grammar,
    classes: &SymbolClassification,
    first_sets: &FirstSets,
    follow_sets: &FollowSets,
) -> String {
    format!(
        "FIRST sets:\n{}\nFOLLOW sets:\n{}",
        render_sets(grammar, classes, "FIRST", first_sets),
        render_sets(grammar, classes, "FOLLOW", follow_sets),
    )
}
