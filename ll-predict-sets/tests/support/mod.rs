#![allow(dead_code)]

use std::collections::BTreeSet;

use ll_grammar::{Grammar, Symbol};
use ll_predict_sets::PredictSets;

/// Builds the textbook arithmetic-expression grammar with start symbol `E`.
pub fn arith_grammar() -> Grammar {
    let mut grammar = Grammar::new();
    let [e, e_prime, t, t_prime, f] = grammar.sym(["E", "E'", "T", "T'", "F"]);
    let [plus, star, lparen, rparen, id, num] = grammar.sym(["+", "*", "(", ")", "id", "num"]);
    let eps = grammar.epsilon();

    grammar.rule(e).rhs([t, e_prime]);
    grammar.rule(e_prime).rhs([plus, t, e_prime]).rhs([eps]);
    grammar.rule(t).rhs([f, t_prime]);
    grammar.rule(t_prime).rhs([star, f, t_prime]).rhs([eps]);
    grammar
        .rule(f)
        .rhs([lparen, e, rparen])
        .rhs([id])
        .rhs([num]);
    grammar.set_start(e);

    grammar
}

/// Resolves a set's members to sorted names.
pub fn sorted_names<'a>(grammar: &'a Grammar, set: &BTreeSet<Symbol>) -> Vec<&'a str> {
    let mut names: Vec<&str> = set
        .iter()
        .map(|&sym| grammar.name_of(sym).expect("unnamed symbol in a set"))
        .collect();
    names.sort_unstable();
    names
}

/// Asserts that the computed set for a named symbol has exactly the
/// expected members.
pub fn assert_set(grammar: &Grammar, sets: &dyn PredictSets, name: &str, expected: &[&str]) {
    let sym = grammar
        .symbol(name)
        .unwrap_or_else(|| panic!("symbol {:?} was never interned", name));
    let set = sets
        .predict_sets()
        .get(&sym)
        .unwrap_or_else(|| panic!("no set computed for {:?}", name));
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(
        sorted_names(grammar, set),
        expected,
        "set mismatch for {:?} in grammar:\n{}",
        name,
        grammar.stringify()
    );
}
