mod support;

use ll_grammar::{Convention, Grammar, GrammarError};
use ll_predict_sets::{GrammarSetsExt, PredictSets};

#[test]
fn test_arith_follow_sets() {
    let grammar = support::arith_grammar();
    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let follow_sets = grammar.follow_sets(&classes);

    support::assert_set(&grammar, &follow_sets, "E", &["$", ")"]);
    support::assert_set(&grammar, &follow_sets, "E'", &["$", ")"]);
    support::assert_set(&grammar, &follow_sets, "T", &["$", ")", "+"]);
    support::assert_set(&grammar, &follow_sets, "T'", &["$", ")", "+"]);
    support::assert_set(&grammar, &follow_sets, "F", &["$", ")", "*", "+"]);
}

#[test]
fn test_follow_agrees_with_precomputed_first() {
    let grammar = support::arith_grammar();
    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let first_sets = grammar.first_sets(&classes);
    let follow_sets = grammar.follow_sets_with_first(&classes, &first_sets);
    let recomputed = grammar.follow_sets(&classes);

    assert_eq!(follow_sets.predict_sets(), recomputed.predict_sets());
}

#[test]
fn test_start_symbol_seed() {
    let mut grammar = Grammar::new();
    let [s] = grammar.sym(["S"]);
    let eps = grammar.epsilon();
    grammar.rule(s).rhs([eps]);
    grammar.set_start(s);

    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let follow_sets = grammar.follow_sets(&classes);

    support::assert_set(&grammar, &follow_sets, "S", &["$"]);
}

#[test]
fn test_unreachable_nonterminal() {
    let mut grammar = Grammar::new();
    let [s, u, a, b] = grammar.sym(["S", "U", "a", "b"]);
    grammar.rule(s).rhs([a]);
    grammar.rule(u).rhs([b]);
    grammar.set_start(s);

    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let first_sets = grammar.first_sets(&classes);
    let follow_sets = grammar.follow_sets_with_first(&classes, &first_sets);

    // FIRST is structural: U gets a set from its own rule even though
    // nothing derives U from the start symbol.
    support::assert_set(&grammar, &first_sets, "U", &["b"]);
    assert!(follow_sets.follow_of(u).unwrap().is_empty());
}

#[test]
fn test_follow_never_contains_epsilon() {
    let grammar = support::arith_grammar();
    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let follow_sets = grammar.follow_sets(&classes);

    let epsilon = grammar.epsilon();
    for (_, set) in follow_sets.predict_sets() {
        assert!(!set.contains(&epsilon));
        for &member in set {
            assert!(classes.is_terminal(member));
        }
    }
}

#[test]
fn test_nullable_trailer_propagation() {
    // In S ::= a A B, both A and B are nullable, so FOLLOW(A) sees both
    // FIRST(B) and FOLLOW(S).
    let mut grammar = Grammar::new();
    let [s, a_nt, b_nt, a, b, c] = grammar.sym(["S", "A", "B", "a", "b", "c"]);
    let eps = grammar.epsilon();
    grammar.rule(s).rhs([a, a_nt, b_nt]).rhs([c, s]);
    grammar.rule(a_nt).rhs([b]).rhs([eps]);
    grammar.rule(b_nt).rhs([c]).rhs([eps]);
    grammar.set_start(s);

    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let follow_sets = grammar.follow_sets(&classes);

    support::assert_set(&grammar, &follow_sets, "A", &["$", "c"]);
    support::assert_set(&grammar, &follow_sets, "B", &["$"]);
    support::assert_set(&grammar, &follow_sets, "S", &["$"]);
}

#[test]
fn test_terminal_has_no_follow_entry() {
    let grammar = support::arith_grammar();
    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let follow_sets = grammar.follow_sets(&classes);

    let id = grammar.symbol("id").unwrap();
    assert_eq!(
        follow_sets.follow_of(id).unwrap_err(),
        GrammarError::UnknownSymbol { symbol: id }
    );
}
