use ll_examples::arith;
use ll_examples::display::{render_report, render_sets};
use ll_grammar::Convention;
use ll_predict_sets::GrammarSetsExt;

#[test]
fn test_arith_report() {
    let grammar = arith::grammar();
    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let first_sets = grammar.first_sets(&classes);
    let follow_sets = grammar.follow_sets_with_first(&classes, &first_sets);

    let expected = "\
FIRST sets:
FIRST(E) = { (, id, num }
FIRST(E') = { +, ε }
FIRST(F) = { (, id, num }
FIRST(T) = { (, id, num }
FIRST(T') = { *, ε }

FOLLOW sets:
FOLLOW(E) = { $, ) }
FOLLOW(E') = { $, ) }
FOLLOW(F) = { $, ), *, + }
FOLLOW(T) = { $, ), + }
FOLLOW(T') = { $, ), + }
";
    assert_eq!(render_report(&grammar, &classes, &first_sets, &follow_sets), expected);
}

#[test]
fn test_empty_sets_are_omitted() {
    let mut grammar = ll_grammar::Grammar::new();
    let [s, u, a, b] = grammar.sym(["S", "U", "a", "b"]);
    grammar.rule(s).rhs([a]);
    grammar.rule(u).rhs([b]);
    grammar.set_start(s);

    let classes = grammar.classify(Convention::LhsDefined).unwrap();
    let follow_sets = grammar.follow_sets(&classes);

    // U is unreachable and has an empty FOLLOW set, so it has no row.
    assert_eq!(
        render_sets(&grammar, &classes, "FOLLOW", &follow_sets),
        "FOLLOW(S) = { $ }\n"
    );
}
