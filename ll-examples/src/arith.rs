//! The classic arithmetic-expression grammar.

use ll_grammar::Grammar;

/// Builds the textbook arithmetic-expression grammar:
///
/// ```text
/// E  ::= T E';
/// E' ::= + T E' | ε;
/// T  ::= F T';
/// T' ::= * F T' | ε;
/// F  ::= ( E ) | id | num;
/// ```
///
/// with start symbol `E`.
pub fn grammar() -> Grammar {
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
