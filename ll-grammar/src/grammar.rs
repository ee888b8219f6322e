//! Definition of the grammar type and its rules.

use std::fmt::Write;
use std::rc::Rc;
use std::slice;

use ll_symbol::{EPSILON_NAME, Symbol, SymbolSource};

use crate::rule_builder::RuleBuilder;

/// A context-free grammar over named symbols.
///
/// Rules are kept in the order they were added. The grammar is read-only
/// once construction finishes; analysis never mutates it.
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    /// The array of rules.
    rules: Vec<Rule>,
    /// The start symbol, if assigned.
    start: Option<Symbol>,
}

/// Standard grammar rule representation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Rc<[Symbol]>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::with_sym_source(SymbolSource::new())
    }
}

impl Grammar {
    /// Creates an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty grammar with the given symbol source.
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        Grammar {
            sym_source,
            rules: vec![],
            start: None,
        }
    }

    /// Interns symbols for the given names.
    pub fn sym<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.sym_source.sym(name))
    }

    /// Interns a single named symbol.
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.sym_source.sym(name)
    }

    /// Looks up an already interned symbol by name.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.sym_source.lookup(name)
    }

    /// The reserved empty-derivation marker ε.
    pub fn epsilon(&self) -> Symbol {
        SymbolSource::epsilon()
    }

    /// The reserved end-of-input marker `$`.
    pub fn end_of_input(&self) -> Symbol {
        SymbolSource::end_of_input()
    }

    /// Starts building a rule with the given LHS.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Appends a rule to the grammar.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the start symbol, if assigned.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Iterates over rules in the order they were added.
    pub fn rules(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns the symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the number of symbols in use, sentinels included.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the name a symbol was interned under.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.sym_source.name(sym)
    }

    /// Writes the grammar out as BNF-like text, one rule per line.
    ///
    /// Used for diagnostics in tests.
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            let lhs = self.name_of(rule.lhs).unwrap_or("?");
            let _ = write!(out, "{} ::=", lhs);
            if rule.rhs.is_empty() {
                let _ = write!(out, " {}", EPSILON_NAME);
            }
            for &sym in &rule.rhs[..] {
                let _ = write!(out, " {}", self.name_of(sym).unwrap_or("?"));
            }
            let _ = writeln!(out, ";");
        }
        out
    }
}
