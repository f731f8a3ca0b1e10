#![deny(warnings)]

use crate::lexicon::WordClass;
use std::collections::HashMap;
use std::rc::Rc;
use std::{fmt, hash};

#[derive(Clone, Debug)]
pub enum Symbol {
    NonTerm(String),
    // A terminal names a word class; the parser checks membership in the Lexicon
    Term(WordClass),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::NonTerm(name) => name,
            Symbol::Term(class) => class.name(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Term(_))
    }

    pub fn word_class(&self) -> Option<WordClass> {
        match self {
            Symbol::Term(class) => Some(*class),
            Symbol::NonTerm(_) => None,
        }
    }
}

// Symbols are deduped by name so a class and a nonterminal can't collide
impl hash::Hash for Symbol {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.is_terminal().hash(state);
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Symbol) -> bool {
        match (self, other) {
            (Symbol::Term(s), Symbol::Term(o)) => s == o,
            (Symbol::NonTerm(s), Symbol::NonTerm(o)) => s == o,
            _ => false,
        }
    }
}

impl Eq for Symbol {}

#[derive(PartialEq, Eq, Hash)]
pub struct Rule {
    pub head: String,
    pub spec: Vec<Rc<Symbol>>,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.head,
            self.spec.iter().map(|s| s.name()).collect::<Vec<_>>().join(" ")
        )
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone)]
pub struct Grammar {
    pub start: String,
    pub rules: Vec<Rc<Rule>>,
}

impl Grammar {
    /// Alternatives for a nonterminal, in the order they were added.
    pub fn rules_for<'a>(&'a self, head: &'a str) -> impl Iterator<Item = &'a Rc<Rule>> {
        self.rules.iter().filter(move |rule| rule.head == head)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use std::collections::hash_map::Entry;
        let mut group_order = Vec::new();
        let mut rule_groups = HashMap::new();
        for r in &self.rules {
            match rule_groups.entry(&r.head) {
                Entry::Vacant(e) => {
                    group_order.push(&r.head);
                    e.insert(Vec::new()).push(r);
                }
                Entry::Occupied(mut e) => e.get_mut().push(r),
            }
        }
        writeln!(f, "Start: {}", self.start)?;
        for head in group_order {
            writeln!(f)?;
            for rule in rule_groups.get(head).unwrap() {
                writeln!(f, "{}", rule)?;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct GrammarBuilder {
    symbols: HashMap<String, Rc<Symbol>>,
    rules: Vec<Rc<Rule>>,
    error: Option<String>,
}

/// Builds a Grammar while validating existence of Symbols and checking rules.
impl GrammarBuilder {
    fn add_symbol(&mut self, symbol: Symbol) {
        // Check for duplicate symbols to avoid overwriting by mistake
        if !self.symbols.contains_key(symbol.name()) {
            self.symbols.insert(symbol.name().to_string(), Rc::new(symbol));
        } else {
            self.error = Some(format!("Duplicate Symbol: {}", symbol.name()));
        }
    }

    pub fn nonterm(mut self, name: &str) -> Self {
        self.add_symbol(Symbol::NonTerm(name.into()));
        self
    }

    pub fn terminal(mut self, class: WordClass) -> Self {
        self.add_symbol(Symbol::Term(class));
        self
    }

    pub fn rule(mut self, head: &str, spec: &[&str]) -> Self {
        // First check that all symbols have been registered (need references)
        if let Some(s) = spec.iter().find(|&n| !self.symbols.contains_key(*n)) {
            self.error = Some(format!("Missing Symbol: {}", s));
            return self;
        }
        // Check the head
        match self.symbols.get(head) {
            Some(s) if s.is_terminal() => {
                self.error = Some(format!("Rule head must be NonTerm: {}", head));
                return self;
            }
            None => {
                self.error = Some(format!("Missing Symbol: {}", head));
                return self;
            }
            _ => (),
        }
        // Build the rule
        let rule = Rc::new(Rule {
            head: head.to_string(),
            spec: spec.iter().map(|&s| self.symbols[s].clone()).collect(),
        });
        // Check this rule is only added once. NOTE: `Rc`s equal on inner value
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        } else {
            self.error = Some(format!("Duplicate Rule: {}", rule));
        }
        self
    }

    pub fn into_grammar(mut self, start: &str) -> Result<Grammar, String> {
        let start = start.to_string();
        if let Some(s) = self.symbols.get(&start) {
            if s.is_terminal() {
                self.error = Some(format!("Grammar start must be NonTerm: {}", start));
            }
        } else {
            self.error = Some(format!("Missing start Symbol: {}", start));
        }
        self.error.map_or(Ok(Grammar { start, rules: self.rules }), Err)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{GrammarBuilder, Symbol, WordClass};
    use std::collections::HashSet;

    #[test]
    fn symbol_check_eq_hash() {
        assert_ne!(
            Symbol::NonTerm("N".to_string()),
            Symbol::Term(WordClass::Noun)
        );
        // Check that term and non-term of equal name are not the same
        let mut m = HashSet::new();
        m.insert(Symbol::NonTerm("N".to_string()));
        m.insert(Symbol::Term(WordClass::Noun));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn build_grammar() {
        let g = GrammarBuilder::default()
            .nonterm("S")
            .nonterm("NP")
            .terminal(WordClass::Noun)
            .terminal(WordClass::Verb)
            .rule("S", &["NP", "V"])
            .rule("NP", &["N"])
            .into_grammar("S");
        assert!(g.is_ok());
    }

    #[test]
    fn rule_display() {
        let g = GrammarBuilder::default()
            .nonterm("NP")
            .terminal(WordClass::Determiner)
            .terminal(WordClass::Noun)
            .rule("NP", &["Det", "N"])
            .into_grammar("NP")
            .unwrap();
        assert_eq!(g.rules[0].to_string(), "NP -> Det N");
    }

    #[test]
    fn grammar_has_dup_symbol() {
        let g = GrammarBuilder::default()
            .nonterm("S")
            .nonterm("S")
            .into_grammar("S");
        assert_eq!(g.unwrap_err(), "Duplicate Symbol: S");

        let g = GrammarBuilder::default()
            .terminal(WordClass::Noun)
            .terminal(WordClass::Noun)
            .nonterm("S")
            .rule("S", &["N"])
            .into_grammar("S");
        assert_eq!(g.unwrap_err(), "Duplicate Symbol: N");
    }

    #[test]
    fn grammar_has_dup_rule() {
        let g = GrammarBuilder::default()
            .nonterm("S")
            .terminal(WordClass::Noun)
            .rule("S", &["N"])
            .rule("S", &["N"])
            .into_grammar("S");
        assert_eq!(g.unwrap_err(), "Duplicate Rule: S -> N");
    }

    #[test]
    fn grammar_start_must_be_nonterm() {
        let g = GrammarBuilder::default()
            .nonterm("S")
            .terminal(WordClass::Noun)
            .rule("S", &["N"])
            .into_grammar("N");
        assert_eq!(g.unwrap_err(), "Grammar start must be NonTerm: N");
    }

    #[test]
    fn grammar_missing_symbol() {
        let g = GrammarBuilder::default()
            .nonterm("S")
            .terminal(WordClass::Noun)
            .rule("S", &["N"])
            .into_grammar("X");
        assert_eq!(g.unwrap_err(), "Missing start Symbol: X");

        // Check missing symbol in rule body
        let g = GrammarBuilder::default()
            .nonterm("S")
            .terminal(WordClass::Noun)
            .rule("S", &["N", "V"])
            .into_grammar("S");
        assert_eq!(g.unwrap_err(), "Missing Symbol: V");

        // Check missing rule head symbol
        let g = GrammarBuilder::default()
            .nonterm("S")
            .terminal(WordClass::Noun)
            .rule("X", &["N"])
            .into_grammar("S");
        assert_eq!(g.unwrap_err(), "Missing Symbol: X");
    }
}
