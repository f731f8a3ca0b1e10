#![deny(warnings)]

use crate::grammar::{Grammar, Symbol};
use crate::lexicon::{Lexicon, WordClass};
use crate::token::Token;
use crate::trees::ParseTree;
use std::cell::Cell;
use std::rc::Rc;

/// Expected, recoverable parse outcomes. None of these abort an analysis;
/// callers match on them to report the sentence instead.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ParseError {
    /// A token belongs to no lexicon class, which blocks every derivation.
    #[error("word not in lexicon: '{0}'")]
    UnclassifiedWord(String),
    /// The grammar derives nothing that covers the input exactly.
    #[error("no derivation covers the input")]
    NoParse,
    /// The search was cut off by the configured nesting bound before any
    /// derivation completed.
    #[error("recursion limit of {0} exceeded")]
    RecursionLimit(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct ParserConfig {
    /// Maximum nonterminal nesting depth explored while backtracking.
    /// Bounds conjunction/relative-clause recursion so the search terminates.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig { max_depth: 64 }
    }
}

/// Top-down backtracking parser. Tries every alternative at every choice
/// point and returns all derivations of the start symbol that cover the
/// input exactly, in discovery order. Pure: no state survives a call.
pub struct BacktrackParser {
    grammar: Grammar,
    lexicon: Lexicon,
    config: ParserConfig,
}

impl BacktrackParser {
    pub fn new(grammar: Grammar, lexicon: Lexicon) -> BacktrackParser {
        BacktrackParser::with_config(grammar, lexicon, ParserConfig::default())
    }

    pub fn with_config(
        grammar: Grammar,
        lexicon: Lexicon,
        config: ParserConfig,
    ) -> BacktrackParser {
        BacktrackParser { grammar, lexicon, config }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn parse(&self, tokens: &[Token]) -> Result<Vec<ParseTree>, ParseError> {
        // A word with no class can't be scanned by any terminal; report it
        // up front instead of surfacing as an opaque NoParse.
        if let Some(tok) = tokens
            .iter()
            .find(|t| self.lexicon.classes_of(&t.word).is_empty())
        {
            return Err(ParseError::UnclassifiedWord(tok.word.clone()));
        }

        let truncated = Cell::new(false);
        let trees: Vec<_> = self
            .match_nonterm(&self.grammar.start, tokens, 0, 0, &truncated)
            .into_iter()
            .filter(|(_, end)| *end == tokens.len())
            .map(|(tree, _)| tree)
            .collect();

        if cfg!(feature = "debug") {
            for (idx, tree) in trees.iter().enumerate() {
                eprintln!("=== Derivation {} ===", idx);
                eprintln!("{}", tree.print());
            }
        }

        if trees.is_empty() {
            return if truncated.get() {
                Err(ParseError::RecursionLimit(self.config.max_depth))
            } else {
                Err(ParseError::NoParse)
            };
        }
        for tree in &trees {
            assert!(
                tree.tokens().into_iter().eq(tokens.iter()),
                "BUG: parse tree yield differs from input"
            );
        }
        Ok(trees)
    }

    /// All (tree, end) spans of `head` starting at `pos`. Alternatives are
    /// tried in grammar order so the result order is deterministic.
    fn match_nonterm(
        &self,
        head: &str,
        tokens: &[Token],
        pos: usize,
        depth: usize,
        truncated: &Cell<bool>,
    ) -> Vec<(ParseTree, usize)> {
        if depth > self.config.max_depth {
            truncated.set(true);
            return Vec::new();
        }
        let mut spans = Vec::new();
        for rule in self.grammar.rules_for(head) {
            for (children, end) in self.match_seq(&rule.spec, tokens, pos, depth, truncated) {
                if cfg!(feature = "debug") {
                    eprintln!("match ({} - {}) {}", pos, end, rule);
                }
                spans.push((ParseTree::Node(rule.to_string(), children), end));
            }
        }
        spans
    }

    /// All ways the symbol sequence consumes input from `pos`: each symbol
    /// covers a prefix of what remains, the rest of the sequence continues
    /// on the remainder, with no gap and no leftover inside the span.
    fn match_seq(
        &self,
        spec: &[Rc<Symbol>],
        tokens: &[Token],
        pos: usize,
        depth: usize,
        truncated: &Cell<bool>,
    ) -> Vec<(Vec<ParseTree>, usize)> {
        let Some((first, rest)) = spec.split_first() else {
            return vec![(Vec::new(), pos)];
        };
        let mut spans = Vec::new();
        for (tree, mid) in self.match_symbol(first, tokens, pos, depth, truncated) {
            for (tail, end) in self.match_seq(rest, tokens, mid, depth, truncated) {
                let mut children = Vec::with_capacity(1 + tail.len());
                children.push(tree.clone());
                children.extend(tail);
                spans.push((children, end));
            }
        }
        spans
    }

    fn match_symbol(
        &self,
        symbol: &Symbol,
        tokens: &[Token],
        pos: usize,
        depth: usize,
        truncated: &Cell<bool>,
    ) -> Vec<(ParseTree, usize)> {
        match symbol {
            Symbol::NonTerm(name) => {
                self.match_nonterm(name, tokens, pos, depth + 1, truncated)
            }
            Symbol::Term(class) => match tokens.get(pos) {
                Some(token) if self.leaf_matches(*class, token) => {
                    vec![(ParseTree::Leaf(*class, token.clone()), pos + 1)]
                }
                _ => Vec::new(),
            },
        }
    }

    /// The POS tag narrows which classes are considered; when it agrees with
    /// nothing the lexicon wins and all its classes are tried.
    fn leaf_matches(&self, class: WordClass, token: &Token) -> bool {
        let classes = self.lexicon.classes_of(&token.word);
        let hinted: Vec<WordClass> = classes
            .iter()
            .copied()
            .filter(|c| c.admits_tag(&token.tag))
            .collect();
        let effective = if hinted.is_empty() { classes } else { hinted };
        effective.contains(&class)
    }
}
