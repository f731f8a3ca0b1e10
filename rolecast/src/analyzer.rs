#![deny(warnings)]

use crate::english::{english_grammar, english_lexicon, verb_lemmas};
use crate::extract::RoleExtractor;
use crate::roles::RoleRecord;
use arbor::{BacktrackParser, Grammar, Lexicon, ParseError, ParseTree, ParserConfig, Token};
use taggers::{HeuristicLemmatizer, HeuristicTagger, Lemmatize, PosTagger};

/// Recoverable end-to-end outcomes; a sentence that can't be analyzed is
/// reported, never dropped or panicked on.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Parsing succeeded but every tree failed role extraction.
    #[error("no roles extracted from any parse tree")]
    MalformedTree,
}

/// Sentence-to-roles pipeline: tag, parse, extract. Holds only immutable
/// configuration, so every analysis is independent of the previous one.
pub struct Analyzer<T: PosTagger, L: Lemmatize> {
    tagger: T,
    parser: BacktrackParser,
    extractor: RoleExtractor<L>,
}

pub type EnglishAnalyzer = Analyzer<HeuristicTagger, HeuristicLemmatizer>;

impl EnglishAnalyzer {
    /// Analyzer over the builtin English lexicon and grammar.
    pub fn english() -> EnglishAnalyzer {
        let lemmatizer = HeuristicLemmatizer::with_known_forms(verb_lemmas().iter().copied());
        Analyzer::new(
            english_grammar(),
            english_lexicon(),
            HeuristicTagger,
            lemmatizer,
        )
    }
}

impl<T: PosTagger, L: Lemmatize> Analyzer<T, L> {
    pub fn new(grammar: Grammar, lexicon: Lexicon, tagger: T, lemmatizer: L) -> Analyzer<T, L> {
        Analyzer::with_config(grammar, lexicon, tagger, lemmatizer, ParserConfig::default())
    }

    pub fn with_config(
        grammar: Grammar,
        lexicon: Lexicon,
        tagger: T,
        lemmatizer: L,
        config: ParserConfig,
    ) -> Analyzer<T, L> {
        Analyzer {
            tagger,
            parser: BacktrackParser::with_config(grammar, lexicon, config),
            extractor: RoleExtractor::new(lemmatizer),
        }
    }

    /// All parse trees of the sentence, ambiguity preserved.
    pub fn parse(&self, sentence: &str) -> Result<Vec<ParseTree>, AnalyzeError> {
        let tokens: Vec<Token> = self
            .tagger
            .tag(sentence)
            .into_iter()
            .map(|(word, tag)| Token::new(word, tag))
            .collect();
        Ok(self.parser.parse(&tokens)?)
    }

    /// Role mapping of the sentence. With several parse trees the richest
    /// mapping wins: most records, then most filled role slots, then the
    /// earliest-discovered tree. Stable across runs; see DESIGN.md.
    pub fn analyze(&self, sentence: &str) -> Result<Vec<RoleRecord>, AnalyzeError> {
        let mut best: Option<Vec<RoleRecord>> = None;
        for mapping in self.analyze_all(sentence)? {
            let better = match &best {
                None => true,
                Some(current) => richness(&mapping) > richness(current),
            };
            if better {
                best = Some(mapping);
            }
        }
        best.ok_or(AnalyzeError::MalformedTree)
    }

    /// One role mapping per parse tree that extracted cleanly; malformed
    /// trees are skipped, they don't fail the analysis.
    pub fn analyze_all(&self, sentence: &str) -> Result<Vec<Vec<RoleRecord>>, AnalyzeError> {
        let trees = self.parse(sentence)?;
        Ok(trees
            .iter()
            .filter_map(|tree| self.extractor.extract(tree).ok())
            .collect())
    }
}

fn richness(records: &[RoleRecord]) -> (usize, usize) {
    let filled = records
        .iter()
        .map(|r| r.agents.len() + r.patients.len() + r.modifiers.len() + r.subclauses.len())
        .sum();
    (records.len(), filled)
}
