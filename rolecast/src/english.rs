#![deny(warnings)]

use arbor::{Grammar, GrammarBuilder, Lexicon, LexiconBuilder, WordClass};

/// Builtin English lexicon. Class membership may overlap ("that" is a
/// determiner and a relative pronoun, "park" a noun and a verb); extension
/// happens here between runs, never during an analysis.
pub fn english_lexicon() -> Lexicon {
    LexiconBuilder::default()
        .class(
            WordClass::Noun,
            &[
                "cat", "dog", "boy", "girl", "ball", "park", "apple", "john", "mary",
                "teacher", "student", "book", "math", "mathematics", "person", "office",
                "table", "house", "car", "computer", "telescope", "bone",
            ],
        )
        .class(
            WordClass::Verb,
            &[
                "chase", "chases", "see", "sees", "like", "likes", "throw", "throws",
                "eat", "eats", "eating", "run", "runs", "running", "walk", "walks",
                "give", "gives", "bite", "bites", "teach", "teaches", "read", "reads",
                "study", "studies", "work", "works", "move", "moves", "park",
            ],
        )
        .class(WordClass::Aux, &["is", "was", "are", "were", "will", "can"])
        .class(
            WordClass::Adjective,
            &["big", "small", "red", "happy", "angry", "old", "beautiful", "careless"],
        )
        .class(WordClass::Adverb, &["quickly", "slowly", "silently", "well"])
        .class(WordClass::Determiner, &["a", "an", "the", "this", "that"])
        .class(WordClass::Preposition, &["with", "to", "in", "on", "at"])
        .class(WordClass::Pronoun, &["he", "she", "they", "it", "we", "i"])
        .class(WordClass::Conjunction, &["and", "or"])
        .class(WordClass::RelPronoun, &["who", "which", "that"])
        .build()
}

/// Base verb forms the analyzer's lemmatizer validates candidates against.
pub(crate) fn verb_lemmas() -> &'static [&'static str] {
    &[
        "be", "bite", "chase", "eat", "give", "like", "move", "park", "read",
        "run", "see", "study", "teach", "throw", "walk", "work",
    ]
}

/// Builtin English grammar. Coordination and postmodifier chains nest to
/// the right so the backtracking parser terminates; the recursion depth
/// bound in `ParserConfig` still caps how deep they go.
pub fn english_grammar() -> Grammar {
    GrammarBuilder::default()
        .nonterm("S")
        .nonterm("Clause")
        .nonterm("NP")
        .nonterm("NPost")
        .nonterm("NCore")
        .nonterm("VP")
        .nonterm("VPost")
        .nonterm("VCore")
        .nonterm("PP")
        .nonterm("RelClause")
        .terminal(WordClass::Noun)
        .terminal(WordClass::Verb)
        .terminal(WordClass::Aux)
        .terminal(WordClass::Adjective)
        .terminal(WordClass::Adverb)
        .terminal(WordClass::Pronoun)
        .terminal(WordClass::Determiner)
        .terminal(WordClass::Preposition)
        .terminal(WordClass::Conjunction)
        .terminal(WordClass::RelPronoun)
        .rule("S", &["Clause"])
        .rule("S", &["Clause", "Conj", "S"])
        .rule("Clause", &["NP", "VP"])
        .rule("NP", &["NPost"])
        .rule("NP", &["NPost", "Conj", "NP"])
        .rule("NPost", &["NCore"])
        .rule("NPost", &["NCore", "PP"])
        .rule("NPost", &["NCore", "RelClause"])
        .rule("NCore", &["Det", "N"])
        .rule("NCore", &["Det", "Adj", "N"])
        .rule("NCore", &["Adj", "N"])
        .rule("NCore", &["N"])
        .rule("NCore", &["Pronoun"])
        .rule("VP", &["VPost"])
        .rule("VP", &["VPost", "Conj", "VP"])
        .rule("VPost", &["VCore"])
        .rule("VPost", &["VCore", "Adv"])
        .rule("VPost", &["Adv", "VCore"])
        .rule("VCore", &["V"])
        .rule("VCore", &["V", "NP"])
        .rule("VCore", &["V", "NP", "PP"])
        .rule("VCore", &["V", "PP"])
        .rule("VCore", &["Aux", "V"])
        .rule("VCore", &["Aux", "V", "NP"])
        .rule("PP", &["P", "NP"])
        .rule("RelClause", &["RelPronoun", "VP"])
        .into_grammar("S")
        .unwrap_or_else(|e| panic!("english grammar BUG: {}", e))
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{english_grammar, english_lexicon};
    use arbor::WordClass;

    #[test]
    fn builtin_grammar_builds() {
        let g = english_grammar();
        assert_eq!(g.start, "S");
        assert!(g.rules_for("VCore").count() >= 6);
    }

    #[test]
    fn lexicon_classes_overlap() {
        let lex = english_lexicon();
        assert_eq!(
            lex.classes_of("that"),
            vec![WordClass::Determiner, WordClass::RelPronoun]
        );
        assert_eq!(lex.classes_of("park"), vec![WordClass::Noun, WordClass::Verb]);
    }
}
