#![deny(warnings)]

use crate::tokenizer::words;

/// External POS-tagging contract: one sentence in, ordered (word, tag)
/// pairs out. Tags are hints for the parser; the lexicon stays
/// authoritative about class membership.
pub trait PosTagger {
    fn tag(&self, sentence: &str) -> Vec<(String, String)>;
}

/// Rule-based tagger usable without an external NLP toolkit. Emits coarse
/// Penn-style tags from closed-class word lists and suffix shape; a word
/// sitting in several closed classes (eg: "that") gets UNK so every lexicon
/// reading stays in play downstream.
#[derive(Default)]
pub struct HeuristicTagger;

const DETERMINERS: &[&str] = &["a", "an", "the", "this", "that"];
const PREPOSITIONS: &[&str] = &["with", "to", "in", "on", "at", "by", "from"];
const PRONOUNS: &[&str] = &["he", "she", "they", "it", "we", "i", "you"];
const CONJUNCTIONS: &[&str] = &["and", "or", "but"];
const REL_PRONOUNS: &[&str] = &["who", "whom", "which", "that"];
const AUXILIARIES: &[&str] = &["is", "was", "are", "were", "will", "can", "may", "must"];

impl HeuristicTagger {
    fn tag_word(word: &str) -> &'static str {
        let lists: [(&[&str], &str); 6] = [
            (DETERMINERS, "DT"),
            (PREPOSITIONS, "IN"),
            (PRONOUNS, "PRP"),
            (CONJUNCTIONS, "CC"),
            (REL_PRONOUNS, "WP"),
            (AUXILIARIES, "MD"),
        ];
        let hits: Vec<&str> = lists
            .iter()
            .filter(|(list, _)| list.contains(&word))
            .map(|(_, tag)| *tag)
            .collect();
        match hits.as_slice() {
            &[only] => only,
            [] => {
                if word.ends_with("ly") {
                    "RB"
                } else if word.ends_with("ing") || word.ends_with("ed") {
                    "VB"
                } else if word.ends_with('s') {
                    // plural noun or 3rd-person verb; leave it open
                    "UNK"
                } else {
                    "NN"
                }
            }
            _ => "UNK",
        }
    }
}

impl PosTagger for HeuristicTagger {
    fn tag(&self, sentence: &str) -> Vec<(String, String)> {
        words(sentence)
            .into_iter()
            .map(|w| {
                let tag = HeuristicTagger::tag_word(&w);
                (w, tag.to_string())
            })
            .collect()
    }
}

///////////////////////////////////////////////////////////////////////////////
