#![deny(warnings)]

mod tokenizer;
pub use crate::tokenizer::words;

mod tagger;
pub use crate::tagger::{HeuristicTagger, PosTagger};

mod lemma;
pub use crate::lemma::{HeuristicLemmatizer, Lemmatize};
