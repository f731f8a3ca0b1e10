#![deny(warnings)]

use std::fmt;

/// A surface word plus the POS tag an external tagger assigned to it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Token {
    pub word: String,
    pub tag: String,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Token {
        Token { word: word.into(), tag: tag.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}
