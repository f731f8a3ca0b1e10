#![deny(warnings)]

use crate::lexicon::WordClass;
use crate::token::Token;

/// A constituent parse tree. Nodes carry the rule that derived them in
/// "NP -> Det N" form; leaves carry the matched word class and the
/// originating token. The leaf sequence always equals the parsed input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseTree {
    Leaf(WordClass, Token),
    Node(String, Vec<ParseTree>),
}

impl ParseTree {
    /// Nonterminal name for nodes, word-class name for leaves.
    pub fn head(&self) -> &str {
        match self {
            ParseTree::Leaf(class, _) => class.name(),
            ParseTree::Node(rule, _) => rule.split(" ->").next().unwrap_or(rule),
        }
    }

    /// The full "Head -> Sym Sym" rule for nodes.
    pub fn rule(&self) -> Option<&str> {
        match self {
            ParseTree::Node(rule, _) => Some(rule),
            ParseTree::Leaf(..) => None,
        }
    }

    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Node(_, children) => children,
            ParseTree::Leaf(..) => &[],
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseTree::Leaf(_, token) => Some(token),
            ParseTree::Node(..) => None,
        }
    }

    pub fn word_class(&self) -> Option<WordClass> {
        match self {
            ParseTree::Leaf(class, _) => Some(*class),
            ParseTree::Node(..) => None,
        }
    }

    /// Leaf tokens, left to right.
    pub fn tokens(&self) -> Vec<&Token> {
        match self {
            ParseTree::Leaf(_, token) => vec![token],
            ParseTree::Node(_, children) => {
                children.iter().flat_map(|c| c.tokens()).collect()
            }
        }
    }

    /// Surface words of the spanned tokens joined by spaces.
    pub fn phrase(&self) -> String {
        self.tokens()
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn print(&self) -> String {
        let mut out = String::new();
        self.print_helper("", &mut out);
        out
    }

    fn print_helper(&self, indent: &str, out: &mut String) {
        match self {
            ParseTree::Leaf(class, token) => {
                *out += &format!("\u{2500} {}: {}\n", class.name(), token.word);
            }
            ParseTree::Node(_, children) => {
                *out += &format!("\u{252c} {}\n", self.head());
                if let Some((last, rest)) = children.split_last() {
                    for mid in rest {
                        *out += &format!("{}\u{251c}", indent);
                        mid.print_helper(&format!("{}\u{2502}", indent), out);
                    }
                    *out += &format!("{}\u{2570}", indent);
                    last.print_helper(&format!("{} ", indent), out);
                }
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParseTree, Token, WordClass};

    fn leaf(class: WordClass, word: &str) -> ParseTree {
        ParseTree::Leaf(class, Token::new(word, "UNK"))
    }

    fn sample() -> ParseTree {
        ParseTree::Node(
            "NP -> Det N".to_string(),
            vec![leaf(WordClass::Determiner, "the"), leaf(WordClass::Noun, "dog")],
        )
    }

    #[test]
    fn heads_and_rules() {
        let tree = sample();
        assert_eq!(tree.head(), "NP");
        assert_eq!(tree.rule(), Some("NP -> Det N"));
        assert_eq!(tree.children()[1].head(), "N");
        assert_eq!(tree.children()[1].rule(), None);
    }

    #[test]
    fn tokens_left_to_right() {
        let tree = sample();
        let words: Vec<_> = tree.tokens().iter().map(|t| t.word.clone()).collect();
        assert_eq!(words, ["the", "dog"]);
        assert_eq!(tree.phrase(), "the dog");
    }

    #[test]
    fn print_is_nested() {
        let out = sample().print();
        assert!(out.contains("NP"));
        assert!(out.contains("Det: the"));
        assert!(out.contains("N: dog"));
    }
}
