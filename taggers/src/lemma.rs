#![deny(warnings)]

use std::collections::{HashMap, HashSet};

/// External lemmatizer contract: canonical base form of an inflected word.
pub trait Lemmatize {
    fn lemma(&self, word: &str, tag: &str) -> String;
}

/// Suffix-stripping lemmatizer with an irregular-form table. Candidate
/// stems (drop 's'/'es'/'ies'/'ed'/'ing', restore a silent 'e' or a doubled
/// final consonant) are validated against a known-base-form set when one is
/// supplied; without one the first candidate is a best-effort guess.
pub struct HeuristicLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    known: HashSet<String>,
}

const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("ate", "eat"),
    ("bit", "bite"),
    ("gave", "give"),
    ("ran", "run"),
    ("saw", "see"),
    ("struck", "strike"),
    ("taught", "teach"),
    ("threw", "throw"),
    ("went", "go"),
];

impl HeuristicLemmatizer {
    pub fn new() -> HeuristicLemmatizer {
        HeuristicLemmatizer::with_known_forms(std::iter::empty::<&str>())
    }

    /// Validate candidate stems against `forms` (base verb forms).
    pub fn with_known_forms<I, S>(forms: I) -> HeuristicLemmatizer
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        HeuristicLemmatizer {
            irregular: IRREGULAR.iter().copied().collect(),
            known: forms.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }

    fn candidates(word: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(stem) = word.strip_suffix("ies") {
            out.push(format!("{}y", stem));
        }
        if let Some(stem) = word.strip_suffix('s') {
            out.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix("es") {
            out.push(stem.to_string());
        }
        for suffix in ["ed", "ing"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                out.push(stem.to_string());
                out.push(format!("{}e", stem));
                let chars: Vec<char> = stem.chars().collect();
                if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
                    out.push(chars[..chars.len() - 1].iter().collect());
                }
            }
        }
        out
    }
}

impl Default for HeuristicLemmatizer {
    fn default() -> HeuristicLemmatizer {
        HeuristicLemmatizer::new()
    }
}

impl Lemmatize for HeuristicLemmatizer {
    fn lemma(&self, word: &str, _tag: &str) -> String {
        let word = word.to_lowercase();
        if let Some(base) = self.irregular.get(word.as_str()) {
            return base.to_string();
        }
        let candidates = HeuristicLemmatizer::candidates(&word);
        if self.known.is_empty() {
            return candidates.into_iter().next().unwrap_or(word);
        }
        for candidate in &candidates {
            if self.known.contains(candidate) {
                return candidate.clone();
            }
        }
        word
    }
}

///////////////////////////////////////////////////////////////////////////////
