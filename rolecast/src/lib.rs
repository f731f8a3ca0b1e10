#![deny(warnings)]

mod english;
pub use crate::english::{english_grammar, english_lexicon};

mod roles;
pub use crate::roles::{Action, Entity, Modifier, RoleRecord};

mod extract;
pub use crate::extract::{ExtractError, RoleExtractor};

mod analyzer;
pub use crate::analyzer::{AnalyzeError, Analyzer, EnglishAnalyzer};

#[cfg(test)]
mod roles_test;
