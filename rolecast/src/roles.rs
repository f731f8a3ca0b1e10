#![deny(warnings)]

use std::fmt;

/// A participant in the action: head noun or pronoun plus the determiner,
/// adjective and prepositional attributes attached inside its noun phrase.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entity {
    pub head: String,
    pub attributes: Vec<String>,
}

impl Entity {
    pub fn new(head: impl Into<String>) -> Entity {
        Entity { head: head.into(), attributes: Vec::new() }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.head)?;
        if !self.attributes.is_empty() {
            write!(f, " ({})", self.attributes.join(", "))?;
        }
        Ok(())
    }
}

/// What is done: the verb's lemma plus the surface phrase it came from
/// (auxiliary included, eg: lemma "run" for surface "is running").
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Action {
    pub lemma: String,
    pub surface: String,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.lemma == self.surface {
            write!(f, "{}", self.lemma)
        } else {
            write!(f, "{} [{}]", self.lemma, self.surface)
        }
    }
}

/// Something attached to the verb phrase: a bare adverb or a preposition
/// with its governed entities (several when the inner NP is coordinated).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Modifier {
    Adverb { word: String },
    Prepositional { prep: String, objects: Vec<Entity> },
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Modifier::Adverb { word } => write!(f, "{}", word),
            Modifier::Prepositional { prep, objects } => {
                let objs: Vec<String> = objects.iter().map(|o| o.to_string()).collect();
                write!(f, "{} {}", prep, objs.join(", "))
            }
        }
    }
}

/// One role assignment. Coordination fans a sentence out into several
/// records (every agent performs every action upon every patient), each
/// holding at most one agent/patient after the fan-out; the agent or
/// patient set is empty when the grammar slot was absent. Records are
/// built fresh per analysis and never mutated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RoleRecord {
    pub agents: Vec<Entity>,
    pub action: Action,
    pub patients: Vec<Entity>,
    pub modifiers: Vec<Modifier>,
    /// Nested records from relative clauses, agent = the entity they modify.
    pub subclauses: Vec<RoleRecord>,
}
