#![deny(warnings)]

use crate::roles::{Action, Entity, Modifier, RoleRecord};
use arbor::ParseTree;
use taggers::Lemmatize;

/// Per-tree recoverable extraction failure; when the parser returned
/// several trees the others may still yield roles.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ExtractError {
    /// The tree lacks the clause/verb structure role extraction expects.
    #[error("parse tree has no extractable clause structure")]
    MalformedTree,
}

/// What one verb phrase contributes before the Cartesian fan-out.
#[derive(Default)]
struct VpParts {
    actions: Vec<Action>,
    patients: Vec<Entity>,
    modifiers: Vec<Modifier>,
}

/// Walks one parse tree into role records. Semantics are keyed on the rule
/// names the parser stamped on each node; coordination is flattened by the
/// same recursive helpers at NP, VP and PP positions.
pub struct RoleExtractor<L: Lemmatize> {
    lemmatizer: L,
}

impl<L: Lemmatize> RoleExtractor<L> {
    pub fn new(lemmatizer: L) -> RoleExtractor<L> {
        RoleExtractor { lemmatizer }
    }

    pub fn extract(&self, tree: &ParseTree) -> Result<Vec<RoleRecord>, ExtractError> {
        let mut records = Vec::new();
        for clause in clauses(tree)? {
            records.extend(self.clause_records(clause)?);
        }
        Ok(records)
    }

    fn clause_records(&self, clause: &ParseTree) -> Result<Vec<RoleRecord>, ExtractError> {
        if clause.rule() != Some("Clause -> NP VP") {
            return Err(ExtractError::MalformedTree);
        }
        let mut subclauses = Vec::new();
        let agents = self.noun_phrase(&clause.children()[0], &mut subclauses)?;
        let mut parts = VpParts::default();
        self.verb_phrase(&clause.children()[1], &mut parts, &mut subclauses)?;
        if parts.actions.is_empty() {
            return Err(ExtractError::MalformedTree);
        }
        Ok(combine(&agents, &parts, &subclauses))
    }

    /// Flatten a (possibly coordinated) NP into its conjunct entities.
    fn noun_phrase(
        &self,
        np: &ParseTree,
        subclauses: &mut Vec<RoleRecord>,
    ) -> Result<Vec<Entity>, ExtractError> {
        match np.rule() {
            Some("NP -> NPost") => {
                Ok(vec![self.post_nominal(&np.children()[0], subclauses)?])
            }
            Some("NP -> NPost Conj NP") => {
                let mut out = vec![self.post_nominal(&np.children()[0], subclauses)?];
                out.extend(self.noun_phrase(&np.children()[2], subclauses)?);
                Ok(out)
            }
            _ => Err(ExtractError::MalformedTree),
        }
    }

    fn post_nominal(
        &self,
        npost: &ParseTree,
        subclauses: &mut Vec<RoleRecord>,
    ) -> Result<Entity, ExtractError> {
        match npost.rule() {
            Some("NPost -> NCore") => core_entity(&npost.children()[0]),
            Some("NPost -> NCore PP") => {
                // NP-internal PP is an attribute of the entity, not a Modifier
                let mut entity = core_entity(&npost.children()[0])?;
                entity.attributes.push(npost.children()[1].phrase());
                Ok(entity)
            }
            Some("NPost -> NCore RelClause") => {
                let entity = core_entity(&npost.children()[0])?;
                self.relative_clause(&npost.children()[1], &entity, subclauses)?;
                Ok(entity)
            }
            _ => Err(ExtractError::MalformedTree),
        }
    }

    /// A relative clause is a nested extraction of its VP with the host
    /// entity standing in as the agent.
    fn relative_clause(
        &self,
        rel: &ParseTree,
        host: &Entity,
        subclauses: &mut Vec<RoleRecord>,
    ) -> Result<(), ExtractError> {
        if rel.rule() != Some("RelClause -> RelPronoun VP") {
            return Err(ExtractError::MalformedTree);
        }
        let mut parts = VpParts::default();
        let mut nested = Vec::new();
        self.verb_phrase(&rel.children()[1], &mut parts, &mut nested)?;
        if parts.actions.is_empty() {
            return Err(ExtractError::MalformedTree);
        }
        subclauses.extend(combine(std::slice::from_ref(host), &parts, &nested));
        Ok(())
    }

    /// Flatten a (possibly coordinated) VP, collecting every action,
    /// direct-object entity and attached modifier it governs.
    fn verb_phrase(
        &self,
        vp: &ParseTree,
        parts: &mut VpParts,
        subclauses: &mut Vec<RoleRecord>,
    ) -> Result<(), ExtractError> {
        match vp.rule() {
            Some("VP -> VPost") => self.post_verbal(&vp.children()[0], parts, subclauses),
            Some("VP -> VPost Conj VP") => {
                self.post_verbal(&vp.children()[0], parts, subclauses)?;
                self.verb_phrase(&vp.children()[2], parts, subclauses)
            }
            _ => Err(ExtractError::MalformedTree),
        }
    }

    fn post_verbal(
        &self,
        vpost: &ParseTree,
        parts: &mut VpParts,
        subclauses: &mut Vec<RoleRecord>,
    ) -> Result<(), ExtractError> {
        match vpost.rule() {
            Some("VPost -> VCore") => self.core_verbal(&vpost.children()[0], parts, subclauses),
            Some("VPost -> VCore Adv") => {
                self.core_verbal(&vpost.children()[0], parts, subclauses)?;
                parts.modifiers.push(Modifier::Adverb {
                    word: leaf_word(&vpost.children()[1])?,
                });
                Ok(())
            }
            Some("VPost -> Adv VCore") => {
                parts.modifiers.push(Modifier::Adverb {
                    word: leaf_word(&vpost.children()[0])?,
                });
                self.core_verbal(&vpost.children()[1], parts, subclauses)
            }
            _ => Err(ExtractError::MalformedTree),
        }
    }

    fn core_verbal(
        &self,
        vcore: &ParseTree,
        parts: &mut VpParts,
        subclauses: &mut Vec<RoleRecord>,
    ) -> Result<(), ExtractError> {
        let children = vcore.children();
        match vcore.rule() {
            Some("VCore -> V") => {
                parts.actions.push(self.action(None, &children[0])?);
                Ok(())
            }
            Some("VCore -> V NP") => {
                parts.actions.push(self.action(None, &children[0])?);
                parts.patients.extend(self.noun_phrase(&children[1], subclauses)?);
                Ok(())
            }
            Some("VCore -> V NP PP") => {
                parts.actions.push(self.action(None, &children[0])?);
                parts.patients.extend(self.noun_phrase(&children[1], subclauses)?);
                parts.modifiers.push(self.prep_modifier(&children[2], subclauses)?);
                Ok(())
            }
            Some("VCore -> V PP") => {
                parts.actions.push(self.action(None, &children[0])?);
                parts.modifiers.push(self.prep_modifier(&children[1], subclauses)?);
                Ok(())
            }
            Some("VCore -> Aux V") => {
                parts.actions.push(self.action(Some(&children[0]), &children[1])?);
                Ok(())
            }
            Some("VCore -> Aux V NP") => {
                parts.actions.push(self.action(Some(&children[0]), &children[1])?);
                parts.patients.extend(self.noun_phrase(&children[2], subclauses)?);
                Ok(())
            }
            _ => Err(ExtractError::MalformedTree),
        }
    }

    fn action(
        &self,
        aux: Option<&ParseTree>,
        verb: &ParseTree,
    ) -> Result<Action, ExtractError> {
        let vt = verb.token().ok_or(ExtractError::MalformedTree)?;
        let lemma = self.lemmatizer.lemma(&vt.word, &vt.tag);
        let surface = match aux {
            Some(a) => format!("{} {}", leaf_word(a)?, vt.word),
            None => vt.word.clone(),
        };
        Ok(Action { lemma, surface })
    }

    fn prep_modifier(
        &self,
        pp: &ParseTree,
        subclauses: &mut Vec<RoleRecord>,
    ) -> Result<Modifier, ExtractError> {
        if pp.rule() != Some("PP -> P NP") {
            return Err(ExtractError::MalformedTree);
        }
        Ok(Modifier::Prepositional {
            prep: leaf_word(&pp.children()[0])?,
            objects: self.noun_phrase(&pp.children()[1], subclauses)?,
        })
    }
}

/// Top-level clauses of the sentence, sentence coordination unrolled.
fn clauses(root: &ParseTree) -> Result<Vec<&ParseTree>, ExtractError> {
    match root.rule() {
        Some("S -> Clause") => Ok(vec![&root.children()[0]]),
        Some("S -> Clause Conj S") => {
            let mut out = vec![&root.children()[0]];
            out.extend(clauses(&root.children()[2])?);
            Ok(out)
        }
        _ => Err(ExtractError::MalformedTree),
    }
}

/// Head noun or pronoun plus determiner/adjective attributes.
fn core_entity(ncore: &ParseTree) -> Result<Entity, ExtractError> {
    use arbor::WordClass;
    let mut attributes = Vec::new();
    let mut head = None;
    for leaf in ncore.children() {
        let word = leaf_word(leaf)?;
        match leaf.word_class() {
            Some(WordClass::Noun) | Some(WordClass::Pronoun) => head = Some(word),
            _ => attributes.push(word),
        }
    }
    let head = head.ok_or(ExtractError::MalformedTree)?;
    Ok(Entity { head, attributes })
}

fn leaf_word(leaf: &ParseTree) -> Result<String, ExtractError> {
    leaf.token()
        .map(|t| t.word.clone())
        .ok_or(ExtractError::MalformedTree)
}

/// Cartesian product of agents x actions x patients; every record shares
/// the clause's modifiers and subclauses. An absent dimension is skipped
/// rather than suppressing the product (intransitives keep their records).
fn combine(agents: &[Entity], parts: &VpParts, subclauses: &[RoleRecord]) -> Vec<RoleRecord> {
    let agent_slots: Vec<Vec<Entity>> = if agents.is_empty() {
        vec![Vec::new()]
    } else {
        agents.iter().map(|a| vec![a.clone()]).collect()
    };
    let patient_slots: Vec<Vec<Entity>> = if parts.patients.is_empty() {
        vec![Vec::new()]
    } else {
        parts.patients.iter().map(|p| vec![p.clone()]).collect()
    };
    let mut records = Vec::new();
    for agent in &agent_slots {
        for action in &parts.actions {
            for patient in &patient_slots {
                records.push(RoleRecord {
                    agents: agent.clone(),
                    action: action.clone(),
                    patients: patient.clone(),
                    modifiers: parts.modifiers.clone(),
                    subclauses: subclauses.to_vec(),
                });
            }
        }
    }
    records
}
