#![deny(warnings)]

use crate::analyzer::{AnalyzeError, Analyzer, EnglishAnalyzer};
use crate::english::{english_grammar, english_lexicon, verb_lemmas};
use crate::roles::Modifier;
use arbor::{ParseError, ParserConfig};
use taggers::{HeuristicLemmatizer, HeuristicTagger};

fn analyzer() -> EnglishAnalyzer {
    Analyzer::english()
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn coordination_fans_out_agents() {
    let recs = analyzer().analyze("the boy and the girl chase the dog").unwrap();
    assert_eq!(recs.len(), 2);
    for rec in &recs {
        assert_eq!(rec.action.lemma, "chase");
        assert_eq!(rec.patients.len(), 1);
        assert_eq!(rec.patients[0].head, "dog");
        assert!(rec.modifiers.is_empty());
        assert!(rec.subclauses.is_empty());
    }
    let agents: Vec<&str> = recs.iter().map(|r| r.agents[0].head.as_str()).collect();
    assert_eq!(agents, ["boy", "girl"]);
}

#[test]
fn coordination_chain_of_three() {
    let recs = analyzer().analyze("the boy and the girl and the dog run").unwrap();
    assert_eq!(recs.len(), 3);
    let agents: Vec<&str> = recs.iter().map(|r| r.agents[0].head.as_str()).collect();
    assert_eq!(agents, ["boy", "girl", "dog"]);
}

#[test]
fn coordinated_verbs_cross_with_patients() {
    let recs = analyzer().analyze("the dog chases and bites the cat").unwrap();
    assert_eq!(recs.len(), 2);
    let lemmas: Vec<&str> = recs.iter().map(|r| r.action.lemma.as_str()).collect();
    assert_eq!(lemmas, ["chase", "bite"]);
    for rec in &recs {
        assert_eq!(rec.agents[0].head, "dog");
        assert_eq!(rec.patients[0].head, "cat");
    }
}

#[test]
fn sentence_coordination_splits_clauses() {
    let recs = analyzer().analyze("the boy runs and the girl walks").unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].agents[0].head, "boy");
    assert_eq!(recs[0].action.lemma, "run");
    assert_eq!(recs[1].agents[0].head, "girl");
    assert_eq!(recs[1].action.lemma, "walk");
}

#[test]
fn intransitive_keeps_its_record() {
    let recs = analyzer().analyze("the dog runs").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].agents[0].head, "dog");
    assert_eq!(recs[0].agents[0].attributes, ["the"]);
    assert_eq!(recs[0].action.lemma, "run");
    assert_eq!(recs[0].action.surface, "runs");
    assert!(recs[0].patients.is_empty());
    assert!(recs[0].modifiers.is_empty());
}

#[test]
fn adverb_becomes_a_modifier() {
    let recs = analyzer().analyze("the dog runs quickly").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(
        recs[0].modifiers,
        [Modifier::Adverb { word: "quickly".to_string() }]
    );
}

#[test]
fn prepositional_modifier_carries_its_object() {
    let recs = analyzer().analyze("a person walks to the park").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].action.lemma, "walk");
    match &recs[0].modifiers[0] {
        Modifier::Prepositional { prep, objects } => {
            assert_eq!(prep, "to");
            assert_eq!(objects.len(), 1);
            assert_eq!(objects[0].head, "park");
        }
        other => panic!("expected prepositional modifier, got {:?}", other),
    }
}

#[test]
fn relative_clause_nests_a_subclause() {
    let recs = analyzer()
        .analyze("the teacher who teaches math is running quickly")
        .unwrap();
    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert_eq!(rec.agents[0].head, "teacher");
    assert_eq!(rec.action.lemma, "run");
    assert_eq!(rec.action.surface, "is running");
    assert_eq!(
        rec.modifiers,
        [Modifier::Adverb { word: "quickly".to_string() }]
    );
    assert_eq!(rec.subclauses.len(), 1);
    let sub = &rec.subclauses[0];
    assert_eq!(sub.agents[0].head, "teacher");
    assert_eq!(sub.action.lemma, "teach");
    assert_eq!(sub.patients[0].head, "math");
    assert!(sub.subclauses.is_empty());
}

#[test]
fn patient_side_relative_clause() {
    let recs = analyzer().analyze("the boy sees the dog that runs").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].patients[0].head, "dog");
    assert_eq!(recs[0].subclauses.len(), 1);
    assert_eq!(recs[0].subclauses[0].agents[0].head, "dog");
    assert_eq!(recs[0].subclauses[0].action.lemma, "run");
}

#[test]
fn adjectives_are_entity_attributes() {
    let recs = analyzer().analyze("the angry dog bites the careless boy").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].agents[0].attributes, ["the", "angry"]);
    assert_eq!(recs[0].patients[0].attributes, ["the", "careless"]);
    assert!(recs[0].modifiers.is_empty());
}

#[test]
fn attachment_ambiguity_yields_two_mappings() {
    let all = analyzer()
        .analyze_all("john sees the dog with a telescope")
        .unwrap();
    assert_eq!(all.len(), 2);
    // the richest-mapping policy keeps the VP-attached reading
    let recs = analyzer().analyze("john sees the dog with a telescope").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].modifiers.len(), 1);
    assert!(recs[0].patients[0].attributes.is_empty());
}

#[test]
fn analysis_is_deterministic() {
    let analyzer = analyzer();
    let sentence = "the boy and the girl chase the dog in the park";
    assert_eq!(analyzer.analyze(sentence), analyzer.analyze(sentence));
    assert_eq!(analyzer.analyze_all(sentence), analyzer.analyze_all(sentence));
}

#[test]
fn unknown_word_is_reported_not_fatal() {
    assert_eq!(
        analyzer().analyze("the zebra runs"),
        Err(AnalyzeError::Parse(ParseError::UnclassifiedWord(
            "zebra".to_string()
        )))
    );
}

#[test]
fn ungrammatical_sentence_is_no_parse() {
    assert_eq!(
        analyzer().analyze("dog the runs"),
        Err(AnalyzeError::Parse(ParseError::NoParse))
    );
}

#[test]
fn recursion_limit_is_distinguished_from_no_parse() {
    let tight = Analyzer::with_config(
        english_grammar(),
        english_lexicon(),
        HeuristicTagger,
        HeuristicLemmatizer::with_known_forms(verb_lemmas().iter().copied()),
        ParserConfig { max_depth: 2 },
    );
    assert_eq!(
        tight.analyze("the dog runs"),
        Err(AnalyzeError::Parse(ParseError::RecursionLimit(2)))
    );
}

#[test]
fn pronoun_subject_with_two_modifiers() {
    let recs = analyzer().analyze("she works at the office quickly").unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].agents[0].head, "she");
    assert!(recs[0].agents[0].attributes.is_empty());
    assert_eq!(recs[0].action.lemma, "work");
    assert_eq!(recs[0].modifiers.len(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn records_serialize_to_json() {
    let recs = analyzer().analyze("the dog runs quickly").unwrap();
    let json = serde_json::to_string(&recs).unwrap();
    assert!(json.contains("\"agents\""));
    assert!(json.contains("\"dog\""));
    assert!(json.contains("\"quickly\""));
}
