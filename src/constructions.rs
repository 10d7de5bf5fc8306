//! Extraction of grammar constructions: tense forms, conditionals, reported
//! speech and passive voice.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::document::Document;
use crate::types::{
    AnnotatedToken, Aspect, ConditionalType, Grammar, GrammarConstruction, Sentence, Tense, Token,
    Voice,
};
use crate::utils::title_case;

lazy_static! {
    /// Canonical English tense names by (tense, aspect, voice).
    static ref TENSE_NAMES: HashMap<(Tense, Aspect, Voice), &'static str> = {
        use Aspect::*;
        use Tense::*;
        use Voice::*;

        let mut names = HashMap::new();
        names.insert((Present, Simple, Active), "Present Simple");
        names.insert((Present, Simple, Passive), "Present Simple Passive");
        names.insert((Present, Progressive, Active), "Present Continuous");
        names.insert((Present, Progressive, Passive), "Present Continuous Passive");
        names.insert((Present, Perfect, Active), "Present Perfect");
        names.insert((Present, Perfect, Passive), "Present Perfect Passive");
        names.insert((Past, Simple, Active), "Past Simple");
        names.insert((Past, Simple, Passive), "Past Simple Passive");
        names.insert((Past, Progressive, Active), "Past Continuous");
        names.insert((Past, Progressive, Passive), "Past Continuous Passive");
        names.insert((Past, Perfect, Active), "Past Perfect");
        names.insert((Past, Perfect, Passive), "Past Perfect Passive");
        names.insert((Future, Simple, Active), "Future Simple");
        names.insert((Future, Simple, Passive), "Future Simple Passive");
        names.insert((Future, Progressive, Active), "Future Continuous");
        names.insert((Future, Progressive, Passive), "Future Continuous Passive");
        names.insert((Future, Perfect, Active), "Future Perfect");
        names.insert((Future, Perfect, Passive), "Future Perfect Passive");
        names
    };
}

static CONDITIONAL_MARKERS: &[&str] = &["if", "unless", "provided", "supposing", "as long as"];

static REPORTING_VERBS: &[&str] = &[
    "say", "tell", "ask", "reply", "answer", "explain", "suggest", "claim", "report",
];

static QUESTION_WORDS: &[&str] = &["what", "who", "where", "when", "why", "how"];

/// Extracts all construction records for one document, reading the grammar
/// annotations already derived per token.
pub fn extract_constructions(doc: &Document, tokens: &[AnnotatedToken]) -> Vec<GrammarConstruction> {
    let mut constructions = Vec::new();
    constructions.extend(tense_constructions(doc, tokens));
    constructions.extend(conditional_constructions(doc, tokens));
    constructions.extend(reported_speech_constructions(doc));
    constructions.extend(passive_constructions(doc, tokens));
    constructions
}

/// The canonical name for a tense/aspect/voice combination; combinations
/// outside the table fall back to "<Tense> <Aspect>".
pub fn full_tense_name(tense: Tense, aspect: Aspect, voice: Voice) -> String {
    TENSE_NAMES
        .get(&(tense, aspect, voice))
        .map(|name| name.to_string())
        .unwrap_or_else(|| {
            format!(
                "{} {}",
                title_case(tense.as_str()),
                title_case(aspect.as_str())
            )
        })
}

fn grammar_of<'a>(tokens: &'a [AnnotatedToken], verb: &Token) -> Option<&'a Grammar> {
    tokens.get(verb.id).and_then(|token| token.grammar.as_ref())
}

fn sentence_verbs<'a>(doc: &'a Document, sentence: &Sentence) -> Vec<&'a Token> {
    doc.sentence_tokens(sentence)
        .iter()
        .filter(|t| t.pos == "VERB")
        .collect()
}

fn tense_constructions(doc: &Document, tokens: &[AnnotatedToken]) -> Vec<GrammarConstruction> {
    let mut constructions = Vec::new();

    for sentence in doc.sentences() {
        for verb in sentence_verbs(doc, sentence) {
            let grammar = match grammar_of(tokens, verb) {
                Some(grammar) => grammar,
                None => continue,
            };
            let (tense, aspect) = match (grammar.tense, grammar.aspect) {
                (Some(tense), Some(aspect)) => (tense, aspect),
                _ => continue,
            };
            let voice = grammar.voice.unwrap_or(Voice::Active);

            constructions.push(GrammarConstruction::Tense {
                tense_name: full_tense_name(tense, aspect, voice),
                tense,
                aspect,
                voice,
                verb: verb.text.clone(),
                verb_id: verb.id,
                sentence: sentence.text.clone(),
                sentence_start: sentence.start,
                sentence_end: sentence.end,
            });
        }
    }

    constructions
}

fn conditional_constructions(doc: &Document, tokens: &[AnnotatedToken]) -> Vec<GrammarConstruction> {
    let mut constructions = Vec::new();

    for sentence in doc.sentences() {
        let text = sentence.text.to_lowercase();
        if !CONDITIONAL_MARKERS.iter().any(|marker| text.contains(marker)) {
            continue;
        }

        let verbs = sentence_verbs(doc, sentence);
        if verbs.len() < 2 {
            continue;
        }

        if let Some(conditional_type) = conditional_type(&verbs, tokens) {
            constructions.push(GrammarConstruction::Conditional {
                conditional_type,
                sentence: sentence.text.clone(),
                sentence_start: sentence.start,
                sentence_end: sentence.end,
            });
        }
    }

    constructions
}

fn conditional_type(verbs: &[&Token], tokens: &[AnnotatedToken]) -> Option<ConditionalType> {
    let tenses: Vec<Tense> = verbs
        .iter()
        .filter_map(|verb| grammar_of(tokens, verb).and_then(|g| g.tense))
        .collect();

    // Type 1: if + present, future/modal
    if tenses.contains(&Tense::Present)
        && (tenses.contains(&Tense::Future)
            || verbs.iter().any(|v| v.lower_text().contains("will")))
    {
        return Some(ConditionalType::Type1);
    }

    // Type 2: if + past simple, would/could/might
    if tenses.contains(&Tense::Past)
        && verbs
            .iter()
            .any(|v| matches!(v.lower_lemma().as_str(), "would" | "could" | "might"))
    {
        return Some(ConditionalType::Type2);
    }

    // Type 3 (if + past perfect, would have + past participle) is not
    // resolved by the current rules
    None
}

fn reported_speech_constructions(doc: &Document) -> Vec<GrammarConstruction> {
    let mut constructions = Vec::new();

    for sentence in doc.sentences() {
        let sentence_tokens = doc.sentence_tokens(sentence);

        let reporting_verb = match sentence_tokens.iter().find(|t| {
            t.pos == "VERB" && REPORTING_VERBS.contains(&t.lower_lemma().as_str())
        }) {
            Some(verb) => verb,
            None => continue,
        };

        let has_that = sentence_tokens.iter().any(|t| t.lower_text() == "that");
        let has_question_word = sentence_tokens.iter().any(|t| {
            matches!(t.tag.as_str(), "WP" | "WRB")
                && QUESTION_WORDS.contains(&t.lower_text().as_str())
        });

        if has_that || has_question_word {
            constructions.push(GrammarConstruction::ReportedSpeech {
                reporting_verb: reporting_verb.text.clone(),
                verb_id: reporting_verb.id,
                sentence: sentence.text.clone(),
                sentence_start: sentence.start,
                sentence_end: sentence.end,
            });
        }
    }

    constructions
}

fn passive_constructions(doc: &Document, tokens: &[AnnotatedToken]) -> Vec<GrammarConstruction> {
    let mut constructions = Vec::new();

    for sentence in doc.sentences() {
        for verb in sentence_verbs(doc, sentence) {
            let grammar = match grammar_of(tokens, verb) {
                Some(grammar) => grammar,
                None => continue,
            };

            if grammar.voice == Some(Voice::Passive) {
                constructions.push(GrammarConstruction::PassiveVoice {
                    verb: verb.text.clone(),
                    verb_id: verb.id,
                    tense: grammar.tense,
                    aspect: grammar.aspect,
                    sentence: sentence.text.clone(),
                    sentence_start: sentence.start,
                    sentence_end: sentence.end,
                });
            }
        }
    }

    constructions
}
