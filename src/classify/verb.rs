//! Verb-type classification: modal, auxiliary, phrasal and regular verbs.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::document::Document;
use crate::types::{ModalInfo, PhrasalVerb, Token, VerbKind, VerbType};

/// Modal verbs with their meaning flags.
static MODAL_VERBS: &[(&str, &[&str])] = &[
    ("can", &["ability", "permission", "possibility"]),
    ("could", &["ability", "permission", "possibility", "past_ability"]),
    ("may", &["permission", "possibility"]),
    ("might", &["possibility", "uncertainty"]),
    ("must", &["necessity", "obligation", "deduction"]),
    ("shall", &["future", "obligation"]),
    ("should", &["advice", "obligation", "expectation"]),
    ("will", &["future", "willingness"]),
    ("would", &["conditional", "past_habit", "polite_request"]),
];

static AUXILIARY_VERBS: &[&str] = &["be", "have", "do"];

/// Particles that can combine with a verb into a phrasal verb.
static PHRASAL_PARTICLES: &[&str] = &[
    "up", "down", "in", "out", "on", "off", "away", "back", "over", "through", "along", "around",
];

lazy_static! {
    static ref PHRASAL_MEANINGS: HashMap<&'static str, &'static str> = {
        let mut meanings = HashMap::new();
        meanings.insert("put up", "tolerate, accommodate");
        meanings.insert("get along", "have a good relationship");
        meanings.insert("get along with", "have a good relationship with");
        meanings.insert("put off", "postpone");
        meanings.insert("give up", "stop trying, quit");
        meanings.insert("look after", "take care of");
        meanings.insert("turn on", "activate, switch on");
        meanings.insert("turn off", "deactivate, switch off");
        meanings.insert("come across", "find by chance");
        meanings.insert("break down", "stop working, analyze");
        meanings.insert("bring up", "raise, mention");
        meanings.insert("call off", "cancel");
        meanings.insert("find out", "discover");
        meanings.insert("give in", "surrender, yield");
        meanings.insert("look forward to", "anticipate with pleasure");
        meanings.insert("run out of", "use up, exhaust supply");
        meanings
    };
}

const FALLBACK_MEANING: &str = "phrasal verb (meaning context-dependent)";

/// Classifies a verb token as modal, auxiliary, phrasal or regular.
/// Returns `None` for non-verb tokens.
pub fn analyze_verb_type(token: &Token, doc: &Document) -> Option<VerbType> {
    if token.pos != "VERB" {
        return None;
    }

    let lemma = token.lower_lemma();

    if let Some((_, meanings)) = MODAL_VERBS.iter().find(|(modal, _)| *modal == lemma) {
        return Some(VerbType {
            kind: VerbKind::Modal,
            modal: Some(ModalInfo {
                verb: lemma,
                meanings: meanings.iter().map(|m| m.to_string()).collect(),
            }),
            auxiliary: None,
            phrasal: None,
        });
    }

    if AUXILIARY_VERBS.contains(&lemma.as_str()) {
        return Some(VerbType {
            kind: VerbKind::Auxiliary,
            modal: None,
            auxiliary: Some(lemma),
            phrasal: None,
        });
    }

    if let Some(phrasal) = detect_phrasal_verb(token, doc) {
        return Some(VerbType {
            kind: VerbKind::Phrasal,
            modal: None,
            auxiliary: None,
            phrasal: Some(phrasal),
        });
    }

    Some(VerbType {
        kind: VerbKind::Regular,
        modal: None,
        auxiliary: None,
        phrasal: None,
    })
}

/// Scans the three tokens after the verb for particles attached to it and
/// collects at most two. A verb without particles is not phrasal.
fn detect_phrasal_verb(verb: &Token, doc: &Document) -> Option<PhrasalVerb> {
    let mut particles: Vec<String> = Vec::new();
    let mut separable = false;

    for next in doc.window(verb.id, 0, 4).iter().skip(1) {
        if particles.len() == 2 {
            break;
        }

        let text = next.lower_text();
        if PHRASAL_PARTICLES.contains(&text.as_str())
            && (next.head == verb.id || next.dep == "prt" || next.dep == "advmod")
        {
            // an object between the verb and the particle makes the phrasal
            // verb separable, e. g. "turn it off"
            if next.id > verb.id + 1 {
                separable |= doc.tokens()[verb.id + 1..next.id]
                    .iter()
                    .any(|t| t.head == verb.id && (t.dep == "dobj" || t.dep == "pobj"));
            }
            particles.push(text);
        }
    }

    if particles.is_empty() {
        return None;
    }

    let full_form = format!("{} {}", verb.lemma, particles.join(" "));
    let meaning = PHRASAL_MEANINGS
        .get(full_form.as_str())
        .copied()
        .unwrap_or(FALLBACK_MEANING)
        .to_string();

    Some(PhrasalVerb {
        base: verb.lemma.clone(),
        particles,
        full_form,
        separable,
        meaning,
    })
}
