//! Tense, aspect and voice derivation for verb tokens.

use crate::document::Document;
use crate::types::{Aspect, Grammar, Tense, Token, Voice};

/// Derives tense / aspect / voice for a verb token from its fine-grained tag
/// and its auxiliary children. Returns `None` for non-verb tokens.
pub fn analyze_grammar(token: &Token, doc: &Document) -> Option<Grammar> {
    if token.pos != "VERB" {
        return None;
    }

    let mut grammar = Grammar::default();
    let tag = token.tag.as_str();

    grammar.tense = match tag {
        "VBD" | "VBN" => Some(Tense::Past),
        "VBZ" | "VBP" | "VB" => Some(Tense::Present),
        "MD" => Some(Tense::Future),
        _ => None,
    };

    grammar.aspect = match tag {
        "VBD" | "VBZ" | "VBP" | "VB" => Some(Aspect::Simple),
        "VBG" => Some(Aspect::Progressive),
        "VBN" => {
            // a bare past participle without have/has/had is ambiguous
            // between passive and past simple; treated as simple
            if doc
                .children(token.id)
                .any(|child| matches!(child.lower_lemma().as_str(), "have" | "has" | "had"))
            {
                Some(Aspect::Perfect)
            } else {
                Some(Aspect::Simple)
            }
        }
        _ => None,
    };

    grammar.voice = if doc.children(token.id).any(|child| child.dep == "nsubjpass") {
        Some(Voice::Passive)
    } else if tag == "VBN"
        && doc
            .children(token.id)
            .any(|child| child.lower_lemma() == "be" && child.dep == "auxpass")
    {
        Some(Voice::Passive)
    } else {
        Some(Voice::Active)
    };

    // repair pass: only fills a tense the primary rule left open, from the
    // first aux/auxpass child
    if grammar.tense.is_none() {
        if let Some(aux) = doc
            .children(token.id)
            .find(|child| child.dep == "aux" || child.dep == "auxpass")
        {
            grammar.tense = match aux.tag.as_str() {
                "MD" => Some(Tense::Future),
                "VBD" | "VBN" => Some(Tense::Past),
                "VBZ" | "VBP" => Some(Tense::Present),
                _ => None,
            };
        }
    }

    Some(grammar)
}
