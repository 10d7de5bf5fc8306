//! Preposition classification, prepositional-phrase extraction and nested
//! phrase discovery.

use itertools::Itertools;

use crate::document::Document;
use crate::types::{
    NestedPhrase, PhraseModifier, PrepositionAnalysis, PrepositionType, PrepositionalPhrase, Token,
};

/// Preposition lists per semantic type, checked in this order.
static PREPOSITION_TYPES: &[(PrepositionType, &[&str])] = &[
    (
        PrepositionType::Time,
        &[
            "at", "in", "on", "during", "for", "since", "until", "by", "before", "after", "within",
        ],
    ),
    (
        PrepositionType::Place,
        &[
            "at", "in", "on", "under", "over", "above", "below", "beside", "behind", "between",
            "among", "near", "far",
        ],
    ),
    (
        PrepositionType::Direction,
        &[
            "to", "from", "into", "onto", "toward", "towards", "through", "across", "along", "up",
            "down",
        ],
    ),
    (PrepositionType::Agent, &["by", "with"]),
    (PrepositionType::Instrument, &["with", "by"]),
    (PrepositionType::Purpose, &["for", "to"]),
    (PrepositionType::Possession, &["of", "with"]),
    (PrepositionType::Manner, &["with", "by", "in"]),
    (
        PrepositionType::Cause,
        &["because of", "due to", "owing to", "thanks to"],
    ),
    (
        PrepositionType::Concession,
        &["despite", "in spite of", "notwithstanding"],
    ),
    (
        PrepositionType::Exception,
        &["except", "except for", "but", "besides", "apart from"],
    ),
];

static MULTIWORD_PREPOSITIONS: &[&str] = &[
    "because of",
    "due to",
    "owing to",
    "thanks to",
    "in spite of",
    "instead of",
    "on behalf of",
    "in front of",
    "in back of",
    "on top of",
    "out of",
    "up to",
    "as well as",
];

static TIME_MARKERS: &[&str] = &["yesterday", "today", "tomorrow", "now", "then"];

/// Classifies a preposition and extracts its phrase. Returns `None` for
/// non-ADP tokens.
pub fn analyze_preposition(token: &Token, doc: &Document) -> Option<PrepositionAnalysis> {
    if token.pos != "ADP" {
        return None;
    }

    let multiword = multiword_preposition(token, doc);

    Some(PrepositionAnalysis {
        kind: classify_type(token, doc, multiword.as_deref()),
        prepositional_phrase: extract_phrase(token, doc),
        is_multiword: multiword.is_some(),
    })
}

/// Grows the surface phrase over up to three following tokens; the first
/// listed phrase wins.
fn multiword_preposition(token: &Token, doc: &Document) -> Option<String> {
    let mut phrase = String::new();

    for next in doc.window(token.id, 0, 4) {
        if !phrase.is_empty() {
            phrase.push(' ');
        }
        phrase.push_str(&next.lower_text());

        if MULTIWORD_PREPOSITIONS.contains(&phrase.as_str()) {
            return Some(phrase);
        }
    }

    None
}

fn classify_type(token: &Token, doc: &Document, multiword: Option<&str>) -> PrepositionType {
    let text = multiword
        .map(str::to_string)
        .unwrap_or_else(|| token.lower_text());
    let lemma = token.lower_lemma();

    for (kind, prepositions) in PREPOSITION_TYPES {
        if prepositions.contains(&text.as_str()) || prepositions.contains(&lemma.as_str()) {
            return *kind;
        }
    }

    classify_by_context(token, doc)
}

/// Fallback classification from the object and the governing head: verbal
/// heads with a nearby time marker read as time, otherwise place.
fn classify_by_context(token: &Token, doc: &Document) -> PrepositionType {
    let object = match pobj_child(doc, token.id) {
        Some(object) => object,
        None => return PrepositionType::Unknown,
    };

    if matches!(object.pos.as_str(), "NOUN" | "PRON") {
        let head = doc.head_of(token);
        if head.pos == "VERB" {
            let has_time_marker = doc
                .window(token.id, 3, 3)
                .iter()
                .any(|t| TIME_MARKERS.contains(&t.lower_text().as_str()));
            if has_time_marker {
                return PrepositionType::Time;
            }
            return PrepositionType::Place;
        } else if head.pos == "NOUN" {
            return PrepositionType::Place;
        }
    }

    PrepositionType::Unknown
}

fn extract_phrase(token: &Token, doc: &Document) -> PrepositionalPhrase {
    let mut phrase = PrepositionalPhrase {
        preposition: token.text.clone(),
        object: None,
        object_pos: None,
        modifiers: Vec::new(),
        full_phrase: String::new(),
    };

    let object = match pobj_child(doc, token.id) {
        Some(object) => object,
        None => return phrase,
    };

    phrase.object = Some(object.text.clone());
    phrase.object_pos = Some(object.pos.clone());

    for child in doc.children(object.id) {
        if matches!(child.dep.as_str(), "amod" | "det" | "nummod") {
            phrase.modifiers.push(PhraseModifier {
                text: child.text.clone(),
                pos: child.pos.clone(),
                dep: child.dep.clone(),
            });
        }
    }

    // object ids before the preposition only occur on malformed parses
    if object.id >= token.id {
        phrase.full_phrase = doc.tokens()[token.id..=object.id]
            .iter()
            .map(|t| t.text.as_str())
            .join(" ");
    }

    phrase
}

/// One record per preposition whose object governs another preposition.
pub fn find_nested_phrases(doc: &Document) -> Vec<NestedPhrase> {
    let mut nested = Vec::new();

    for preposition in doc.tokens().iter().filter(|t| t.pos == "ADP") {
        let object = match pobj_child(doc, preposition.id) {
            Some(object) => object,
            None => continue,
        };

        for inner in doc.children(object.id).filter(|child| child.pos == "ADP") {
            nested.push(NestedPhrase {
                outer_preposition: preposition.text.clone(),
                outer_object: object.text.clone(),
                inner_preposition: inner.text.clone(),
                inner_object: pobj_child(doc, inner.id).map(|t| t.text.clone()),
                sentence: doc
                    .sentence_at(preposition.id)
                    .map(|s| s.text.clone())
                    .unwrap_or_default(),
            });
        }
    }

    nested
}

fn pobj_child<'a>(doc: &'a Document, id: usize) -> Option<&'a Token> {
    doc.children(id).find(|child| child.dep == "pobj")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::{cat_sat, doc, tok};

    #[test]
    fn dictionary_type_and_phrase_extraction() {
        let doc = cat_sat();
        let analysis = analyze_preposition(&doc.tokens()[3], &doc).unwrap();

        // "on" sits in the time list, which is checked first
        assert_eq!(analysis.kind, PrepositionType::Time);
        assert!(!analysis.is_multiword);

        let phrase = analysis.prepositional_phrase;
        assert_eq!(phrase.preposition, "on");
        assert_eq!(phrase.object.as_deref(), Some("mat"));
        assert_eq!(phrase.object_pos.as_deref(), Some("NOUN"));
        assert_eq!(phrase.full_phrase, "on the mat");
        assert_eq!(phrase.modifiers.len(), 1);
        assert_eq!(phrase.modifiers[0].dep, "det");
    }

    #[test]
    fn multiword_preposition_detected() {
        let doc = doc(
            "He succeeded because of luck.",
            vec![
                tok(0, "He", "he", "PRON", "PRP", 1, "nsubj"),
                tok(1, "succeeded", "succeed", "VERB", "VBD", 1, "ROOT"),
                tok(2, "because", "because", "ADP", "IN", 1, "prep"),
                tok(3, "of", "of", "ADP", "IN", 2, "prep"),
                tok(4, "luck", "luck", "NOUN", "NN", 3, "pobj"),
                tok(5, ".", ".", "PUNCT", ".", 1, "punct"),
            ],
        );

        let because = analyze_preposition(&doc.tokens()[2], &doc).unwrap();
        assert!(because.is_multiword);
        assert_eq!(because.kind, PrepositionType::Cause);

        let of = analyze_preposition(&doc.tokens()[3], &doc).unwrap();
        assert!(!of.is_multiword);
        assert_eq!(of.kind, PrepositionType::Possession);
    }

    #[test]
    fn context_fallback_without_object_is_unknown() {
        let doc = doc(
            "He gave amidst.",
            vec![
                tok(0, "He", "he", "PRON", "PRP", 1, "nsubj"),
                tok(1, "gave", "give", "VERB", "VBD", 1, "ROOT"),
                tok(2, "amidst", "amidst", "ADP", "IN", 1, "prep"),
                tok(3, ".", ".", "PUNCT", ".", 1, "punct"),
            ],
        );

        let analysis = analyze_preposition(&doc.tokens()[2], &doc).unwrap();
        assert_eq!(analysis.kind, PrepositionType::Unknown);
        assert!(analysis.prepositional_phrase.object.is_none());
        assert_eq!(analysis.prepositional_phrase.full_phrase, "");
    }

    #[test]
    fn nested_phrases_found_per_pair() {
        let doc = doc(
            "The house in the woods near the lake.",
            vec![
                tok(0, "The", "the", "DET", "DT", 1, "det"),
                tok(1, "house", "house", "NOUN", "NN", 1, "ROOT"),
                tok(2, "in", "in", "ADP", "IN", 1, "prep"),
                tok(3, "the", "the", "DET", "DT", 4, "det"),
                tok(4, "woods", "wood", "NOUN", "NNS", 2, "pobj"),
                tok(5, "near", "near", "ADP", "IN", 4, "prep"),
                tok(6, "the", "the", "DET", "DT", 7, "det"),
                tok(7, "lake", "lake", "NOUN", "NN", 5, "pobj"),
                tok(8, ".", ".", "PUNCT", ".", 1, "punct"),
            ],
        );

        let nested = find_nested_phrases(&doc);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].outer_preposition, "in");
        assert_eq!(nested[0].outer_object, "woods");
        assert_eq!(nested[0].inner_preposition, "near");
        assert_eq!(nested[0].inner_object.as_deref(), Some("lake"));
    }

    #[test]
    fn non_preposition_is_not_applicable() {
        let doc = cat_sat();
        assert!(analyze_preposition(&doc.tokens()[1], &doc).is_none());
    }
}
