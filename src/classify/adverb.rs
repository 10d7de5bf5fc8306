//! Semantic and morphological classification of adverbs.

use crate::document::Document;
use crate::types::{
    AdverbClassification, AdverbMorphology, AdverbSemantic, ModifiedWord, SentencePosition, Token,
};

/// Adverbs with a clear semantic category, checked in this order.
static SEMANTIC_ADVERBS: &[(AdverbSemantic, &[&str])] = &[
    (
        AdverbSemantic::Manner,
        &[
            "quickly", "slowly", "carefully", "well", "badly", "easily", "hard", "fast", "loudly",
            "quietly",
        ],
    ),
    (
        AdverbSemantic::Time,
        &[
            "yesterday", "today", "tomorrow", "now", "then", "soon", "later", "earlier",
            "recently", "already", "yet", "still",
        ],
    ),
    (
        AdverbSemantic::Place,
        &[
            "here",
            "there",
            "above",
            "below",
            "upstairs",
            "downstairs",
            "nearby",
            "away",
            "everywhere",
            "nowhere",
            "somewhere",
        ],
    ),
    (
        AdverbSemantic::Frequency,
        &[
            "always",
            "never",
            "sometimes",
            "often",
            "usually",
            "rarely",
            "seldom",
            "frequently",
            "occasionally",
            "daily",
            "weekly",
        ],
    ),
    (
        AdverbSemantic::Degree,
        &[
            "very",
            "quite",
            "too",
            "enough",
            "rather",
            "pretty",
            "fairly",
            "extremely",
            "absolutely",
            "completely",
            "totally",
        ],
    ),
    (
        AdverbSemantic::Sentence,
        &[
            "unfortunately",
            "perhaps",
            "actually",
            "obviously",
            "certainly",
            "probably",
            "maybe",
            "indeed",
            "surely",
            "hopefully",
        ],
    ),
];

/// Prefixes of compound adverbs like "somewhere" or "everywhere".
static COMPOUND_PREFIXES: &[&str] = &["some", "any", "every", "no"];

/// Classifies an adverb along four axes. Returns `None` for non-ADV tokens.
pub fn classify_adverb(token: &Token, doc: &Document) -> Option<AdverbClassification> {
    if token.pos != "ADV" {
        return None;
    }

    Some(AdverbClassification {
        semantic: classify_semantic(token),
        morphological: classify_morphological(token),
        modifies: find_modified_word(token, doc),
        position: position_in_sentence(token, doc),
    })
}

fn classify_semantic(token: &Token) -> AdverbSemantic {
    let lemma = token.lower_lemma();
    let text = token.lower_text();

    for (category, words) in SEMANTIC_ADVERBS {
        if words.contains(&lemma.as_str()) || words.contains(&text.as_str()) {
            return *category;
        }
    }

    // wh-words and intensifiers the dictionary misses
    if matches!(text.as_str(), "now" | "then" | "when" | "while") {
        return AdverbSemantic::Time;
    }
    if matches!(text.as_str(), "here" | "there" | "where") {
        return AdverbSemantic::Place;
    }
    if matches!(text.as_str(), "very" | "much" | "quite" | "too" | "so") {
        return AdverbSemantic::Degree;
    }

    AdverbSemantic::Manner
}

fn classify_morphological(token: &Token) -> AdverbMorphology {
    let text = token.lower_text();
    let lemma = token.lower_lemma();

    if COMPOUND_PREFIXES
        .iter()
        .any(|prefix| text.starts_with(prefix) && text.len() > prefix.len())
    {
        return AdverbMorphology::Compound;
    }

    if text.ends_with("ly") || lemma.ends_with("ly") {
        return AdverbMorphology::Derived;
    }
    if text.ends_with("ward") || text.ends_with("wise") {
        return AdverbMorphology::Derived;
    }

    AdverbMorphology::Simple
}

fn find_modified_word(token: &Token, doc: &Document) -> Option<ModifiedWord> {
    if token.is_root() {
        return None;
    }

    let head = doc.head_of(token);
    Some(ModifiedWord {
        id: head.id,
        text: head.text.clone(),
        lemma: head.lemma.clone(),
        pos: head.pos.clone(),
        relation: token.dep.clone(),
    })
}

fn position_in_sentence(token: &Token, doc: &Document) -> SentencePosition {
    let sentence = match doc.sentence_at(token.id) {
        Some(sentence) => sentence,
        None => return SentencePosition::Unknown,
    };

    let length = sentence.len();
    let normalized = if length > 0 {
        (token.id - sentence.start) as f64 / length as f64
    } else {
        0.0
    };

    if normalized < 0.2 {
        SentencePosition::Beginning
    } else if normalized < 0.8 {
        SentencePosition::Middle
    } else {
        SentencePosition::End
    }
}
