//! Role detection for present (VBG) and past (VBN) participles.

use crate::document::Document;
use crate::types::{Participle, ParticipleKind, ParticipleRole, Token};

/// Detects the roles a participle plays in its sentence. Applies to VBG and
/// VBN tokens; everything else returns `None`.
pub fn analyze_participle(token: &Token, doc: &Document) -> Option<Participle> {
    match token.tag.as_str() {
        "VBG" => Some(present_participle(token, doc)),
        "VBN" => Some(past_participle(token, doc)),
        _ => None,
    }
}

fn present_participle(token: &Token, doc: &Document) -> Participle {
    let mut roles = Vec::new();

    // part of a progressive tense: "is running"
    if doc
        .children(token.id)
        .any(|child| (child.dep == "aux" || child.dep == "auxpass") && child.lower_lemma() == "be")
    {
        roles.push(ParticipleRole::ProgressiveTense);
    }

    // attributive use: "a running horse"
    if is_adjectival(token, doc) {
        roles.push(ParticipleRole::Adjective);
    }

    // gerund as argument of a verb with a prepositional child: "I enjoy
    // reading in bed"
    let head = doc.head_of(token);
    if matches!(token.dep.as_str(), "dobj" | "pobj" | "nsubj")
        && head.pos == "VERB"
        && doc.children(head.id).any(|child| child.dep == "prep")
    {
        roles.push(ParticipleRole::Gerund);
    }

    // absolute construction: "Having finished, he left"
    if token.dep == "advcl" || preceded_by(token, doc, &["having", "being"]) {
        roles.push(ParticipleRole::AbsoluteConstruction);
    }

    if roles.is_empty() {
        roles.push(ParticipleRole::PresentParticiple);
    }

    Participle {
        kind: ParticipleKind::Present,
        form: token.text.clone(),
        base: token.lemma.clone(),
        roles,
    }
}

fn past_participle(token: &Token, doc: &Document) -> Participle {
    let mut roles = Vec::new();

    // part of a perfect tense: "has written"
    if doc.children(token.id).any(|child| {
        (child.dep == "aux" || child.dep == "auxpass")
            && matches!(child.lower_lemma().as_str(), "have" | "has" | "had")
    }) {
        roles.push(ParticipleRole::PerfectTense);
    }

    // passive voice: "was written"
    if doc
        .children(token.id)
        .any(|child| child.dep == "auxpass" && child.lower_lemma() == "be")
    {
        roles.push(ParticipleRole::PassiveVoice);
    }

    // attributive use: "a broken window"
    if is_adjectival(token, doc) {
        roles.push(ParticipleRole::Adjective);
    }

    // absolute construction: "Once finished, the report was submitted"
    if token.dep == "advcl" || preceded_by(token, doc, &["once", "when", "after"]) {
        roles.push(ParticipleRole::AbsoluteConstruction);
    }

    if roles.is_empty() {
        roles.push(ParticipleRole::PastParticiple);
    }

    Participle {
        kind: ParticipleKind::Past,
        form: token.text.clone(),
        base: token.lemma.clone(),
        roles,
    }
}

fn is_adjectival(token: &Token, doc: &Document) -> bool {
    token.dep == "amod"
        || (doc.head_of(token).pos == "NOUN" && matches!(token.dep.as_str(), "amod" | "nmod"))
}

fn preceded_by(token: &Token, doc: &Document, markers: &[&str]) -> bool {
    token.id > 0
        && markers.contains(&doc.tokens()[token.id - 1].lower_text().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::{cat_sitting, cat_was_sat, doc, tok};

    #[test]
    fn progressive_tense_role() {
        let doc = cat_sitting();
        let participle = analyze_participle(&doc.tokens()[3], &doc).unwrap();

        assert_eq!(participle.kind, ParticipleKind::Present);
        assert!(participle.roles.contains(&ParticipleRole::ProgressiveTense));
    }

    #[test]
    fn passive_voice_role() {
        let doc = cat_was_sat();
        let participle = analyze_participle(&doc.tokens()[3], &doc).unwrap();

        assert_eq!(participle.kind, ParticipleKind::Past);
        assert!(participle.roles.contains(&ParticipleRole::PassiveVoice));
    }

    #[test]
    fn attributive_participle_is_adjectival() {
        let doc = doc(
            "A running horse appeared.",
            vec![
                tok(0, "A", "a", "DET", "DT", 2, "det"),
                tok(1, "running", "run", "VERB", "VBG", 2, "amod"),
                tok(2, "horse", "horse", "NOUN", "NN", 3, "nsubj"),
                tok(3, "appeared", "appear", "VERB", "VBD", 3, "ROOT"),
                tok(4, ".", ".", "PUNCT", ".", 3, "punct"),
            ],
        );

        let participle = analyze_participle(&doc.tokens()[1], &doc).unwrap();
        assert_eq!(participle.roles, vec![ParticipleRole::Adjective]);
    }

    #[test]
    fn gerund_needs_prepositional_sibling() {
        let doc = doc(
            "I enjoy reading in bed.",
            vec![
                tok(0, "I", "I", "PRON", "PRP", 1, "nsubj"),
                tok(1, "enjoy", "enjoy", "VERB", "VBP", 1, "ROOT"),
                tok(2, "reading", "read", "VERB", "VBG", 1, "dobj"),
                tok(3, "in", "in", "ADP", "IN", 1, "prep"),
                tok(4, "bed", "bed", "NOUN", "NN", 3, "pobj"),
                tok(5, ".", ".", "PUNCT", ".", 1, "punct"),
            ],
        );

        let participle = analyze_participle(&doc.tokens()[2], &doc).unwrap();
        assert!(participle.roles.contains(&ParticipleRole::Gerund));
    }

    #[test]
    fn absolute_construction_and_perfect() {
        let doc = doc(
            "Having finished, he left.",
            vec![
                tok(0, "Having", "have", "AUX", "VBG", 1, "aux"),
                tok(1, "finished", "finish", "VERB", "VBN", 4, "advcl"),
                tok(2, ",", ",", "PUNCT", ",", 4, "punct"),
                tok(3, "he", "he", "PRON", "PRP", 4, "nsubj"),
                tok(4, "left", "leave", "VERB", "VBD", 4, "ROOT"),
                tok(5, ".", ".", "PUNCT", ".", 4, "punct"),
            ],
        );

        let participle = analyze_participle(&doc.tokens()[1], &doc).unwrap();
        assert!(participle.roles.contains(&ParticipleRole::PerfectTense));
        assert!(participle
            .roles
            .contains(&ParticipleRole::AbsoluteConstruction));
    }

    #[test]
    fn bare_participle_gets_default_role() {
        let doc = doc(
            "Reading calms.",
            vec![
                tok(0, "Reading", "read", "VERB", "VBG", 1, "nsubj"),
                tok(1, "calms", "calm", "VERB", "VBZ", 1, "ROOT"),
                tok(2, ".", ".", "PUNCT", ".", 1, "punct"),
            ],
        );

        // head is a verb but has no prepositional child, so no gerund role
        let participle = analyze_participle(&doc.tokens()[0], &doc).unwrap();
        assert_eq!(participle.roles, vec![ParticipleRole::PresentParticiple]);
    }

    #[test]
    fn non_participle_tags_are_not_applicable() {
        let doc = cat_sitting();
        assert!(analyze_participle(&doc.tokens()[1], &doc).is_none());
    }
}
