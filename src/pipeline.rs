//! Sequences the classifiers over one parsed document and assembles the
//! annotation bundle.

use crate::classify::{adjective, adverb, grammar, participle, preposition, verb};
use crate::complexity;
use crate::constructions;
use crate::checker;
use crate::document::Document;
use crate::tree;
use crate::types::{
    Analysis, AnnotatedToken, Dependency, ParticipleKind, Statistics, Token, VerbKind,
};

/// Runs the full analysis over one adapted document.
///
/// Classification is per token and pure; the later stages (checker,
/// constructions, complexity) only read the annotations created here, they
/// never mutate them. Running this twice on the same input yields identical
/// bundles.
pub fn analyze(doc: &Document) -> Analysis {
    let tokens: Vec<AnnotatedToken> = doc
        .tokens()
        .iter()
        .map(|token| annotate_token(token, doc))
        .collect();

    let dependency_tree = tree::build_tree(doc);
    let statistics = collect_statistics(&tokens);
    let grammar_check = checker::check_grammar(doc, &tokens);
    let grammar_constructions = constructions::extract_constructions(doc, &tokens);
    let nested_prepositional_phrases = preposition::find_nested_phrases(doc);
    let complexity_metrics = complexity::calculate_metrics(doc, &dependency_tree);

    Analysis {
        tokens,
        sentences: doc.sentences().to_vec(),
        dependency_tree,
        statistics: Some(statistics),
        grammar_check: Some(grammar_check),
        grammar_constructions: Some(grammar_constructions),
        nested_prepositional_phrases: Some(nested_prepositional_phrases),
        complexity_metrics: Some(complexity_metrics),
    }
}

fn annotate_token(token: &Token, doc: &Document) -> AnnotatedToken {
    let head = if token.is_root() {
        None
    } else {
        Some(token.head)
    };

    AnnotatedToken {
        id: token.id,
        text: token.text.clone(),
        lemma: token.lemma.clone(),
        pos: token.pos.clone(),
        tag: token.tag.clone(),
        morphology: token.morphology.clone(),
        dependency: Dependency {
            dep: token.dep.clone(),
            head,
            head_text: head.map(|h| doc.tokens()[h].text.clone()),
        },
        grammar: grammar::analyze_grammar(token, doc),
        verb_type: verb::analyze_verb_type(token, doc),
        participle: participle::analyze_participle(token, doc),
        adverb: adverb::classify_adverb(token, doc),
        adjective: adjective::analyze_adjective(token),
        preposition_analysis: preposition::analyze_preposition(token, doc),
    }
}

fn collect_statistics(tokens: &[AnnotatedToken]) -> Statistics {
    let mut statistics = Statistics::default();

    for token in tokens {
        *statistics
            .pos_distribution
            .entry(token.pos.clone())
            .or_insert(0) += 1;

        if let Some(participle) = &token.participle {
            statistics.participles.total += 1;
            match participle.kind {
                ParticipleKind::Present => statistics.participles.present += 1,
                ParticipleKind::Past => statistics.participles.past += 1,
            }
        }

        if let Some(verb_type) = &token.verb_type {
            statistics.verbs.total += 1;
            match verb_type.kind {
                VerbKind::Modal => statistics.verbs.modal += 1,
                VerbKind::Auxiliary => statistics.verbs.auxiliary += 1,
                VerbKind::Phrasal => statistics.verbs.phrasal += 1,
                VerbKind::Regular => statistics.verbs.regular += 1,
            }
        }

        if let Some(adverb) = &token.adverb {
            statistics.adverbs.total += 1;
            *statistics
                .adverbs
                .by_semantic
                .entry(adverb.semantic.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    statistics
}
