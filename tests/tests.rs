use quickcheck_macros::quickcheck;

use syntagma::types::{
    Aspect, ParticipleRole, ReadabilityBand, Sentence, Tense, Token, Voice,
};
use syntagma::{analyze, Document};

fn tok(
    id: usize,
    text: &str,
    lemma: &str,
    pos: &str,
    tag: &str,
    head: usize,
    dep: &str,
) -> Token {
    Token {
        id,
        text: text.into(),
        lemma: lemma.into(),
        pos: pos.into(),
        tag: tag.into(),
        morphology: None,
        head,
        dep: dep.into(),
    }
}

fn single_sentence(text: &str, tokens: Vec<Token>) -> Document {
    let sentences = vec![Sentence {
        start: 0,
        end: tokens.len(),
        text: text.into(),
    }];
    Document::new(text.into(), tokens, sentences)
}

fn cat_sat() -> Document {
    single_sentence(
        "The cat sat on the mat.",
        vec![
            tok(0, "The", "the", "DET", "DT", 1, "det"),
            tok(1, "cat", "cat", "NOUN", "NN", 2, "nsubj"),
            tok(2, "sat", "sit", "VERB", "VBD", 2, "ROOT"),
            tok(3, "on", "on", "ADP", "IN", 2, "prep"),
            tok(4, "the", "the", "DET", "DT", 5, "det"),
            tok(5, "mat", "mat", "NOUN", "NN", 3, "pobj"),
            tok(6, ".", ".", "PUNCT", ".", 2, "punct"),
        ],
    )
}

fn cat_sitting() -> Document {
    single_sentence(
        "The cat is sitting on the mat.",
        vec![
            tok(0, "The", "the", "DET", "DT", 1, "det"),
            tok(1, "cat", "cat", "NOUN", "NN", 3, "nsubj"),
            tok(2, "is", "be", "AUX", "VBZ", 3, "aux"),
            tok(3, "sitting", "sit", "VERB", "VBG", 3, "ROOT"),
            tok(4, "on", "on", "ADP", "IN", 3, "prep"),
            tok(5, "the", "the", "DET", "DT", 6, "det"),
            tok(6, "mat", "mat", "NOUN", "NN", 4, "pobj"),
            tok(7, ".", ".", "PUNCT", ".", 3, "punct"),
        ],
    )
}

fn cat_was_sat() -> Document {
    single_sentence(
        "The cat was sat on the mat.",
        vec![
            tok(0, "The", "the", "DET", "DT", 1, "det"),
            tok(1, "cat", "cat", "NOUN", "NN", 3, "nsubjpass"),
            tok(2, "was", "be", "AUX", "VBD", 3, "auxpass"),
            tok(3, "sat", "sit", "VERB", "VBN", 3, "ROOT"),
            tok(4, "on", "on", "ADP", "IN", 3, "prep"),
            tok(5, "the", "the", "DET", "DT", 6, "det"),
            tok(6, "mat", "mat", "NOUN", "NN", 4, "pobj"),
            tok(7, ".", ".", "PUNCT", ".", 3, "punct"),
        ],
    )
}

/// One NOUN token per non-empty word, all headed by the first token.
fn doc_from_words(words: &[String]) -> Document {
    let words: Vec<&String> = words.iter().filter(|w| !w.is_empty()).collect();

    let tokens: Vec<Token> = words
        .iter()
        .enumerate()
        .map(|(id, word)| Token {
            id,
            text: (*word).clone(),
            lemma: word.to_lowercase(),
            pos: "NOUN".into(),
            tag: "NN".into(),
            morphology: None,
            head: 0,
            dep: if id == 0 { "ROOT".into() } else { "nsubj".into() },
        })
        .collect();

    let text = words
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let sentences = if tokens.is_empty() {
        Vec::new()
    } else {
        vec![Sentence {
            start: 0,
            end: tokens.len(),
            text: text.clone(),
        }]
    };

    Document::new(text, tokens, sentences)
}

#[test]
fn tree_counts_match_token_count() {
    let analysis = analyze(&cat_sat());
    let tree = &analysis.dependency_tree;

    assert_eq!(tree.nodes.len(), analysis.tokens.len());
    assert_eq!(tree.edges.len(), analysis.tokens.len() - 1);
    assert_eq!(tree.root, 2);
}

#[test]
fn missing_root_falls_back_to_token_zero() {
    let doc = single_sentence(
        "no root here",
        vec![
            tok(0, "no", "no", "DET", "DT", 0, "det"),
            tok(1, "root", "root", "NOUN", "NN", 0, "nsubj"),
            tok(2, "here", "here", "ADV", "RB", 1, "advmod"),
        ],
    );
    let analysis = analyze(&doc);
    let tree = &analysis.dependency_tree;

    assert_eq!(tree.root, 0);
    assert!(tree.edges.iter().all(|e| e.source != 0));
    assert_eq!(tree.edges.len(), 2);
}

#[test]
fn sentence_spans_partition_the_document() {
    let tokens = vec![
        tok(0, "It", "it", "PRON", "PRP", 1, "nsubj"),
        tok(1, "rained", "rain", "VERB", "VBD", 1, "ROOT"),
        tok(2, ".", ".", "PUNCT", ".", 1, "punct"),
        tok(3, "She", "she", "PRON", "PRP", 4, "nsubj"),
        tok(4, "left", "leave", "VERB", "VBD", 4, "ROOT"),
        tok(5, ".", ".", "PUNCT", ".", 4, "punct"),
    ];
    let sentences = vec![
        Sentence {
            start: 0,
            end: 3,
            text: "It rained.".into(),
        },
        Sentence {
            start: 3,
            end: 6,
            text: "She left.".into(),
        },
    ];
    let doc = Document::new("It rained. She left.".into(), tokens, sentences);
    let analysis = analyze(&doc);

    assert_eq!(analysis.sentences[0].start, 0);
    for pair in analysis.sentences.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert!(pair[0].start <= pair[1].start);
    }
    assert_eq!(
        analysis.sentences.last().unwrap().end,
        analysis.tokens.len()
    );
}

#[test]
fn non_verbs_get_no_grammar_annotation() {
    let analysis = analyze(&cat_sat());

    for token in analysis.tokens.iter().filter(|t| t.pos != "VERB") {
        assert!(
            token.grammar.is_none(),
            "token '{}' is not a verb",
            token.text
        );
    }
}

#[test]
fn past_simple_active_for_sat() {
    let analysis = analyze(&cat_sat());
    let grammar = analysis.tokens[2].grammar.as_ref().unwrap();

    assert_eq!(grammar.tense, Some(Tense::Past));
    assert_eq!(grammar.aspect, Some(Aspect::Simple));
    assert_eq!(grammar.voice, Some(Voice::Active));
}

#[test]
fn progressive_aspect_and_participle_role_for_sitting() {
    let analysis = analyze(&cat_sitting());
    let sitting = &analysis.tokens[3];

    assert_eq!(
        sitting.grammar.as_ref().unwrap().aspect,
        Some(Aspect::Progressive)
    );
    assert!(sitting
        .participle
        .as_ref()
        .unwrap()
        .roles
        .contains(&ParticipleRole::ProgressiveTense));
}

#[test]
fn passive_voice_detected_for_was_sat() {
    let analysis = analyze(&cat_was_sat());

    let passive_verbs: Vec<_> = analysis
        .tokens
        .iter()
        .filter(|t| {
            t.grammar
                .as_ref()
                .map_or(false, |g| g.voice == Some(Voice::Passive))
        })
        .collect();

    assert!(!passive_verbs.is_empty());
}

#[test]
fn analysis_is_idempotent() {
    let doc = cat_sitting();

    let first = analyze(&doc);
    let second = analyze(&doc);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn pos_distribution_covers_every_token() {
    let analysis = analyze(&cat_sat());
    let statistics = analysis.statistics.unwrap();

    let total: usize = statistics.pos_distribution.values().sum();
    assert_eq!(total, analysis.tokens.len());
}

#[test]
fn fewer_tokens_in_means_fewer_tokens_out() {
    let full = analyze(&cat_sat());

    let truncated_doc = single_sentence(
        "The cat sat",
        vec![
            tok(0, "The", "the", "DET", "DT", 1, "det"),
            tok(1, "cat", "cat", "NOUN", "NN", 2, "nsubj"),
            tok(2, "sat", "sit", "VERB", "VBD", 2, "ROOT"),
        ],
    );
    let truncated = analyze(&truncated_doc);

    assert!(truncated.tokens.len() <= full.tokens.len());
}

#[quickcheck]
fn ttr_is_always_bounded(words: Vec<String>) -> bool {
    let doc = doc_from_words(&words);
    let analysis = analyze(&doc);
    let ttr = analysis.complexity_metrics.unwrap().lexical_diversity.ttr;

    (0.0..=1.0).contains(&ttr)
}

#[quickcheck]
fn ttr_is_one_for_all_unique_lemmas(words: Vec<String>) -> bool {
    let doc = doc_from_words(&words);
    if doc.tokens().is_empty() {
        return true;
    }

    let lemmas: std::collections::HashSet<String> =
        doc.tokens().iter().map(|t| t.lemma.clone()).collect();
    if lemmas.len() != doc.tokens().len() {
        return true;
    }

    let analysis = analyze(&doc);
    (analysis.complexity_metrics.unwrap().lexical_diversity.ttr - 1.0).abs() < 1e-9
}

#[quickcheck]
fn flesch_score_and_grade_are_clamped(words: Vec<String>) -> bool {
    let doc = doc_from_words(&words);
    let metrics = analyze(&doc).complexity_metrics.unwrap();
    let flesch = metrics.flesch_kincaid;

    (0.0..=100.0).contains(&flesch.score) && flesch.grade_level >= 0.0
}

#[quickcheck]
fn cefr_assignment_is_deterministic(words: Vec<String>) -> bool {
    let doc = doc_from_words(&words);

    let first = analyze(&doc).complexity_metrics.unwrap().readability_level;
    let second = analyze(&doc).complexity_metrics.unwrap().readability_level;

    first == second
}

#[test]
fn empty_input_produces_an_empty_but_complete_bundle() {
    let doc = Document::new(String::new(), vec![], vec![]);
    let analysis = analyze(&doc);

    assert!(analysis.tokens.is_empty());
    assert!(analysis.sentences.is_empty());
    assert_eq!(analysis.dependency_tree.nodes.len(), 0);

    let metrics = analysis.complexity_metrics.unwrap();
    assert_eq!(metrics.word_count, 0);
    assert_eq!(metrics.flesch_kincaid.readability, ReadabilityBand::Unknown);
}
