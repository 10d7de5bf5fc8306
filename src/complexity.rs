//! Sentence-level and document-level complexity and readability metrics.

use std::collections::{HashMap, HashSet};

use crate::document::Document;
use crate::types::{
    CefrLevel, ComplexityMetrics, Confidence, DependencyTree, FleschKincaid, LexicalDiversity,
    ReadabilityBand, ReadabilityLevel,
};

/// Computes the full complexity aggregate for one document. All metrics are
/// derived from the tokens and the prebuilt dependency tree; nothing is
/// cached across requests.
pub fn calculate_metrics(doc: &Document, tree: &DependencyTree) -> ComplexityMetrics {
    let average_sentence_length = average_sentence_length(doc);
    let lexical_diversity = lexical_diversity(doc);
    let flesch_kincaid = flesch_kincaid(doc);
    let readability_level =
        readability_level(average_sentence_length, &lexical_diversity, &flesch_kincaid);

    ComplexityMetrics {
        average_sentence_length,
        average_dependency_depth: average_dependency_depth(tree),
        complexity_coefficient: complexity_coefficient(average_sentence_length, tree),
        lexical_diversity,
        flesch_kincaid,
        readability_level,
        sentence_count: doc.sentences().len(),
        word_count: doc
            .tokens()
            .iter()
            .filter(|t| !matches!(t.pos.as_str(), "PUNCT" | "SYM"))
            .count(),
        syllable_count: syllable_count(doc),
        character_count: doc.text().chars().count(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn average_sentence_length(doc: &Document) -> f64 {
    if doc.sentences().is_empty() {
        return 0.0;
    }

    let total_words: usize = doc
        .sentences()
        .iter()
        .map(|sentence| {
            doc.sentence_tokens(sentence)
                .iter()
                .filter(|t| !matches!(t.pos.as_str(), "PUNCT" | "SYM"))
                .count()
        })
        .sum();

    total_words as f64 / doc.sentences().len() as f64
}

fn average_dependency_depth(tree: &DependencyTree) -> f64 {
    if tree.nodes.is_empty() {
        return 0.0;
    }

    let parent: HashMap<usize, usize> = tree
        .edges
        .iter()
        .map(|edge| (edge.source, edge.target))
        .collect();

    let total: usize = tree
        .nodes
        .iter()
        .map(|node| node_depth(node.id, tree.root, &parent))
        .sum();

    total as f64 / tree.nodes.len() as f64
}

/// Steps from a node up to the root. The visited set is load-bearing: a
/// malformed parse can contain cycles, and a revisited node terminates the
/// walk instead of looping forever.
fn node_depth(id: usize, root: usize, parent: &HashMap<usize, usize>) -> usize {
    let mut depth = 0;
    let mut current = id;
    let mut visited = HashSet::new();

    loop {
        if current == root || !visited.insert(current) {
            return depth;
        }
        match parent.get(&current) {
            Some(&next) => {
                depth += 1;
                current = next;
            }
            None => return depth,
        }
    }
}

/// The depth proxy here is the maximum incoming-edge count per node, not the
/// true tree depth; the metric's meaning depends on keeping it that way.
fn complexity_coefficient(average_sentence_length: f64, tree: &DependencyTree) -> f64 {
    let max_depth = if tree.edges.is_empty() {
        0
    } else {
        tree.nodes
            .iter()
            .map(|node| tree.edges.iter().filter(|e| e.target == node.id).count())
            .max()
            .unwrap_or(0)
    };

    let complexity = if max_depth > 0 {
        average_sentence_length * max_depth as f64 / 10.0
    } else {
        average_sentence_length / 10.0
    };

    round_to(complexity, 2)
}

fn lexical_diversity(doc: &Document) -> LexicalDiversity {
    let words: Vec<_> = doc.tokens().iter().filter(|t| t.is_word()).collect();

    if words.is_empty() {
        return LexicalDiversity {
            ttr: 0.0,
            unique_words: 0,
            total_words: 0,
            vocabulary_richness: 0.0,
        };
    }

    let unique: HashSet<String> = words
        .iter()
        .filter(|t| !t.lemma.is_empty())
        .map(|t| t.lower_lemma())
        .collect();

    let unique_words = unique.len();
    let total_words = words.len();
    let ttr = unique_words as f64 / total_words as f64;

    LexicalDiversity {
        ttr: round_to(ttr, 3),
        unique_words,
        total_words,
        vocabulary_richness: round_to(ttr * 100.0, 1),
    }
}

fn syllable_count(doc: &Document) -> usize {
    doc.tokens()
        .iter()
        .filter(|t| t.is_word())
        .map(|t| syllables_in(&t.text))
        .sum()
}

/// Counts non-vowel → vowel transitions after dropping one trailing silent
/// "e". Every non-empty word has at least one syllable.
pub(crate) fn syllables_in(word: &str) -> usize {
    let word = word.to_lowercase();
    let word = word.trim_matches(|c| ".,!?;:".contains(c));
    if word.is_empty() {
        return 0;
    }

    let word = word.strip_suffix('e').unwrap_or(word);

    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in word.chars() {
        let is_vowel = "aeiouy".contains(c);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    count.max(1)
}

fn flesch_kincaid(doc: &Document) -> FleschKincaid {
    let unknown = FleschKincaid {
        score: 0.0,
        grade_level: 0.0,
        readability: ReadabilityBand::Unknown,
    };

    if doc.sentences().is_empty() {
        return unknown;
    }

    let total_sentences = doc.sentences().len();
    let total_words = doc.tokens().iter().filter(|t| t.is_word()).count();
    if total_words == 0 {
        return unknown;
    }

    let total_syllables = syllable_count(doc);
    let average_sentence_length = total_words as f64 / total_sentences as f64;
    let syllables_per_word = total_syllables as f64 / total_words as f64;

    let score = (206.835 - 1.015 * average_sentence_length - 84.6 * syllables_per_word)
        .max(0.0)
        .min(100.0);
    let grade_level = (0.39 * average_sentence_length + 11.8 * syllables_per_word - 15.59).max(0.0);

    FleschKincaid {
        score: round_to(score, 2),
        grade_level: round_to(grade_level, 2),
        readability: flesch_band(score),
    }
}

fn flesch_band(score: f64) -> ReadabilityBand {
    if score >= 90.0 {
        ReadabilityBand::VeryEasy
    } else if score >= 80.0 {
        ReadabilityBand::Easy
    } else if score >= 70.0 {
        ReadabilityBand::FairlyEasy
    } else if score >= 60.0 {
        ReadabilityBand::Standard
    } else if score >= 50.0 {
        ReadabilityBand::FairlyDifficult
    } else if score >= 30.0 {
        ReadabilityBand::Difficult
    } else {
        ReadabilityBand::VeryDifficult
    }
}

/// CEFR bands are evaluated in ascending order; anything past the C1 cutoffs
/// lands on C2, which keeps the assignment total.
fn readability_level(
    average_sentence_length: f64,
    diversity: &LexicalDiversity,
    flesch: &FleschKincaid,
) -> ReadabilityLevel {
    let length = average_sentence_length;
    let ttr = diversity.ttr;
    let score = flesch.score;

    let cefr_level = if length < 10.0 && ttr < 0.4 && score > 70.0 {
        CefrLevel::A1
    } else if length < 12.0 && ttr < 0.5 && score > 60.0 {
        CefrLevel::A2
    } else if length < 15.0 && ttr < 0.6 && score > 50.0 {
        CefrLevel::B1
    } else if length < 18.0 && ttr < 0.7 && score > 40.0 {
        CefrLevel::B2
    } else if length < 22.0 && ttr < 0.75 && score > 30.0 {
        CefrLevel::C1
    } else {
        CefrLevel::C2
    };

    ReadabilityLevel {
        cefr_level,
        level_description: level_description(cefr_level).to_string(),
        confidence: confidence(length, ttr, score, cefr_level),
    }
}

fn level_description(level: CefrLevel) -> &'static str {
    match level {
        CefrLevel::A1 => "Beginner - Basic user",
        CefrLevel::A2 => "Elementary - Basic user",
        CefrLevel::B1 => "Intermediate - Independent user",
        CefrLevel::B2 => "Upper Intermediate - Independent user",
        CefrLevel::C1 => "Advanced - Proficient user",
        CefrLevel::C2 => "Proficiency - Proficient user",
    }
}

/// Reference bands per level: (sentence length, TTR, Flesch score).
fn reference_bands(level: CefrLevel) -> ((f64, f64), (f64, f64), (f64, f64)) {
    match level {
        CefrLevel::A1 => ((0.0, 10.0), (0.0, 0.4), (70.0, 100.0)),
        CefrLevel::A2 => ((8.0, 12.0), (0.3, 0.5), (60.0, 80.0)),
        CefrLevel::B1 => ((10.0, 15.0), (0.4, 0.6), (50.0, 70.0)),
        CefrLevel::B2 => ((13.0, 18.0), (0.5, 0.7), (40.0, 60.0)),
        CefrLevel::C1 => ((16.0, 22.0), (0.6, 0.75), (30.0, 50.0)),
        CefrLevel::C2 => ((20.0, 100.0), (0.7, 1.0), (0.0, 40.0)),
    }
}

/// Confidence is how many of the three metrics fall inside the chosen
/// level's reference bands.
fn confidence(length: f64, ttr: f64, score: f64, level: CefrLevel) -> Confidence {
    let (length_band, ttr_band, flesch_band) = reference_bands(level);
    let within = |value: f64, (low, high): (f64, f64)| low <= value && value <= high;

    let matches = within(length, length_band) as u8
        + within(ttr, ttr_band) as u8
        + within(score, flesch_band) as u8;

    match matches {
        3 => Confidence::High,
        2 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::{cat_sat, doc, tok};
    use crate::tree::build_tree;

    #[test]
    fn metrics_for_a_simple_sentence() {
        let doc = cat_sat();
        let tree = build_tree(&doc);
        let metrics = calculate_metrics(&doc, &tree);

        assert!((metrics.average_sentence_length - 6.0).abs() < 1e-9);
        assert!((metrics.average_dependency_depth - 9.0 / 7.0).abs() < 1e-9);
        // max incoming-edge count is 3 (the root), 6.0 * 3 / 10
        assert!((metrics.complexity_coefficient - 1.8).abs() < 1e-9);
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.word_count, 6);
        assert_eq!(metrics.syllable_count, 6);
        assert_eq!(metrics.character_count, 23);
    }

    #[test]
    fn lexical_diversity_counts_unique_lemmas() {
        let doc = cat_sat();
        let metrics = calculate_metrics(&doc, &build_tree(&doc));
        let diversity = metrics.lexical_diversity;

        assert_eq!(diversity.total_words, 6);
        assert_eq!(diversity.unique_words, 5);
        assert!((diversity.ttr - 0.833).abs() < 1e-9);
        assert!((diversity.vocabulary_richness - 83.3).abs() < 1e-9);
    }

    #[test]
    fn flesch_score_is_clamped() {
        let doc = cat_sat();
        let metrics = calculate_metrics(&doc, &build_tree(&doc));
        let flesch = metrics.flesch_kincaid;

        assert!((flesch.score - 100.0).abs() < 1e-9);
        assert!((flesch.grade_level - 0.0).abs() < 1e-9);
        assert_eq!(flesch.readability, ReadabilityBand::VeryEasy);
    }

    #[test]
    fn cefr_level_for_short_repetitive_text() {
        let doc = cat_sat();
        let metrics = calculate_metrics(&doc, &build_tree(&doc));
        let level = metrics.readability_level;

        // short sentence, but the high TTR pushes past every band up to C2
        assert_eq!(level.cefr_level, CefrLevel::C2);
        assert_eq!(level.confidence, Confidence::Low);
        assert_eq!(level.level_description, "Proficiency - Proficient user");
    }

    #[test]
    fn empty_document_yields_zeros_and_unknown() {
        let empty = doc("", vec![]);
        let metrics = calculate_metrics(&empty, &build_tree(&empty));

        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.lexical_diversity.ttr, 0.0);
        assert_eq!(metrics.flesch_kincaid.readability, ReadabilityBand::Unknown);
        assert_eq!(metrics.flesch_kincaid.score, 0.0);
    }

    #[test]
    fn all_punctuation_input_has_zero_diversity() {
        let doc = doc(
            "...",
            vec![
                tok(0, ".", ".", "PUNCT", ".", 0, "ROOT"),
                tok(1, ".", ".", "PUNCT", ".", 0, "punct"),
                tok(2, ".", ".", "PUNCT", ".", 0, "punct"),
            ],
        );
        let metrics = calculate_metrics(&doc, &build_tree(&doc));

        assert_eq!(metrics.lexical_diversity.ttr, 0.0);
        assert_eq!(metrics.lexical_diversity.total_words, 0);
        assert_eq!(metrics.word_count, 0);
    }

    #[test]
    fn depth_walk_survives_cycles() {
        // 1 and 2 point at each other; no ROOT label anywhere
        let doc = doc(
            "a b c",
            vec![
                tok(0, "a", "a", "DET", "DT", 1, "det"),
                tok(1, "b", "b", "NOUN", "NN", 2, "nsubj"),
                tok(2, "c", "c", "VERB", "VBZ", 1, "conj"),
            ],
        );
        let tree = build_tree(&doc);
        let metrics = calculate_metrics(&doc, &tree);

        // the walk terminates; exact values depend on the cycle guard
        assert!(metrics.average_dependency_depth.is_finite());
    }

    #[test]
    fn syllable_estimation() {
        assert_eq!(syllables_in("cat"), 1);
        assert_eq!(syllables_in("quickly"), 2);
        assert_eq!(syllables_in("syllable"), 2);
        assert_eq!(syllables_in("the"), 1);
        assert_eq!(syllables_in("mat."), 1);
        assert_eq!(syllables_in("..."), 0);
    }
}
