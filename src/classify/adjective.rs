//! Adjective type classification and comparison-degree analysis.

use crate::types::{
    AdjectiveAnalysis, AdjectiveKind, Degree, DegreeInfo, FormationRules, FormationType, Token,
};

static QUANTITATIVE: &[&str] = &[
    "many", "few", "several", "some", "all", "every", "each", "most",
];
static DISTRIBUTIVE: &[&str] = &["each", "every", "either", "neither"];
static INDEFINITE: &[&str] = &[
    "some", "any", "no", "all", "both", "few", "many", "several",
];
static POSSESSIVE: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

/// Irregular base → comparative pairs.
static IRREGULAR_COMPARATIVES: &[(&str, &str)] = &[
    ("good", "better"),
    ("bad", "worse"),
    ("far", "farther"),
    ("little", "less"),
    ("much", "more"),
    ("many", "more"),
    ("old", "older"),
    ("late", "later"),
];

/// Irregular base → superlative pairs.
static IRREGULAR_SUPERLATIVES: &[(&str, &str)] = &[
    ("good", "best"),
    ("bad", "worst"),
    ("far", "farthest"),
    ("little", "least"),
    ("much", "most"),
    ("many", "most"),
    ("old", "oldest"),
    ("late", "latest"),
];

const VOWELS: &str = "aeiou";

/// Classifies an adjective's type, comparison degree and the rule its
/// comparative/superlative forms follow. Returns `None` for non-ADJ tokens.
pub fn analyze_adjective(token: &Token) -> Option<AdjectiveAnalysis> {
    if token.pos != "ADJ" {
        return None;
    }

    Some(AdjectiveAnalysis {
        kind: classify_kind(token),
        degree: analyze_degree(token),
        formation_rules: formation_rules(token),
    })
}

fn classify_kind(token: &Token) -> AdjectiveKind {
    let lemma = token.lower_lemma();
    let text = token.lower_text();
    let tag = token.tag.as_str();

    if tag == "DT" && matches!(text.as_str(), "this" | "that" | "these" | "those") {
        return AdjectiveKind::Demonstrative;
    }
    if tag == "PRP$" || tag == "POS" || POSSESSIVE.contains(&lemma.as_str()) {
        return AdjectiveKind::Possessive;
    }
    if matches!(text.as_str(), "which" | "what" | "whose") {
        return AdjectiveKind::Interrogative;
    }
    if QUANTITATIVE.contains(&lemma.as_str()) {
        return AdjectiveKind::Quantitative;
    }
    if DISTRIBUTIVE.contains(&lemma.as_str()) {
        return AdjectiveKind::Distributive;
    }
    if INDEFINITE.contains(&lemma.as_str()) {
        return AdjectiveKind::Indefinite;
    }

    AdjectiveKind::Descriptive
}

fn analyze_degree(token: &Token) -> DegreeInfo {
    let text = token.lower_text();
    let lemma = token.lower_lemma();

    let mut info = DegreeInfo {
        degree: Degree::Positive,
        base_form: lemma.clone(),
        is_irregular: false,
    };

    match token.tag.as_str() {
        "JJR" | "RBR" => {
            info.degree = Degree::Comparative;
            if is_irregular(&text, &lemma, IRREGULAR_COMPARATIVES) {
                info.is_irregular = true;
                info.base_form = base_from_table(&text, IRREGULAR_COMPARATIVES);
            } else if let Some(stem) = text.strip_suffix("ier") {
                info.base_form = format!("{}y", stem);
            } else if let Some(stem) = text.strip_suffix("er") {
                info.base_form = stem.to_string();
            }
        }
        "JJS" | "RBS" => {
            info.degree = Degree::Superlative;
            if is_irregular(&text, &lemma, IRREGULAR_SUPERLATIVES) {
                info.is_irregular = true;
                info.base_form = base_from_table(&text, IRREGULAR_SUPERLATIVES);
            } else if let Some(stem) = text.strip_suffix("iest") {
                info.base_form = format!("{}y", stem);
            } else if let Some(stem) = text.strip_suffix("est") {
                info.base_form = stem.to_string();
            }
        }
        _ => {}
    }

    info
}

/// The surface text matching a table value or the lemma matching a key both
/// count as irregular.
fn is_irregular(text: &str, lemma: &str, table: &[(&str, &str)]) -> bool {
    table
        .iter()
        .any(|(base, derived)| *derived == text || *base == lemma)
}

/// Recovers the base form from an irregular table by value, falling back to
/// the surface form itself.
fn base_from_table(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .find(|(_, derived)| *derived == text)
        .map(|(base, _)| base.to_string())
        .unwrap_or_else(|| text.to_string())
}

fn formation_rules(token: &Token) -> FormationRules {
    let lemma = token.lower_lemma();

    if IRREGULAR_COMPARATIVES.iter().any(|(base, _)| *base == lemma)
        || IRREGULAR_SUPERLATIVES.iter().any(|(base, _)| *base == lemma)
    {
        return FormationRules {
            formation_type: FormationType::Irregular,
            rules: vec!["Uses irregular comparative/superlative forms".to_string()],
        };
    }

    let rule = if lemma.chars().count() <= 3 {
        "Short adjective: add -er/-est"
    } else if lemma.ends_with('y') {
        "Ends in -y: change to -ier/-iest"
    } else if lemma.ends_with('e') {
        "Ends in -e: add -r/-st"
    } else if ends_in_cvc(&lemma) {
        "Consonant doubling: double final consonant before -er/-est"
    } else if lemma.chars().count() >= 3 && vowel_count(&lemma) >= 2 {
        "Multi-syllable: use more/most"
    } else {
        "Regular: add -er/-est"
    };

    FormationRules {
        formation_type: FormationType::Regular,
        rules: vec![rule.to_string()],
    }
}

/// Consonant-vowel-consonant at the end of the word asks for consonant
/// doubling ("big" → "bigger").
fn ends_in_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 {
        return false;
    }

    let vowel = |c: char| VOWELS.contains(c);
    !vowel(chars[chars.len() - 1]) && vowel(chars[chars.len() - 2]) && !vowel(chars[chars.len() - 3])
}

fn vowel_count(word: &str) -> usize {
    word.chars().filter(|c| VOWELS.contains(*c)).count()
}
