//! Rule-based grammar checks: subject-verb agreement, article usage and
//! tense consistency.

use crate::document::Document;
use crate::types::{AnnotatedToken, FindingKind, GrammarFinding, Severity, Tense, Token};

/// Runs all checks over one document. Tense consistency reads the grammar
/// annotations already derived for the tokens instead of re-deriving them.
pub fn check_grammar(doc: &Document, tokens: &[AnnotatedToken]) -> Vec<GrammarFinding> {
    let mut findings = Vec::new();
    findings.extend(check_subject_verb_agreement(doc));
    findings.extend(check_article_usage(doc));
    findings.extend(check_tense_consistency(doc, tokens));
    findings
}

fn check_subject_verb_agreement(doc: &Document) -> Vec<GrammarFinding> {
    let mut findings = Vec::new();

    for token in doc.tokens() {
        if token.pos != "VERB" || token.dep != "ROOT" {
            continue;
        }

        let subject = match doc
            .children(token.id)
            .find(|child| child.dep == "nsubj" || child.dep == "nsubjpass")
        {
            Some(subject) => subject,
            None => continue,
        };

        let subject_number = nominal_number(subject);
        let verb_number = verb_number(token);

        if let (Some(subject_number), Some(verb_number)) = (subject_number, verb_number) {
            if subject_number != verb_number {
                findings.push(GrammarFinding {
                    kind: FindingKind::SubjectVerbAgreement,
                    severity: Severity::Error,
                    message: format!(
                        "Subject-verb disagreement: '{}' ({}) with '{}' ({})",
                        subject.text, subject_number, token.text, verb_number
                    ),
                    token_id: Some(token.id),
                    subject_id: Some(subject.id),
                    sentence: None,
                    suggestion: Some(suggest_verb_correction(token, subject_number)),
                });
            }
        }
    }

    findings
}

/// Number of a nominal from the morphology, with a tag heuristic fallback.
fn nominal_number(token: &Token) -> Option<&'static str> {
    if let Some(number) = morph_number(token) {
        return Some(number);
    }

    match token.tag.as_str() {
        "NNS" | "NNPS" => Some("plural"),
        "NN" | "NNP" => Some("singular"),
        _ => None,
    }
}

fn verb_number(token: &Token) -> Option<&'static str> {
    if let Some(number) = morph_number(token) {
        return Some(number);
    }

    match token.tag.as_str() {
        "VBZ" => Some("singular"),
        "VBP" | "VB" => Some("plural"),
        _ => None,
    }
}

fn morph_number(token: &Token) -> Option<&'static str> {
    match token.morph("Number") {
        Some(value) if value.eq_ignore_ascii_case("sing") => Some("singular"),
        Some(value) if value.eq_ignore_ascii_case("plur") => Some("plural"),
        _ => None,
    }
}

fn suggest_verb_correction(verb: &Token, expected_number: &str) -> String {
    if expected_number == "singular" && verb.tag == "VBP" {
        format!("Consider using '{}s' (3rd person singular)", verb.lemma)
    } else if expected_number == "plural" && verb.tag == "VBZ" {
        format!("Consider using '{}' (plural form)", verb.lemma)
    } else {
        "Check subject-verb agreement".to_string()
    }
}

fn check_article_usage(doc: &Document) -> Vec<GrammarFinding> {
    let mut findings = Vec::new();

    for token in doc.tokens() {
        if token.pos != "NOUN" || !matches!(token.tag.as_str(), "NN" | "NNS") {
            continue;
        }

        // a determiner within the three preceding tokens counts
        let has_article = doc
            .window(token.id, 3, 0)
            .iter()
            .any(|t| t.tag == "DT" || t.tag == "PDT");

        if has_article
            || is_proper_noun(token)
            || is_plural_generic(token)
            || is_part_of_compound(token, doc)
        {
            continue;
        }

        findings.push(GrammarFinding {
            kind: FindingKind::ArticleUsage,
            severity: Severity::Warning,
            message: format!("Missing article before '{}'", token.text),
            token_id: Some(token.id),
            subject_id: None,
            sentence: None,
            suggestion: Some(format!(
                "Consider adding 'a', 'an', or 'the' before '{}'",
                token.text
            )),
        });
    }

    findings
}

fn is_proper_noun(token: &Token) -> bool {
    matches!(token.tag.as_str(), "NNP" | "NNPS")
}

/// Bare plurals are legitimate in generic statements, so they never warn.
fn is_plural_generic(token: &Token) -> bool {
    token.tag == "NNS"
}

fn is_part_of_compound(token: &Token, doc: &Document) -> bool {
    if token.dep == "compound" {
        return true;
    }

    let head = doc.head_of(token);
    head.pos == "NOUN" && matches!(token.dep.as_str(), "compound" | "nmod")
}

/// Mixed past and present within one sentence can be legitimate
/// (conditionals, reported speech), so this is a warning, not an error.
fn check_tense_consistency(doc: &Document, tokens: &[AnnotatedToken]) -> Vec<GrammarFinding> {
    let mut findings = Vec::new();

    for sentence in doc.sentences() {
        let verbs: Vec<&Token> = doc
            .sentence_tokens(sentence)
            .iter()
            .filter(|t| t.pos == "VERB")
            .collect();
        if verbs.len() < 2 {
            continue;
        }

        let tenses: Vec<Tense> = verbs
            .iter()
            .filter_map(|verb| {
                tokens
                    .get(verb.id)
                    .and_then(|t| t.grammar.as_ref())
                    .and_then(|g| g.tense)
            })
            .collect();
        if tenses.len() < 2 {
            continue;
        }

        let has_past = tenses.contains(&Tense::Past);
        let has_present = tenses.contains(&Tense::Present);

        if has_past && has_present {
            findings.push(GrammarFinding {
                kind: FindingKind::TenseConsistency,
                severity: Severity::Warning,
                message: "Mixed tenses in sentence: past and present tenses found".to_string(),
                token_id: None,
                subject_id: None,
                sentence: Some(sentence.text.clone()),
                suggestion: Some("Check if tense consistency is intentional".to_string()),
            });
        }
    }

    findings
}
