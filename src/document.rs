//! Normalization of the external parser's output into the document
//! representation the classifiers work on, plus the per-request lookup index
//! over it.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::{Morphology, Sentence, Token};

/// Per-token bundle as produced by the external parser, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedToken {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    #[serde(default)]
    pub morphology: Option<Morphology>,
    /// Id of the syntactic governor; equals the own position for the root.
    pub head: usize,
    pub dep: String,
}

/// A full parser response: raw text, token bundles and the sentence spans
/// partitioning them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedDocument {
    #[serde(default)]
    pub text: String,
    pub tokens: Vec<ParsedToken>,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

/// An adapted document together with the precomputed parent → children index
/// used by all cross-token lookups. Built once per request, never mutated.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
    children: Vec<Vec<usize>>,
}

impl Document {
    pub fn new(text: String, mut tokens: Vec<Token>, sentences: Vec<Sentence>) -> Self {
        let len = tokens.len();

        // an unresolvable head must not fail the request; treat the token as
        // its own governor
        for token in tokens.iter_mut() {
            if token.head >= len {
                warn!(
                    "token {} references out-of-range head {}, treating as root",
                    token.id, token.head
                );
                token.head = token.id;
            }
        }

        let mut children = vec![Vec::new(); len];
        for token in &tokens {
            if !token.is_root() {
                children[token.head].push(token.id);
            }
        }

        Document {
            text,
            tokens,
            sentences,
            children,
        }
    }

    pub fn from_parsed(parsed: ParsedDocument) -> Self {
        let tokens = parsed
            .tokens
            .into_iter()
            .enumerate()
            .map(|(id, token)| Token {
                id,
                text: token.text,
                lemma: token.lemma,
                pos: token.pos,
                tag: token.tag,
                morphology: token.morphology,
                head: token.head,
                dep: token.dep,
            })
            .collect();

        Document::new(parsed.text, tokens, parsed.sentences)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn token(&self, id: usize) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// The governor of a token; the token itself if it is the root.
    pub fn head_of(&self, token: &Token) -> &Token {
        &self.tokens[token.head]
    }

    /// Children of a token in document order.
    pub fn children(&self, id: usize) -> impl Iterator<Item = &Token> + '_ {
        self.children
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&child| &self.tokens[child])
    }

    /// The sentence span containing the given token id.
    pub fn sentence_at(&self, id: usize) -> Option<&Sentence> {
        self.sentences.iter().find(|sentence| sentence.contains(id))
    }

    /// Tokens of one sentence span, clipped to the document bounds. A
    /// malformed span yields an empty slice instead of panicking.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        let start = sentence.start.min(self.tokens.len());
        let end = sentence.end.min(self.tokens.len()).max(start);
        &self.tokens[start..end]
    }

    /// A window of tokens around `id`, clipped to the document bounds.
    /// The token itself is part of the window.
    pub fn window(&self, id: usize, before: usize, after: usize) -> &[Token] {
        let start = id.saturating_sub(before);
        let end = (id + after).min(self.tokens.len());
        &self.tokens[start..end]
    }
}

impl From<ParsedDocument> for Document {
    fn from(parsed: ParsedDocument) -> Self {
        Document::from_parsed(parsed)
    }
}
