//! Rule-based grammatical annotation of dependency-parsed English text.
//! # Overview
//!
//! syntagma has the following core abstractions:
//! - A [Document][document::Document] adapting the output of an external
//!   syntactic parser (tokens with POS tags, lemmas, morphology and
//!   dependency edges, plus sentence spans) into an indexed, read-only view.
//! - [analyze][pipeline::analyze] running the rule-based classifiers over a
//!   document and assembling one immutable [Analysis][types::Analysis]
//!   bundle: per-token grammar annotations, the dependency tree, aggregate
//!   statistics, grammar findings, grammar constructions and complexity
//!   metrics.
//!
//! # Examples
//!
//! Analyze an already-parsed document:
//!
//! ```
//! use syntagma::{analyze, Document};
//!
//! let parsed = serde_json::json!({
//!     "text": "Cats sleep.",
//!     "tokens": [
//!         {"text": "Cats", "lemma": "cat", "pos": "NOUN", "tag": "NNS", "head": 1, "dep": "nsubj"},
//!         {"text": "sleep", "lemma": "sleep", "pos": "VERB", "tag": "VBP", "head": 1, "dep": "ROOT"},
//!         {"text": ".", "lemma": ".", "pos": "PUNCT", "tag": ".", "head": 1, "dep": "punct"}
//!     ],
//!     "sentences": [{"start": 0, "end": 3, "text": "Cats sleep."}]
//! });
//!
//! let document = Document::from_parsed(serde_json::from_value(parsed)?);
//! let analysis = analyze(&document);
//!
//! assert_eq!(analysis.tokens.len(), 3);
//! assert!(analysis.tokens[1].grammar.is_some());
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod checker;
pub mod classify;
pub mod complexity;
pub mod constructions;
pub mod document;
pub mod pipeline;
pub mod tree;
pub mod types;
pub(crate) mod utils;

pub use document::{Document, ParsedDocument};
pub use pipeline::analyze;
pub use types::Analysis;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error of a parsed document or an annotation bundle.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
