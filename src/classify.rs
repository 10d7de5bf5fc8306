//! Per-token rule-based classifiers.
//!
//! Each classifier is a pure function from a token (plus the document
//! context) to an optional annotation. A classifier invoked on a token of the
//! wrong part of speech returns `None` — "not applicable" is distinct from
//! "computed but empty". The rules are heuristic and may disagree with the
//! parser or with each other; that is a known limitation, not a bug to fix
//! here.

pub mod adjective;
pub mod adverb;
pub mod grammar;
pub mod participle;
pub mod preposition;
pub mod verb;
