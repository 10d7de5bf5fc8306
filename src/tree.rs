//! Assembles the document-wide dependency tree from per-token head relations.

use crate::document::Document;
use crate::types::{DependencyEdge, DependencyNode, DependencyTree};

/// One node per token, one edge per non-root token. A parse without a
/// ROOT-labeled token falls back to token 0 as root instead of failing.
pub fn build_tree(doc: &Document) -> DependencyTree {
    let mut nodes = Vec::with_capacity(doc.tokens().len());
    let mut edges = Vec::new();
    let mut root = None;

    for token in doc.tokens() {
        nodes.push(DependencyNode {
            id: token.id,
            text: token.text.clone(),
            pos: token.pos.clone(),
            dep: token.dep.clone(),
        });

        if root.is_none() && token.dep == "ROOT" {
            root = Some(token.id);
        }

        if !token.is_root() {
            edges.push(DependencyEdge {
                source: token.id,
                target: token.head,
                relation: token.dep.clone(),
            });
        }
    }

    DependencyTree {
        root: root.unwrap_or(0),
        nodes,
        edges,
    }
}
