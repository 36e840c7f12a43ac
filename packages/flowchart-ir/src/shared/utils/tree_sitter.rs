//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter syntax nodes: child lookup,
//! source text slicing, and span conversion.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
///
/// # Example
/// ```ignore
/// let block = find_child_by_kind(&except_clause, "block");
/// ```
#[inline]
pub fn find_child_by_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Named children of a block-like node, skipping comments
///
/// Comments are extras in the Python grammar and may appear between the
/// statements of a `module` or `block`.
pub fn named_statements<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let statements = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    statements
}

/// Whether the first token of the node is the `async` keyword
#[inline]
pub fn starts_with_async(node: &Node) -> bool {
    node.child(0).map(|c| c.kind() == "async").unwrap_or(false)
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract raw text content from a node
#[inline]
pub fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract source text of a node with continuation lines dedented
///
/// The first line of a node starts at its own column, but the following lines
/// keep the indentation of the enclosing block. Up to `start_column` leading
/// whitespace bytes are removed from every continuation line so nested
/// constructs read the same as top-level ones.
pub fn node_source(node: &Node, source: &str) -> String {
    dedent_continuation(node_text(node, source), node.start_position().column)
}

/// Remove up to `indent` leading spaces/tabs from every line after the first
pub fn dedent_continuation(text: &str, indent: usize) -> String {
    if indent == 0 || !text.contains('\n') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            let strip = line
                .bytes()
                .take(indent)
                .take_while(|b| *b == b' ' || *b == b'\t')
                .count();
            out.push_str(&line[strip..]);
        } else {
            out.push_str(line);
        }
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}
