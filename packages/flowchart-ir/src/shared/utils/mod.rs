//! Shared utilities

pub mod tree_sitter;

pub use self::tree_sitter::{
    find_child_by_kind, named_statements, node_source, node_text, node_to_span,
};
