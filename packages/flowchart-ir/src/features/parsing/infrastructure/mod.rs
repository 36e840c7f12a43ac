//! Parsing infrastructure (tree-sitter)

pub mod tree_sitter;

pub use self::tree_sitter::{PythonLowering, TreeSitterLanguage, TreeSitterParser};
