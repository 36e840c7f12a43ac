//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Parser as TSParser, Tree};

use super::lowering::PythonLowering;
use crate::features::parsing::domain::{ParseError, ParsedTree};
use crate::features::parsing::ports::Parser;
use crate::shared::models::{FlowchartError, Result};
use crate::shared::utils::tree_sitter::node_to_span;

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Python,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
        }
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> ParsedTree {
        let root_node = tree.root_node();
        let module = match self.language {
            TreeSitterLanguage::Python => PythonLowering::new(source).lower_module(&root_node),
        };

        let mut errors = Vec::new();
        if root_node.has_error() {
            self.collect_errors(&root_node, &mut errors);
        }

        ParsedTree::new(
            module,
            source.to_string(),
            file_path.to_string(),
            self.language_name().to_string(),
        )
        .with_errors(errors)
    }

    /// Collect parse errors
    fn collect_errors(&self, node: &tree_sitter::Node, errors: &mut Vec<ParseError>) {
        if node.is_error() || node.is_missing() {
            let message = if node.is_missing() {
                format!("Missing {:?}", node.kind())
            } else {
                "Invalid syntax".to_string()
            };
            errors.push(ParseError {
                message,
                span: node_to_span(node),
            });
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                if child.has_error() || child.is_missing() {
                    self.collect_errors(&child, errors);
                }
            }
        }
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::python()
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| FlowchartError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| FlowchartError::parse("Failed to parse source code").with_file(file_path))?;

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Python => matches!(ext, "py" | "pyi"),
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Python => "python",
        }
    }
}
