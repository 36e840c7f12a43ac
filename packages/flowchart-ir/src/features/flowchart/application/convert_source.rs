//! Convert source use case
//!
//! parse → syntax error policy → walk → flowchart

use std::path::Path;

use tracing::{info, warn};

use crate::config::FlowchartConfig;
use crate::features::flowchart::domain::Flowchart;
use crate::features::flowchart::infrastructure::{TreeWalker, WalkOptions};
use crate::features::parsing::{ParseFileUseCase, ParsedTree, Parser};
use crate::shared::models::{FlowchartError, Result};

/// Convert source use case
pub struct ConvertSourceUseCase<P: Parser> {
    parse: ParseFileUseCase<P>,
    config: FlowchartConfig,
}

impl<P: Parser> ConvertSourceUseCase<P> {
    pub fn new(parser: P, config: FlowchartConfig) -> Self {
        Self {
            parse: ParseFileUseCase::new(parser),
            config,
        }
    }

    pub fn config(&self) -> &FlowchartConfig {
        &self.config
    }

    /// Parse and convert one source text
    pub fn execute(&self, source: &str, file_path: &str) -> Result<Flowchart> {
        let tree = self.parse.execute(source, file_path)?;
        self.convert_tree(&tree)
    }

    /// Read, parse and convert one file
    pub fn execute_path(&self, path: &Path) -> Result<Flowchart> {
        let tree = self.parse.execute_path(path)?;
        self.convert_tree(&tree)
    }

    /// Execute for multiple `(path, source)` pairs
    ///
    /// Each file gets its own graph; a failure in one does not affect others.
    pub fn execute_batch(&self, files: &[(String, String)]) -> Vec<Result<Flowchart>> {
        files
            .iter()
            .map(|(path, source)| self.execute(source, path))
            .collect()
    }

    /// Convert an already parsed tree
    pub fn convert_tree(&self, tree: &ParsedTree) -> Result<Flowchart> {
        if let Some(first) = tree.first_error() {
            if !self.config.allow_syntax_errors {
                return Err(FlowchartError::parse(format!(
                    "Syntax error in the provided code: {} at {}",
                    first.message, first.span
                ))
                .with_file(tree.file_path.clone())
                .with_line(first.span.start_line));
            }
            warn!(
                file = %tree.file_path,
                errors = tree.errors.len(),
                line = first.span.start_line,
                "converting source with syntax errors"
            );
        }

        let chart = TreeWalker::convert_with(&tree.module, WalkOptions::from(&self.config));
        info!(
            file = %tree.file_path,
            nodes = chart.node_count(),
            edges = chart.edge_count(),
            "flowchart built"
        );
        Ok(chart)
    }
}
