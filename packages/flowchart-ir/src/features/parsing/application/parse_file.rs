//! Parse file use case

use std::path::Path;

use crate::features::parsing::domain::ParsedTree;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{FlowchartError, Result};

/// Parse file use case
pub struct ParseFileUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Execute the parse operation
    pub fn execute(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        self.parser.parse(source, file_path)
    }

    /// Read a file from disk and parse it
    pub fn execute_path(&self, path: &Path) -> Result<ParsedTree> {
        let path_str = path.display().to_string();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if !self.parser.supports_extension(ext) {
                tracing::warn!(
                    file = %path_str,
                    ext,
                    language = self.parser.language_name(),
                    "Unrecognized extension, parsing anyway"
                );
            }
        }

        let source = std::fs::read_to_string(path).map_err(|e| {
            FlowchartError::io(format!("Failed to read source: {}", e))
                .with_file(path_str.clone())
                .with_source(e)
        })?;
        self.execute(&source, &path_str)
    }

    /// Execute for multiple files
    pub fn execute_batch(&self, files: &[(String, String)]) -> Vec<Result<ParsedTree>> {
        files
            .iter()
            .map(|(path, source)| self.parser.parse(source, path))
            .collect()
    }
}
