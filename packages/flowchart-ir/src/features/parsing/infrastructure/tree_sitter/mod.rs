//! Tree-sitter infrastructure

mod lowering;
mod parser;

pub use lowering::PythonLowering;
pub use parser::{TreeSitterLanguage, TreeSitterParser};
