mod parsed_tree;
mod syntax_tree;

pub use parsed_tree::{ParseError, ParsedTree};
pub use syntax_tree::{ExceptHandler, ExprKind, Module, Stmt, StmtKind};
