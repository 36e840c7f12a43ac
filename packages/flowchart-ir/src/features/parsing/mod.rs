//! Parsing Feature
//!
//! Turns Python source into the statement tree consumed by the flowchart walker.
//!
//! ## Structure
//! - `domain/` - Module, Stmt, ParsedTree models
//! - `ports/` - Parser trait
//! - `application/` - ParseFileUseCase
//! - `infrastructure/` - TreeSitterParser and CST lowering

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::ParseFileUseCase;
pub use domain::{ExceptHandler, ExprKind, Module, ParseError, ParsedTree, Stmt, StmtKind};
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
