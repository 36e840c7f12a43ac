//! Statement-level syntax tree
//!
//! The lowered form of a Python module that the flowchart walker consumes.
//! Only the structure the walker needs survives lowering: statement kinds,
//! nested statement sequences, and source text carried from spans.

use crate::shared::models::Span;

/// A parsed module: the top-level statement sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub body: Vec<Stmt>,
}

impl Module {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// One statement with its source text and location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,

    /// Source text of the whole statement, continuation lines dedented.
    /// For decorated definitions this excludes the decorators.
    pub text: String,

    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Statement without a meaningful location (hand-built trees, tests)
    pub fn synthetic(kind: StmtKind, text: impl Into<String>) -> Self {
        Self::new(kind, text, Span::zero())
    }
}

/// Statement kind
///
/// Closed set of the constructs the walker distinguishes. Everything else
/// lowers to `Other` with the grammar's node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    FunctionDef {
        name: String,
        /// Decorator expressions without the leading `@`
        decorators: Vec<String>,
        is_async: bool,
        body: Vec<Stmt>,
    },
    ClassDef {
        name: String,
        decorators: Vec<String>,
        body: Vec<Stmt>,
    },
    /// `if`/`elif`/`else`; an `elif` chain is a nested `If` as the only
    /// statement of `orelse`
    If {
        test: String,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    For {
        target: String,
        iter: String,
        is_async: bool,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    While {
        test: String,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    /// Plain assignment, including chained (`a = b = 1`) and unpacking forms
    Assign,
    /// Expression used as a statement
    Expr(ExprKind),
    Return,
    Try {
        body: Vec<Stmt>,
        handlers: Vec<ExceptHandler>,
        orelse: Vec<Stmt>,
        finalbody: Vec<Stmt>,
    },
    With {
        /// Source text of each context-manager item, e.g. `open(p) as f`
        items: Vec<String>,
        is_async: bool,
        body: Vec<Stmt>,
    },
    /// Any other statement (`pass`, `import`, `x += 1`, `raise`, ...)
    Other(String),
}

impl StmtKind {
    pub fn name(&self) -> &str {
        match self {
            StmtKind::FunctionDef { .. } => "function_def",
            StmtKind::ClassDef { .. } => "class_def",
            StmtKind::If { .. } => "if",
            StmtKind::For { .. } => "for",
            StmtKind::While { .. } => "while",
            StmtKind::Assign => "assign",
            StmtKind::Expr(_) => "expr",
            StmtKind::Return => "return",
            StmtKind::Try { .. } => "try",
            StmtKind::With { .. } => "with",
            StmtKind::Other(kind) => kind,
        }
    }
}

/// Top-level shape of an expression statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprKind {
    Call,
    ListComp,
    Other,
}

/// One `except` clause of a try block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptHandler {
    /// Declared exception type text; `None` for a bare `except:`
    pub type_text: Option<String>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl ExceptHandler {
    pub fn new(type_text: Option<String>, body: Vec<Stmt>, span: Span) -> Self {
        Self {
            type_text,
            body,
            span,
        }
    }
}
