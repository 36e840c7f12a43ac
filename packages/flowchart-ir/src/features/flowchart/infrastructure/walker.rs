//! Tree walker
//!
//! Pre-order, depth-first traversal of the statement tree. Each recognized
//! statement becomes one node (two for an `if` with an else-branch, one per
//! handler for `try`) connected to the construct that encloses it. Anything
//! else is skipped together with its nested statements.

use tracing::{debug, trace};

use super::builder::GraphBuilder;
use crate::config::{FlowchartConfig, LayerStrategy};
use crate::features::flowchart::domain::{BranchLabel, Flowchart, NodeId, NodeType};
use crate::features::parsing::domain::{ExceptHandler, ExprKind, Module, Stmt, StmtKind};

/// Walker options that affect classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkOptions {
    pub layer_strategy: LayerStrategy,
    /// Treat `async def`/`async for`/`async with` like their sync forms
    pub include_async: bool,
}

impl From<&FlowchartConfig> for WalkOptions {
    fn from(config: &FlowchartConfig) -> Self {
        Self {
            layer_strategy: config.layer_strategy,
            include_async: config.include_async,
        }
    }
}

/// Converts one statement tree into a flowchart
pub struct TreeWalker {
    builder: GraphBuilder,
    options: WalkOptions,
}

impl TreeWalker {
    pub fn new(options: WalkOptions) -> Self {
        Self {
            builder: GraphBuilder::new(options.layer_strategy),
            options,
        }
    }

    /// Convert a module with default options
    pub fn convert(module: &Module) -> Flowchart {
        Self::convert_with(module, WalkOptions::default())
    }

    pub fn convert_with(module: &Module, options: WalkOptions) -> Flowchart {
        let mut walker = Self::new(options);
        walker.visit_body(&module.body, None, None);
        walker.finish()
    }

    pub fn finish(self) -> Flowchart {
        self.builder.finish()
    }

    /// Visit a statement sequence; every produced node hangs off `parent`
    /// with `edge_label`
    pub fn visit_body(&mut self, body: &[Stmt], parent: Option<NodeId>, edge_label: Option<BranchLabel>) {
        for stmt in body {
            self.visit(stmt, parent, edge_label);
        }
    }

    fn visit(&mut self, stmt: &Stmt, parent: Option<NodeId>, edge_label: Option<BranchLabel>) {
        match &stmt.kind {
            StmtKind::FunctionDef {
                name,
                decorators,
                is_async,
                body,
            } => {
                if *is_async && !self.options.include_async {
                    return self.skip(stmt);
                }
                let details = with_decorators(decorators, &stmt.text);
                let id = self.emit(stmt, parent, edge_label, format!("Function: {}", name), details, NodeType::Function);
                self.visit_body(body, Some(id), None);
            }
            StmtKind::ClassDef {
                name,
                decorators,
                body,
            } => {
                let details = with_decorators(decorators, &stmt.text);
                let id = self.emit(stmt, parent, edge_label, format!("Class: {}", name), details, NodeType::Class);
                self.visit_body(body, Some(id), None);
            }
            StmtKind::If { test, body, orelse } => {
                let id = self.emit(stmt, parent, edge_label, "If", test.clone(), NodeType::Conditional);
                self.visit_body(body, Some(id), Some(BranchLabel::True));
                if !orelse.is_empty() {
                    let else_id = self.builder.new_child(id, "Else", "", NodeType::Conditional, Some(BranchLabel::False));
                    debug!(node = %else_id, parent = %id, "flowchart else branch");
                    self.visit_body(orelse, Some(else_id), None);
                }
            }
            StmtKind::For {
                target,
                iter,
                is_async,
                body,
                ..
            } => {
                if *is_async && !self.options.include_async {
                    return self.skip(stmt);
                }
                let details = format!("{} in {}", target, iter);
                let id = self.emit(stmt, parent, edge_label, "For loop", details, NodeType::Loop);
                self.visit_body(body, Some(id), None);
            }
            StmtKind::While { test, body, .. } => {
                let id = self.emit(stmt, parent, edge_label, "While loop", test.clone(), NodeType::Loop);
                self.visit_body(body, Some(id), None);
            }
            StmtKind::Assign => {
                self.emit(stmt, parent, edge_label, "Assignment", stmt.text.clone(), NodeType::Assignment);
            }
            StmtKind::Expr(ExprKind::Call) => {
                self.emit(stmt, parent, edge_label, "Function call", stmt.text.clone(), NodeType::FunctionCall);
            }
            StmtKind::Expr(ExprKind::ListComp) => {
                self.emit(stmt, parent, edge_label, "List Comprehension", stmt.text.clone(), NodeType::ListComp);
            }
            StmtKind::Return => {
                self.emit(stmt, parent, edge_label, "Return", stmt.text.clone(), NodeType::Return);
            }
            StmtKind::Try { body, handlers, .. } => {
                let id = self.emit(stmt, parent, edge_label, "Try", "", NodeType::TryExcept);
                self.visit_body(body, Some(id), None);
                for handler in handlers {
                    self.visit_handler(handler, id);
                }
            }
            StmtKind::With {
                items,
                is_async,
                body,
            } => {
                if *is_async && !self.options.include_async {
                    return self.skip(stmt);
                }
                // Only the first context manager is shown
                let details = items.first().cloned().unwrap_or_default();
                let id = self.emit(stmt, parent, edge_label, "With", details, NodeType::With);
                self.visit_body(body, Some(id), None);
            }
            StmtKind::Expr(ExprKind::Other) | StmtKind::Other(_) => self.skip(stmt),
        }
    }

    fn visit_handler(&mut self, handler: &ExceptHandler, try_id: NodeId) {
        let type_text = handler.type_text.as_deref().unwrap_or("all");
        let id = self.builder.add_construct(
            Some(try_id),
            format!("Except: {}", type_text),
            "",
            NodeType::TryExcept,
            None,
            Some(handler.span),
        );
        debug!(node = %id, parent = %try_id, "flowchart except handler");
        self.visit_body(&handler.body, Some(id), None);
    }

    fn emit(
        &mut self,
        stmt: &Stmt,
        parent: Option<NodeId>,
        edge_label: Option<BranchLabel>,
        label: impl Into<String>,
        details: impl Into<String>,
        node_type: NodeType,
    ) -> NodeId {
        let id = self
            .builder
            .add_construct(parent, label, details, node_type, edge_label, Some(stmt.span));
        debug!(node = %id, kind = %node_type, line = stmt.span.start_line, "flowchart node");
        id
    }

    fn skip(&self, stmt: &Stmt) {
        trace!(kind = stmt.kind.name(), line = stmt.span.start_line, "skipped statement");
    }
}

/// `@a, @b\n` prefix followed by the definition source
fn with_decorators(decorators: &[String], source: &str) -> String {
    if decorators.is_empty() {
        source.to_string()
    } else {
        format!("@{}\n{}", decorators.join(", @"), source)
    }
}
