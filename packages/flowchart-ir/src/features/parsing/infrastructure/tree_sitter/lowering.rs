//! Lowering from the tree-sitter Python CST to the statement tree
//!
//! Mirrors the shape of Python's own AST where the two grammars disagree:
//! assignments and calls are wrapped in `expression_statement`, decorated
//! definitions carry their decorators outside the definition node, and
//! `elif` clauses become a nested `If` in the `orelse` of the previous one.

use tree_sitter::Node;

use crate::features::parsing::domain::{ExceptHandler, ExprKind, Module, Stmt, StmtKind};
use crate::shared::utils::tree_sitter::{
    dedent_continuation, find_child_by_kind, named_statements, node_source, node_text, node_to_span,
    starts_with_async,
};

/// Lowers tree-sitter nodes of one source file
pub struct PythonLowering<'s> {
    source: &'s str,
}

impl<'s> PythonLowering<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    /// Lower the `module` root node
    pub fn lower_module(&self, root: &Node) -> Module {
        Module::new(self.lower_block(root))
    }

    /// Lower every statement of a `module` or `block` node
    fn lower_block(&self, node: &Node) -> Vec<Stmt> {
        named_statements(node)
            .iter()
            .map(|stmt| self.lower_stmt(stmt))
            .collect()
    }

    /// Lower the statements of a field that holds a block, if present
    fn lower_field_block(&self, node: &Node, field: &str) -> Vec<Stmt> {
        node.child_by_field_name(field)
            .or_else(|| find_child_by_kind(node, "block"))
            .map(|block| self.lower_block(&block))
            .unwrap_or_default()
    }

    fn lower_stmt(&self, node: &Node) -> Stmt {
        match node.kind() {
            "function_definition" => self.lower_function(node, Vec::new()),
            "class_definition" => self.lower_class(node, Vec::new()),
            "decorated_definition" => self.lower_decorated(node),
            "if_statement" => self.lower_if(node),
            "for_statement" => self.lower_for(node),
            "while_statement" => self.lower_while(node),
            "expression_statement" => self.stmt(node, self.expression_statement_kind(node)),
            "return_statement" => self.stmt(node, StmtKind::Return),
            "try_statement" => self.lower_try(node),
            "with_statement" => self.lower_with(node),
            other => self.stmt(node, StmtKind::Other(other.to_string())),
        }
    }

    fn stmt(&self, node: &Node, kind: StmtKind) -> Stmt {
        Stmt::new(kind, self.text(node), node_to_span(node))
    }

    fn text(&self, node: &Node) -> String {
        node_source(node, self.source)
    }

    /// Text of `part`, with continuation lines dedented by the column of
    /// the statement that contains it
    fn text_within(&self, part: &Node, enclosing: &Node) -> String {
        dedent_continuation(node_text(part, self.source), enclosing.start_position().column)
    }

    fn field_text(&self, node: &Node, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|n| self.text_within(&n, node))
            .unwrap_or_default()
    }

    // ========================================
    // Definitions
    // ========================================

    fn lower_function(&self, node: &Node, decorators: Vec<String>) -> Stmt {
        let kind = StmtKind::FunctionDef {
            name: self.field_text(node, "name"),
            decorators,
            is_async: starts_with_async(node),
            body: self.lower_field_block(node, "body"),
        };
        self.stmt(node, kind)
    }

    fn lower_class(&self, node: &Node, decorators: Vec<String>) -> Stmt {
        let kind = StmtKind::ClassDef {
            name: self.field_text(node, "name"),
            decorators,
            body: self.lower_field_block(node, "body"),
        };
        self.stmt(node, kind)
    }

    /// `@decorator` lines followed by a function or class definition
    fn lower_decorated(&self, node: &Node) -> Stmt {
        let mut cursor = node.walk();
        let decorators: Vec<String> = node
            .children(&mut cursor)
            .filter(|child| child.kind() == "decorator")
            .filter_map(|decorator| decorator.named_child(0))
            .map(|expr| self.text_within(&expr, node))
            .collect();

        match node.child_by_field_name("definition") {
            Some(def) if def.kind() == "function_definition" => self.lower_function(&def, decorators),
            Some(def) if def.kind() == "class_definition" => self.lower_class(&def, decorators),
            _ => self.stmt(node, StmtKind::Other(node.kind().to_string())),
        }
    }

    // ========================================
    // Control flow
    // ========================================

    fn lower_if(&self, node: &Node) -> Stmt {
        let mut cursor = node.walk();
        let alternatives: Vec<Node> = node
            .children(&mut cursor)
            .filter(|child| matches!(child.kind(), "elif_clause" | "else_clause"))
            .collect();

        let kind = StmtKind::If {
            test: self.field_text(node, "condition"),
            body: self.lower_field_block(node, "consequence"),
            orelse: self.lower_alternatives(&alternatives),
        };
        self.stmt(node, kind)
    }

    /// `elif a: ... elif b: ... else: ...` → `orelse = [If(a, orelse = [If(b, orelse = ...)])]`
    fn lower_alternatives(&self, alternatives: &[Node]) -> Vec<Stmt> {
        let Some((first, rest)) = alternatives.split_first() else {
            return Vec::new();
        };

        match first.kind() {
            "elif_clause" => {
                let kind = StmtKind::If {
                    test: self.field_text(first, "condition"),
                    body: self.lower_field_block(first, "consequence"),
                    orelse: self.lower_alternatives(rest),
                };
                vec![self.stmt(first, kind)]
            }
            "else_clause" => self.lower_field_block(first, "body"),
            _ => Vec::new(),
        }
    }

    /// `else:` clause of a loop or try block
    fn lower_else_clause(&self, node: &Node) -> Vec<Stmt> {
        find_child_by_kind(node, "else_clause")
            .map(|clause| self.lower_field_block(&clause, "body"))
            .unwrap_or_default()
    }

    fn lower_for(&self, node: &Node) -> Stmt {
        let kind = StmtKind::For {
            target: self.field_text(node, "left"),
            iter: self.field_text(node, "right"),
            is_async: starts_with_async(node),
            body: self.lower_field_block(node, "body"),
            orelse: self.lower_else_clause(node),
        };
        self.stmt(node, kind)
    }

    fn lower_while(&self, node: &Node) -> Stmt {
        let kind = StmtKind::While {
            test: self.field_text(node, "condition"),
            body: self.lower_field_block(node, "body"),
            orelse: self.lower_else_clause(node),
        };
        self.stmt(node, kind)
    }

    fn lower_try(&self, node: &Node) -> Stmt {
        // `except*` makes the whole block a distinct statement kind with no node
        if find_child_by_kind(node, "except_group_clause").is_some() {
            return self.stmt(node, StmtKind::Other("try_star_statement".to_string()));
        }

        let mut handlers = Vec::new();
        let mut orelse = Vec::new();
        let mut finalbody = Vec::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "except_clause" => handlers.push(self.lower_handler(&child)),
                "else_clause" => orelse = self.lower_field_block(&child, "body"),
                "finally_clause" => finalbody = self.lower_field_block(&child, "body"),
                _ => {}
            }
        }

        let kind = StmtKind::Try {
            body: self.lower_field_block(node, "body"),
            handlers,
            orelse,
            finalbody,
        };
        self.stmt(node, kind)
    }

    /// `except T as e:` → type text `T`; bare `except:` → no type
    fn lower_handler(&self, node: &Node) -> ExceptHandler {
        let mut cursor = node.walk();
        let type_node = node
            .named_children(&mut cursor)
            .find(|child| !matches!(child.kind(), "block" | "comment"));

        let type_text = type_node.map(|ty| {
            if ty.kind() == "as_pattern" {
                ty.named_child(0)
                    .map(|value| self.text_within(&value, node))
                    .unwrap_or_else(|| self.text_within(&ty, node))
            } else {
                self.text_within(&ty, node)
            }
        });

        let body = find_child_by_kind(node, "block")
            .map(|block| self.lower_block(&block))
            .unwrap_or_default();

        ExceptHandler::new(type_text, body, node_to_span(node))
    }

    fn lower_with(&self, node: &Node) -> Stmt {
        let items = find_child_by_kind(node, "with_clause")
            .map(|clause| {
                let mut cursor = clause.walk();
                let items: Vec<String> = clause
                    .named_children(&mut cursor)
                    .filter(|item| item.kind() == "with_item")
                    .map(|item| self.text_within(&item, node))
                    .collect();
                items
            })
            .unwrap_or_default();

        let kind = StmtKind::With {
            items,
            is_async: starts_with_async(node),
            body: self.lower_field_block(node, "body"),
        };
        self.stmt(node, kind)
    }

    // ========================================
    // Simple statements
    // ========================================

    /// Classify an `expression_statement` the way Python's AST would
    fn expression_statement_kind(&self, node: &Node) -> StmtKind {
        let children = named_statements(node);
        // `a, b` and `f(),` are tuple expression statements
        let mut cursor = node.walk();
        let has_comma = node
            .children(&mut cursor)
            .any(|child| !child.is_named() && child.kind() == ",");
        let [expr] = children.as_slice() else {
            return StmtKind::Expr(ExprKind::Other);
        };
        if has_comma {
            return StmtKind::Expr(ExprKind::Other);
        }

        match unparenthesize(*expr).kind() {
            "assignment" if expr.child_by_field_name("type").is_some() => {
                StmtKind::Other("annotated_assignment".to_string())
            }
            "assignment" => StmtKind::Assign,
            "augmented_assignment" => StmtKind::Other("augmented_assignment".to_string()),
            "call" => StmtKind::Expr(ExprKind::Call),
            "list_comprehension" => StmtKind::Expr(ExprKind::ListComp),
            _ => StmtKind::Expr(ExprKind::Other),
        }
    }
}

/// `((f()))` → `f()`; parentheses are not part of Python's AST
fn unparenthesize<'t>(mut expr: Node<'t>) -> Node<'t> {
    while expr.kind() == "parenthesized_expression" {
        let mut cursor = expr.walk();
        let inner = expr
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        match inner {
            Some(inner) => expr = inner,
            None => break,
        }
    }
    expr
}
