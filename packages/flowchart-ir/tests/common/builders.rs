//! Statement tree builders
//!
//! Build lowered statement trees directly, without going through the parser.

use flowchart_ir::features::parsing::{ExceptHandler, ExprKind, Module, Stmt, StmtKind};
use flowchart_ir::Span;

pub fn module(body: Vec<Stmt>) -> Module {
    Module::new(body)
}

pub fn assign(text: &str) -> Stmt {
    Stmt::synthetic(StmtKind::Assign, text)
}

pub fn call(text: &str) -> Stmt {
    Stmt::synthetic(StmtKind::Expr(ExprKind::Call), text)
}

pub fn list_comp(text: &str) -> Stmt {
    Stmt::synthetic(StmtKind::Expr(ExprKind::ListComp), text)
}

pub fn literal(text: &str) -> Stmt {
    Stmt::synthetic(StmtKind::Expr(ExprKind::Other), text)
}

pub fn ret(text: &str) -> Stmt {
    Stmt::synthetic(StmtKind::Return, text)
}

pub fn pass() -> Stmt {
    Stmt::synthetic(StmtKind::Other("pass_statement".into()), "pass")
}

pub fn function(name: &str, is_async: bool, body: Vec<Stmt>) -> Stmt {
    Stmt::synthetic(
        StmtKind::FunctionDef {
            name: name.into(),
            decorators: vec![],
            is_async,
            body,
        },
        format!("def {name}(): ..."),
    )
}

pub fn class(name: &str, body: Vec<Stmt>) -> Stmt {
    Stmt::synthetic(
        StmtKind::ClassDef {
            name: name.into(),
            decorators: vec![],
            body,
        },
        format!("class {name}: ..."),
    )
}

pub fn if_else(test: &str, body: Vec<Stmt>, orelse: Vec<Stmt>) -> Stmt {
    Stmt::synthetic(
        StmtKind::If {
            test: test.into(),
            body,
            orelse,
        },
        format!("if {test}: ..."),
    )
}

pub fn for_loop(target: &str, iter: &str, is_async: bool, body: Vec<Stmt>) -> Stmt {
    Stmt::synthetic(
        StmtKind::For {
            target: target.into(),
            iter: iter.into(),
            is_async,
            body,
            orelse: vec![],
        },
        format!("for {target} in {iter}: ..."),
    )
}

pub fn while_loop(test: &str, body: Vec<Stmt>) -> Stmt {
    Stmt::synthetic(
        StmtKind::While {
            test: test.into(),
            body,
            orelse: vec![],
        },
        format!("while {test}: ..."),
    )
}

pub fn with_block(item: &str, is_async: bool, body: Vec<Stmt>) -> Stmt {
    Stmt::synthetic(
        StmtKind::With {
            items: vec![item.into()],
            is_async,
            body,
        },
        format!("with {item}: ..."),
    )
}

pub fn try_block(body: Vec<Stmt>, handlers: Vec<(Option<&str>, Vec<Stmt>)>) -> Stmt {
    let handlers = handlers
        .into_iter()
        .map(|(type_text, body)| ExceptHandler::new(type_text.map(str::to_string), body, Span::zero()))
        .collect();
    Stmt::synthetic(
        StmtKind::Try {
            body,
            handlers,
            orelse: vec![],
            finalbody: vec![],
        },
        "try: ...",
    )
}
