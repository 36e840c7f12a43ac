//! Edge case tests - statement forms that are easy to get wrong

#[path = "../common/mod.rs"]
mod common;
use common::*;

use flowchart_ir::config::FlowchartConfig;
use flowchart_ir::{BranchLabel, NodeId, NodeType};
use pretty_assertions::assert_eq;

fn details(chart: &flowchart_ir::Flowchart, id: usize) -> String {
    chart.node(NodeId(id)).unwrap().details.clone()
}

// ═══════════════════════════════════════════════════════════════════════════
// Conditionals
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_elif_chain_nests_under_else() {
    let chart = convert("if a:\n    x = 1\nelif b:\n    x = 2\nelse:\n    x = 3\n");

    assert_eq!(
        labels(&chart),
        vec!["If", "Assignment", "Else", "If", "Assignment", "Else", "Assignment"]
    );
    assert_edge(&chart, 0, 1, Some(BranchLabel::True));
    assert_edge(&chart, 0, 2, Some(BranchLabel::False));
    assert_edge(&chart, 2, 3, None);
    assert_edge(&chart, 3, 4, Some(BranchLabel::True));
    assert_edge(&chart, 3, 5, Some(BranchLabel::False));
    assert_edge(&chart, 5, 6, None);
    assert_eq!(details(&chart, 3), "b");
}

#[test]
fn edge_if_without_else() {
    let chart = convert("if ready:\n    go()\n");

    assert_eq!(labels(&chart), vec!["If", "Function call"]);
    assert_edge(&chart, 0, 1, Some(BranchLabel::True));
}

#[test]
fn edge_else_with_only_skipped_statements() {
    let chart = convert("if a:\n    x = 1\nelse:\n    pass\n");

    assert_eq!(labels(&chart), vec!["If", "Assignment", "Else"]);
    assert!(chart.children(NodeId(2)).is_empty());
}

#[test]
fn edge_if_with_only_skipped_body() {
    let chart = convert("if a:\n    pass\n");
    assert_node_count(&chart, 1);
}

#[test]
fn edge_nested_ifs_all_true_edges() {
    let chart = convert(&fixture_nested_ifs(5));

    assert_node_count(&chart, 6);
    for parent in 0..5 {
        assert_edge(&chart, parent, parent + 1, Some(BranchLabel::True));
    }
    assert_node(&chart, 5, "Function call", NodeType::FunctionCall);
}

// ═══════════════════════════════════════════════════════════════════════════
// Loops and blocks
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_loop_else_clauses_not_visited() {
    let chart = convert("for i in x:\n    a = 1\nelse:\n    b = 2\nwhile c:\n    d = 3\nelse:\n    e = 4\n");

    assert_eq!(labels(&chart), vec!["For loop", "Assignment", "While loop", "Assignment"]);
}

#[test]
fn edge_try_else_and_finally_not_visited() {
    let chart = convert("try:\n    a()\nexcept E:\n    b()\nelse:\n    c()\nfinally:\n    d()\n");

    assert_eq!(labels(&chart), vec!["Try", "Function call", "Except: E", "Function call"]);
    assert_eq!(details(&chart, 1), "a()");
    assert_eq!(details(&chart, 3), "b()");
}

#[test]
fn edge_exception_group_try_skipped() {
    assert_node_count(&convert("try:\n    a()\nexcept* ValueError:\n    b()\n"), 0);

    let chart = convert("x = 1\ntry:\n    a()\nexcept* (KeyError, OSError) as eg:\n    b()\ny = 2\n");
    assert_eq!(labels(&chart), vec!["Assignment", "Assignment"]);
}

#[test]
fn edge_except_tuple_type() {
    let chart = convert("try:\n    a()\nexcept (KeyError, IndexError) as err:\n    b(err)\n");
    assert_eq!(chart.node(NodeId(2)).unwrap().label, "Except: (KeyError, IndexError)");
}

#[test]
fn edge_with_multiple_items_shows_first() {
    let chart = convert("with open(a) as f, open(b) as g:\n    g.write(f.read())\n");

    assert_eq!(labels(&chart), vec!["With", "Function call"]);
    assert_eq!(details(&chart, 0), "open(a) as f");
}

// ═══════════════════════════════════════════════════════════════════════════
// Async
// ═══════════════════════════════════════════════════════════════════════════

const ASYNC_SOURCE: &str = "async def fetch(urls):\n    async with session() as s:\n        async for u in urls:\n            await s.get(u)\n    return s\n";

#[test]
fn edge_async_skipped_by_default() {
    let chart = convert(ASYNC_SOURCE);
    assert!(chart.is_empty());
}

#[test]
fn edge_async_skip_drops_nested_statements() {
    let chart = convert("x = 1\nasync def f():\n    y = 2\nz = 3\n");
    assert_eq!(labels(&chart), vec!["Assignment", "Assignment"]);
    assert_eq!(details(&chart, 1), "z = 3");
}

#[test]
fn edge_async_included_when_configured() {
    let chart = convert_with(ASYNC_SOURCE, FlowchartConfig::default().include_async(true));

    // `await s.get(u)` is an await expression, not a call
    assert_eq!(labels(&chart), vec!["Function: fetch", "With", "For loop", "Return"]);
    assert_eq!(details(&chart, 1), "session() as s");
    assert_eq!(details(&chart, 2), "u in urls");
}

// ═══════════════════════════════════════════════════════════════════════════
// Simple statements
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_assignment_forms() {
    let chart = convert("a = b = 1\nx, y = pair\nc: int = 2\nd += 3\nf = lambda v: v\n");

    assert_eq!(labels(&chart), vec!["Assignment", "Assignment", "Assignment"]);
    assert_eq!(details(&chart, 0), "a = b = 1");
    assert_eq!(details(&chart, 1), "x, y = pair");
    assert_eq!(details(&chart, 2), "f = lambda v: v");
}

#[test]
fn edge_expression_statements() {
    let chart = convert("\"\"\"docstring\"\"\"\nobj.method(1)\nawait_later\n[i for i in range(3)]\nprint([i for i in range(3)])\nx + 1\n");

    assert_eq!(labels(&chart), vec!["Function call", "List Comprehension", "Function call"]);
    assert_eq!(chart.count_type(NodeType::ListComp), 1);
}

#[test]
fn edge_parenthesized_expression_statements() {
    let chart = convert("(f())\n(([i for i in xs]))\n");

    assert_eq!(labels(&chart), vec!["Function call", "List Comprehension"]);
    assert_eq!(details(&chart, 0), "(f())");
}

#[test]
fn edge_trailing_comma_tuple_skipped() {
    assert_node_count(&convert("f(),\n"), 0);
    assert_node_count(&convert("(f(),)\n[i for i in xs],\n"), 0);
}

#[test]
fn edge_skipped_statements() {
    let chart = convert("import os\nfrom a import b\npass\nglobal g\ndel x\nassert y\nraise ValueError()\n");
    assert!(chart.is_empty());
}

#[test]
fn edge_comments_ignored() {
    let chart = convert("# leading\ndef f():\n    # inside\n    return 1  # trailing\n");
    assert_eq!(labels(&chart), vec!["Function: f", "Return"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Details text
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_multiple_decorators() {
    let chart = convert("@staticmethod\n@cache(maxsize=2)\ndef f():\n    pass\n");

    assert_eq!(details(&chart, 0), "@staticmethod, @cache(maxsize=2)\ndef f():\n    pass");
}

#[test]
fn edge_nested_method_source_dedented() {
    let chart = convert("class A:\n    class B:\n        def m(self):\n            return 1\n");

    assert_eq!(labels(&chart), vec!["Class: A", "Class: B", "Function: m", "Return"]);
    assert_eq!(details(&chart, 1), "class B:\n    def m(self):\n        return 1");
    assert_eq!(details(&chart, 2), "def m(self):\n    return 1");
}

#[test]
fn edge_multiline_call_dedented() {
    let chart = convert("def f():\n    foo(\n        1,\n    )\n");
    assert_eq!(details(&chart, 1), "foo(\n    1,\n)");
}

#[test]
fn edge_multiline_condition_dedented_by_statement() {
    let chart = convert("def f():\n    if (a and\n            b):\n        x = 1\n");

    assert_eq!(labels(&chart), vec!["Function: f", "If", "Assignment"]);
    assert_eq!(details(&chart, 1), "(a and\n        b)");
}

#[test]
fn edge_spans_recorded() {
    let chart = convert("x = 1\nif a:\n    y = 2\nelse:\n    z = 3\n");

    let assign = chart.node(NodeId(0)).unwrap().span.unwrap();
    assert_eq!(assign.start_line, 1);
    let if_span = chart.node(NodeId(1)).unwrap().span.unwrap();
    assert_eq!(if_span.start_line, 2);
    // Synthesized Else has no source location
    assert!(chart.node(NodeId(3)).unwrap().span.is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// Syntax errors
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_syntax_errors_allowed() {
    let config = FlowchartConfig::default().allow_syntax_errors(true);
    let result = flowchart_ir::ConvertSourceUseCase::new(flowchart_ir::TreeSitterParser::python(), config)
        .execute("print(1)\ndef broken(:\n", "broken.py");

    assert!(result.is_ok());
}

#[test]
fn edge_syntax_error_reports_file() {
    let result = flowchart_ir::ConvertSourceUseCase::new(
        flowchart_ir::TreeSitterParser::python(),
        FlowchartConfig::default(),
    )
    .execute("while :\n", "broken.py");

    let err = result.unwrap_err();
    assert_eq!(err.file_path.as_deref(), Some("broken.py"));
    assert!(err.to_string().contains("broken.py"));
}
