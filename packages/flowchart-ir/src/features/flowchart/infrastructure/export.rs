//! Flowchart export
//!
//! Textual serializations of a finished flowchart: a JSON document for
//! web renderers and Graphviz DOT for layout tools.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::Direction;
use crate::features::flowchart::domain::{BranchLabel, Flowchart, NodeId, NodeShape, NodeType};
use crate::shared::models::{Result, Span};

/// JSON document layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowchartDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub label: String,
    pub details: String,
    pub node_type: NodeType,
    pub layer: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<BranchLabel>,
}

impl From<&Flowchart> for FlowchartDocument {
    fn from(chart: &Flowchart) -> Self {
        let nodes = chart
            .nodes()
            .map(|(id, node)| NodeRecord {
                id,
                label: node.label.clone(),
                details: node.details.clone(),
                node_type: node.node_type,
                layer: node.layer,
                span: node.span,
            })
            .collect();
        let edges = chart
            .edges()
            .map(|edge| EdgeRecord {
                source: edge.source,
                target: edge.target,
                label: edge.label,
            })
            .collect();
        Self { nodes, edges }
    }
}

/// Serialize a flowchart as a JSON document
pub fn to_json(chart: &Flowchart, pretty: bool) -> Result<String> {
    let document = FlowchartDocument::from(chart);
    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Serialize a flowchart as Graphviz DOT text
pub fn to_dot(chart: &Flowchart, direction: Direction) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_dot(&mut out, chart, direction);
    out
}

fn write_dot(out: &mut String, chart: &Flowchart, direction: Direction) -> std::fmt::Result {
    writeln!(out, "digraph flowchart {{")?;
    writeln!(out, "    rankdir={};", direction.rankdir())?;
    writeln!(out, "    node [style=filled];")?;

    for (id, node) in chart.nodes() {
        write!(
            out,
            "    n{} [label=\"{}\", shape={}, class=\"{}\"",
            id,
            escape_dot(&node.label),
            dot_shape(node.node_type.shape()),
            node.node_type
        )?;
        if !node.details.is_empty() {
            write!(out, ", tooltip=\"{}\"", escape_dot(&node.details))?;
        }
        writeln!(out, "];")?;
    }

    for edge in chart.edges() {
        match edge.label {
            Some(label) => writeln!(out, "    n{} -> n{} [label=\"{}\"];", edge.source, edge.target, label)?,
            None => writeln!(out, "    n{} -> n{};", edge.source, edge.target)?,
        }
    }

    writeln!(out, "}}")
}

fn dot_shape(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Square => "box",
        NodeShape::Hexagon => "hexagon",
        NodeShape::Diamond => "diamond",
        NodeShape::Circle => "ellipse",
        NodeShape::Octagon => "octagon",
        NodeShape::Star => "star",
    }
}

/// Escape a string for a double-quoted DOT attribute
fn escape_dot(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}
