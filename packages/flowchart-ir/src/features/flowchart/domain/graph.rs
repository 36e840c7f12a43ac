//! Flowchart graph domain model
//!
//! The finished, read-only graph handed to renderers and exporters.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::shared::models::Span;

/// Node identifier: creation index, starting at 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<NodeIndex> for NodeId {
    fn from(idx: NodeIndex) -> Self {
        NodeId(idx.index())
    }
}

impl From<NodeId> for NodeIndex {
    fn from(id: NodeId) -> Self {
        NodeIndex::new(id.0)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Construct category of a node; drives shape and color in renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Function,
    Class,
    Conditional,
    Loop,
    Assignment,
    FunctionCall,
    Return,
    ListComp,
    TryExcept,
    With,
}

impl NodeType {
    pub const ALL: [NodeType; 10] = [
        NodeType::Function,
        NodeType::Class,
        NodeType::Conditional,
        NodeType::Loop,
        NodeType::Assignment,
        NodeType::FunctionCall,
        NodeType::Return,
        NodeType::ListComp,
        NodeType::TryExcept,
        NodeType::With,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Function => "function",
            NodeType::Class => "class",
            NodeType::Conditional => "conditional",
            NodeType::Loop => "loop",
            NodeType::Assignment => "assignment",
            NodeType::FunctionCall => "function_call",
            NodeType::Return => "return",
            NodeType::ListComp => "list_comp",
            NodeType::TryExcept => "try_except",
            NodeType::With => "with",
        }
    }

    /// Marker shape of the flowchart legend
    pub fn shape(&self) -> NodeShape {
        match self {
            NodeType::Function => NodeShape::Square,
            NodeType::Class => NodeShape::Hexagon,
            NodeType::Conditional => NodeShape::Diamond,
            NodeType::Loop => NodeShape::Circle,
            NodeType::TryExcept => NodeShape::Octagon,
            NodeType::With => NodeShape::Star,
            NodeType::Assignment
            | NodeType::FunctionCall
            | NodeType::Return
            | NodeType::ListComp => NodeShape::Circle,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderer-neutral marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    Square,
    Hexagon,
    Diamond,
    Circle,
    Octagon,
    Star,
}

/// Label of a conditional branch edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchLabel {
    True,
    False,
}

impl BranchLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchLabel::True => "True",
            BranchLabel::False => "False",
        }
    }
}

impl std::fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graph node: one recognized construct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Short caption, e.g. `Function: foo`
    pub label: String,
    /// Source text for hover/inspection; empty for synthesized nodes
    pub details: String,
    pub node_type: NodeType,
    /// Rendering depth hint
    pub layer: u32,
    /// Source location; `None` for synthesized nodes such as `Else`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Graph edge: parent construct → nested construct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<BranchLabel>,
}

/// Borrowed view of one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdgeRef {
    pub source: NodeId,
    pub target: NodeId,
    pub label: Option<BranchLabel>,
}

/// Decorated flowchart graph produced by one conversion
#[derive(Debug, Clone, Default)]
pub struct Flowchart {
    graph: DiGraph<FlowNode, FlowEdge>,
}

impl Flowchart {
    pub(crate) fn from_graph(graph: DiGraph<FlowNode, FlowEdge>) -> Self {
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node(&self, id: NodeId) -> Option<&FlowNode> {
        self.graph.node_weight(id.into())
    }

    /// Nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &FlowNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (NodeId::from(idx), &self.graph[idx]))
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = FlowEdgeRef> + '_ {
        self.graph.edge_references().map(|edge| FlowEdgeRef {
            source: edge.source().into(),
            target: edge.target().into(),
            label: edge.weight().label,
        })
    }

    /// The edge from `source` to `target`, if any
    pub fn edge(&self, source: NodeId, target: NodeId) -> Option<&FlowEdge> {
        self.graph
            .find_edge(source.into(), target.into())
            .and_then(|e| self.graph.edge_weight(e))
    }

    /// Direct children in creation order
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<NodeId> = self
            .graph
            .neighbors_directed(id.into(), Direction::Outgoing)
            .map(NodeId::from)
            .collect();
        children.sort();
        children
    }

    /// Structural parent; every node has at most one
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.graph
            .neighbors_directed(id.into(), Direction::Incoming)
            .next()
            .map(NodeId::from)
    }

    /// Nodes without a parent (top-level constructs), in creation order
    pub fn roots(&self) -> Vec<NodeId> {
        self.nodes()
            .map(|(id, _)| id)
            .filter(|id| self.parent(*id).is_none())
            .collect()
    }

    /// Ids of all nodes with the given label, in creation order
    pub fn find_by_label(&self, label: &str) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, node)| node.label == label)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn count_type(&self, node_type: NodeType) -> usize {
        self.nodes()
            .filter(|(_, node)| node.node_type == node_type)
            .count()
    }

    /// Underlying petgraph graph, for layout engines
    pub fn graph(&self) -> &DiGraph<FlowNode, FlowEdge> {
        &self.graph
    }

    pub fn into_graph(self) -> DiGraph<FlowNode, FlowEdge> {
        self.graph
    }
}
