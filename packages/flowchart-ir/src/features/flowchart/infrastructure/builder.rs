//! Graph builder
//!
//! Owns the graph for the duration of one conversion: allocates node ids,
//! assigns layers, and connects children to their structural parents.

use petgraph::graph::DiGraph;

use crate::config::LayerStrategy;
use crate::features::flowchart::domain::{BranchLabel, FlowEdge, FlowNode, Flowchart, NodeId, NodeType};
use crate::shared::models::Span;

/// Builds one flowchart; create a fresh builder per conversion
#[derive(Debug)]
pub struct GraphBuilder {
    graph: DiGraph<FlowNode, FlowEdge>,
    strategy: LayerStrategy,
    /// Highest layer assigned so far
    max_layer: Option<u32>,
}

impl GraphBuilder {
    pub fn new(strategy: LayerStrategy) -> Self {
        Self {
            graph: DiGraph::new(),
            strategy,
            max_layer: None,
        }
    }

    pub fn strategy(&self) -> LayerStrategy {
        self.strategy
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Add a node without a parent
    ///
    /// Ids are handed out from 0 in creation order. The layer is one more than
    /// the highest layer present (global max), or 0 under nesting depth.
    pub fn new_node(
        &mut self,
        label: impl Into<String>,
        details: impl Into<String>,
        node_type: NodeType,
    ) -> NodeId {
        self.push_node(label.into(), details.into(), node_type, None, None)
    }

    /// Add a node nested under `parent` and connect it with an edge
    pub fn new_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        details: impl Into<String>,
        node_type: NodeType,
        edge_label: Option<BranchLabel>,
    ) -> NodeId {
        let child = self.push_node(label.into(), details.into(), node_type, Some(parent), None);
        self.add_edge(parent, child, edge_label);
        child
    }

    /// Add a node with an optional parent and source span
    pub fn add_construct(
        &mut self,
        parent: Option<NodeId>,
        label: impl Into<String>,
        details: impl Into<String>,
        node_type: NodeType,
        edge_label: Option<BranchLabel>,
        span: Option<Span>,
    ) -> NodeId {
        let id = self.push_node(label.into(), details.into(), node_type, parent, span);
        if let Some(parent) = parent {
            self.add_edge(parent, id, edge_label);
        }
        id
    }

    /// Connect `parent` to `child`
    ///
    /// The parent must have been created before the child.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId, label: Option<BranchLabel>) {
        debug_assert!(
            parent < child,
            "edge {} -> {} does not point to a later node",
            parent,
            child
        );
        debug_assert!(
            child.index() < self.graph.node_count(),
            "edge to unknown node {}",
            child
        );
        self.graph.add_edge(parent.into(), child.into(), FlowEdge { label });
    }

    /// Hand over the finished graph
    pub fn finish(self) -> Flowchart {
        Flowchart::from_graph(self.graph)
    }

    fn push_node(
        &mut self,
        label: String,
        details: String,
        node_type: NodeType,
        parent: Option<NodeId>,
        span: Option<Span>,
    ) -> NodeId {
        let layer = self.next_layer(parent);
        self.max_layer = Some(self.max_layer.map_or(layer, |max| max.max(layer)));

        let idx = self.graph.add_node(FlowNode {
            label,
            details,
            node_type,
            layer,
            span,
        });
        NodeId::from(idx)
    }

    fn next_layer(&self, parent: Option<NodeId>) -> u32 {
        match self.strategy {
            LayerStrategy::GlobalMax => self.max_layer.map_or(0, |max| max + 1),
            LayerStrategy::NestingDepth => parent
                .and_then(|p| self.graph.node_weight(p.into()))
                .map_or(0, |p| p.layer + 1),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(LayerStrategy::default())
    }
}
