mod graph;

pub use graph::{
    BranchLabel, FlowEdge, FlowEdgeRef, FlowNode, Flowchart, NodeId, NodeShape, NodeType,
};
