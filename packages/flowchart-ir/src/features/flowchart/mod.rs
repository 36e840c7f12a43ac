//! Flowchart Feature
//!
//! Converts the statement tree of a parsed module into a decorated directed
//! graph: one node per recognized construct, edges from each construct to
//! the constructs nested in it, `True`/`False` labels on conditional branches.
//!
//! ## Structure
//! - `domain/` - Flowchart, FlowNode, FlowEdge, NodeType
//! - `infrastructure/` - GraphBuilder, TreeWalker, JSON/DOT export
//! - `application/` - ConvertSourceUseCase (parse → walk)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ConvertSourceUseCase;
pub use domain::{BranchLabel, FlowEdge, FlowEdgeRef, FlowNode, Flowchart, NodeId, NodeShape, NodeType};
pub use infrastructure::{to_dot, to_json, FlowchartDocument, GraphBuilder, TreeWalker, WalkOptions};
