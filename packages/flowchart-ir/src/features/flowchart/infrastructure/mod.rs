//! Flowchart infrastructure: graph construction, traversal, export

mod builder;
pub mod export;
mod walker;

pub use builder::GraphBuilder;
pub use export::{to_dot, to_json, FlowchartDocument};
pub use walker::{TreeWalker, WalkOptions};
