//! Feature modules
//!
//! - `parsing/` - source → statement tree
//! - `flowchart/` - statement tree → flowchart graph

pub mod flowchart;
pub mod parsing;
