/*
 * Flowchart IR - Python source to flowchart graph
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, FlowchartError) and tree-sitter helpers
 * - features/    : Vertical slices (parsing → flowchart)
 * - config/      : Conversion settings (builder + versioned YAML)
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (vertical slices)
pub mod features;

/// Conversion settings
pub mod config;

pub use config::{FlowchartConfig, LayerStrategy};
pub use features::flowchart::{
    to_dot, to_json, BranchLabel, ConvertSourceUseCase, FlowEdge, FlowNode, Flowchart, NodeId,
    NodeType,
};
pub use features::parsing::{Parser, TreeSitterParser};
pub use shared::models::{ErrorKind, FlowchartError, Result, Span};

/// Convert Python source text into a flowchart with default settings.
///
/// Sources with syntax errors are rejected with an [`ErrorKind::Parse`] error.
///
/// ```rust,ignore
/// let chart = flowchart_ir::python_to_flowchart("def f(x):\n    return x\n")?;
/// assert_eq!(chart.node_count(), 2);
/// ```
pub fn python_to_flowchart(source: &str) -> Result<Flowchart> {
    ConvertSourceUseCase::new(TreeSitterParser::python(), FlowchartConfig::default())
        .execute(source, "<string>")
}
