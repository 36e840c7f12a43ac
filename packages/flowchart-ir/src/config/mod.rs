//! Configuration
//!
//! Programmatic builder for library use, versioned YAML for files.
//!
//! ```rust,ignore
//! use flowchart_ir::config::{FlowchartConfig, LayerStrategy};
//!
//! let config = FlowchartConfig::default().layer_strategy(LayerStrategy::NestingDepth);
//! let config = FlowchartConfig::from_yaml("flowchart.yaml")?;
//! ```

pub mod error;
pub mod flowchart_config;
pub mod io;

pub use error::{ConfigError, ConfigResult};
pub use flowchart_config::{Direction, FlowchartConfig, LayerStrategy, OutputConfig, OutputFormat};
pub use io::{ConfigFileV1, SUPPORTED_VERSIONS};
