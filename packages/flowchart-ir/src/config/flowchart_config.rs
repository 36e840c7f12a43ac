//! Flowchart conversion settings

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// How node layers are assigned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerStrategy {
    /// One more than the highest layer present when the node is created.
    /// Layers grow with creation order across unrelated branches.
    #[default]
    GlobalMax,
    /// One more than the parent's layer; top-level constructs are 0
    NestingDepth,
}

impl FromStr for LayerStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "global_max" => Ok(LayerStrategy::GlobalMax),
            "nesting_depth" => Ok(LayerStrategy::NestingDepth),
            _ => Err(ConfigError::UnknownValue {
                field: "layer strategy",
                value: s.to_string(),
                expected: "global-max, nesting-depth",
            }),
        }
    }
}

/// Layout direction hint written into exports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
}

impl Direction {
    /// Graphviz `rankdir` value
    pub fn rankdir(&self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::LeftToRight => "LR",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "tb" | "top_to_bottom" => Ok(Direction::TopToBottom),
            "lr" | "left_to_right" => Ok(Direction::LeftToRight),
            _ => Err(ConfigError::UnknownValue {
                field: "direction",
                value: s.to_string(),
                expected: "tb, lr",
            }),
        }
    }
}

/// Export format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Dot,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "dot" => Ok(OutputFormat::Dot),
            _ => Err(ConfigError::UnknownValue {
                field: "output format",
                value: s.to_string(),
                expected: "json, dot",
            }),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Indented JSON
    pub pretty: bool,
    pub direction: Direction,
}

/// Conversion settings
///
/// ```rust,ignore
/// let config = FlowchartConfig::default()
///     .layer_strategy(LayerStrategy::NestingDepth)
///     .include_async(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowchartConfig {
    pub layer_strategy: LayerStrategy,
    /// Treat `async def`/`async for`/`async with` like their sync forms
    pub include_async: bool,
    /// Convert the recoverable part of sources with syntax errors instead of failing
    pub allow_syntax_errors: bool,
    pub output: OutputConfig,
}

impl FlowchartConfig {
    pub fn layer_strategy(mut self, strategy: LayerStrategy) -> Self {
        self.layer_strategy = strategy;
        self
    }

    pub fn include_async(mut self, include: bool) -> Self {
        self.include_async = include;
        self
    }

    pub fn allow_syntax_errors(mut self, allow: bool) -> Self {
        self.allow_syntax_errors = allow;
        self
    }

    pub fn output(mut self, f: impl FnOnce(OutputConfig) -> OutputConfig) -> Self {
        self.output = f(self.output);
        self
    }
}
