//! Configuration I/O (YAML loading)
//!
//! Schema v1. Every setting is optional in the file; missing ones keep their
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::flowchart_config::{FlowchartConfig, LayerStrategy, OutputConfig};

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_strategy: Option<LayerStrategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_async: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_syntax_errors: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

impl ConfigFileV1 {
    /// Check the schema version
    pub fn validate(&self) -> ConfigResult<()> {
        match self.version {
            None => Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => Err(ConfigError::UnsupportedVersion {
                found: v,
                supported: SUPPORTED_VERSIONS.to_vec(),
            }),
            Some(_) => Ok(()),
        }
    }

    fn apply(self, mut config: FlowchartConfig) -> FlowchartConfig {
        if let Some(strategy) = self.layer_strategy {
            config.layer_strategy = strategy;
        }
        if let Some(include) = self.include_async {
            config.include_async = include;
        }
        if let Some(allow) = self.allow_syntax_errors {
            config.allow_syntax_errors = allow;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config
    }
}

impl From<&FlowchartConfig> for ConfigFileV1 {
    fn from(config: &FlowchartConfig) -> Self {
        Self {
            version: Some(1),
            layer_strategy: Some(config.layer_strategy),
            include_async: Some(config.include_async),
            allow_syntax_errors: Some(config.allow_syntax_errors),
            output: Some(config.output),
        }
    }
}

impl FlowchartConfig {
    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(yaml)?;
        file.validate()?;
        Ok(file.apply(FlowchartConfig::default()))
    }

    /// Export as YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(&ConfigFileV1::from(self))?)
    }
}
