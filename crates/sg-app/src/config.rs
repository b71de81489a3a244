//! Application configuration (YAML).

use std::path::Path;

use serde::{Deserialize, Serialize};
use sg_graph::SynthConfig;

use crate::error::{AppError, AppResult};

/// Top-level configuration file.
///
/// ```yaml
/// synth:
///   stops:
///     min_span: 1.0
///     tolerance: 0.01
///     max_intervals: 100000
///   edges:
///     link_radius: 1.1
///     restricted_offset: 1.0
///     parallel_min_nodes: 512
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub synth: SynthConfig,
}

impl AppConfig {
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.synth
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    AppConfig::from_yaml_str(&text)
}

/// Load `path` when given, otherwise use the defaults.
pub fn load_config_or_default(path: Option<&Path>) -> AppResult<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml_str("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::from_yaml_str("synth:\n  edges:\n    link_radius: 2.0\n").unwrap();
        assert_eq!(config.synth.edges.link_radius, 2.0);
        assert_eq!(config.synth.edges.restricted_offset, 1.0);
        assert_eq!(config.synth.stops.tolerance, 0.01);
    }

    #[test]
    fn invalid_threshold_is_config_error() {
        let err = AppConfig::from_yaml_str("synth:\n  stops:\n    min_span: -2\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = AppConfig::default();
        config.synth.stops.tolerance = 0.05;
        let text = config.to_yaml_string().unwrap();
        assert_eq!(AppConfig::from_yaml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/no/such/stopgraph.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigFileRead { .. }));
        assert!(load_config_or_default(None).is_ok());
    }
}
