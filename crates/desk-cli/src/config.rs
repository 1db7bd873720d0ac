//! CLI configuration loading

use desk_common::{DeskError, DeskResult, EngineConfig};
use desk_classify::ClassifierKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_max_concurrent() -> u32 {
    5
}

/// TOML configuration file consumed by the `opendesk` binary.
///
/// Every field has a default, so a missing file means default behavior.
#[derive(Debug, Deserialize)]
pub struct CliConfig {
    /// Engine configuration (weights, escalation policy, capacity override)
    #[serde(default)]
    pub engine: EngineConfig,
    /// Classifier variant used for tickets missing skills or priority
    #[serde(default)]
    pub classifier: ClassifierKind,
    /// Capacity for agent records that do not state their own
    #[serde(default = "default_max_concurrent")]
    pub default_max_concurrent: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            classifier: ClassifierKind::default(),
            default_max_concurrent: default_max_concurrent(),
        }
    }
}

impl CliConfig {
    /// Load from a TOML file, validating before any assignment work begins
    pub fn load(path: &Path) -> DeskResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| DeskError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all nested configuration
    pub fn validate(&self) -> DeskResult<()> {
        self.engine.validate()?;
        if self.default_max_concurrent == 0 {
            return Err(DeskError::InvalidConfig(
                "default_max_concurrent must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_max_concurrent, 5);
        assert_eq!(config.classifier, ClassifierKind::Keyword);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_weights_rejected() {
        let config: CliConfig = toml::from_str(
            r#"
            [engine.weights]
            skill_match = 0.9
            experience = 0.9
            workload = 0.1
            priority_capability = 0.1
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_classifier_selection() {
        let config: CliConfig = toml::from_str(r#"classifier = "similarity""#).unwrap();
        assert_eq!(config.classifier, ClassifierKind::Similarity);
    }
}
