//! Engine configuration
//!
//! Values only; loading them from disk is the CLI's responsibility.

use crate::error::{DeskError, DeskResult};
use crate::value_objects::Priority;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weights combining the four sub-scores into a composite total
///
/// # Invariants
/// - Each weight in [0, 1]
/// - Weights sum to 1.0 (within 1e-3)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Skill match weight
    pub skill_match: f32,
    /// Experience weight
    pub experience: f32,
    /// Workload headroom weight
    pub workload: f32,
    /// Priority capability weight
    pub priority_capability: f32,
}

impl ScoreWeights {
    /// Default weighting: skill fit dominates
    pub const DEFAULT: Self = Self {
        skill_match: 0.40,
        experience: 0.20,
        workload: 0.20,
        priority_capability: 0.20,
    };

    /// Validate the invariants, failing with `InvalidConfig`
    pub fn validate(&self) -> DeskResult<()> {
        let parts = [
            self.skill_match,
            self.experience,
            self.workload,
            self.priority_capability,
        ];
        if parts.iter().any(|w| !(0.0..=1.0).contains(w) || w.is_nan()) {
            return Err(DeskError::InvalidConfig(
                "each scoring weight must be in 0.0-1.0".into(),
            ));
        }
        let sum: f32 = parts.iter().sum();
        if (sum - 1.0).abs() > 1e-3 {
            return Err(DeskError::InvalidConfig(format!(
                "scoring weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration surface consumed by the allocation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scoring weights
    #[serde(default)]
    pub weights: ScoreWeights,
    /// Priorities requiring escalation-capable agents
    #[serde(default = "EngineConfig::default_escalation")]
    pub escalation_priorities: BTreeSet<Priority>,
    /// When set, overrides every agent's `max_concurrent`
    #[serde(default)]
    pub max_concurrent_override: Option<u32>,
}

impl EngineConfig {
    fn default_escalation() -> BTreeSet<Priority> {
        [Priority::High, Priority::Critical].into_iter().collect()
    }

    /// Validate the full configuration
    pub fn validate(&self) -> DeskResult<()> {
        self.weights.validate()?;
        if self.max_concurrent_override == Some(0) {
            return Err(DeskError::InvalidConfig(
                "max_concurrent_override must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Whether a ticket of this priority may only go to flagged agents
    pub fn requires_escalation(&self, priority: Priority) -> bool {
        self.escalation_priorities.contains(&priority)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::DEFAULT,
            escalation_priorities: Self::default_escalation(),
            max_concurrent_override: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!(ScoreWeights::DEFAULT.validate().is_ok());
        let w = ScoreWeights::DEFAULT;
        let sum = w.skill_match + w.experience + w.workload + w.priority_capability;
        assert!((sum - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let w = ScoreWeights {
            skill_match: 0.5,
            experience: 0.5,
            workload: 0.5,
            priority_capability: 0.5,
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = ScoreWeights {
            skill_match: 1.2,
            experience: -0.2,
            workload: 0.0,
            priority_capability: 0.0,
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_default_escalation_policy() {
        let cfg = EngineConfig::default();
        assert!(cfg.requires_escalation(Priority::Critical));
        assert!(cfg.requires_escalation(Priority::High));
        assert!(!cfg.requires_escalation(Priority::Medium));
        assert!(!cfg.requires_escalation(Priority::Low));
    }

    #[test]
    fn test_zero_override_rejected() {
        let cfg = EngineConfig {
            max_concurrent_override: Some(0),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
