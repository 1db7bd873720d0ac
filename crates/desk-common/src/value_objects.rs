//! Value objects - immutable, validated domain primitives

use crate::error::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized skill identifier (Value Object)
///
/// # Invariants
/// - Non-empty, max 64 characters
/// - Alphanumeric plus `_` and `-`
///
/// Skill keys are validated rather than free-form so a typo in an input
/// file fails loudly instead of silently creating a false skill gap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillTag(String);

impl SkillTag {
    /// Create a new skill tag with validation
    pub fn new(tag: impl Into<String>) -> DeskResult<Self> {
        let tag = tag.into();

        if tag.is_empty() {
            return Err(DeskError::InvalidTag("cannot be empty".into()));
        }
        if tag.len() > 64 {
            return Err(DeskError::InvalidTag(format!("{tag}: max 64 characters")));
        }
        if !tag.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return Err(DeskError::InvalidTag(format!(
                "{tag}: alphanumeric, '_' and '-' only"
            )));
        }

        Ok(Self(tag))
    }

    /// Get inner value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SkillTag {
    type Error = DeskError;

    fn try_from(value: String) -> DeskResult<Self> {
        Self::new(value)
    }
}

impl From<SkillTag> for String {
    fn from(tag: SkillTag) -> Self {
        tag.0
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skill proficiency level (Value Object)
///
/// # Invariants
/// - Range: 1 to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    /// Maximum proficiency level, used to normalize skill scores
    pub const MAX: u8 = 10;

    /// Create proficiency with validation
    pub fn new(level: u8) -> DeskResult<Self> {
        if level == 0 || level > Self::MAX {
            return Err(DeskError::InvalidProficiency(level));
        }
        Ok(Self(level))
    }

    /// Get level value
    pub const fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = DeskError;

    fn try_from(value: u8) -> DeskResult<Self> {
        Self::new(value)
    }
}

impl From<Proficiency> for u8 {
    fn from(p: Proficiency) -> Self {
        p.0
    }
}

/// Ticket priority level, ordered LOW < MEDIUM < HIGH < CRITICAL
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Routine request
    Low,
    /// Standard issue
    #[default]
    Medium,
    /// Degraded service, blocked users
    High,
    /// Outage or security incident
    Critical,
}

impl Priority {
    /// All priority levels, highest first
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Whether tickets of this priority require escalation-capable agents.
    ///
    /// Policy: CRITICAL and HIGH require the capability flag; MEDIUM and
    /// LOW are implicitly handled by every agent.
    pub const fn requires_escalation(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        };
        write!(f, "{s}")
    }
}

/// Normalized score (Value Object)
///
/// # Invariants
/// - Range: 0.0 to 1.0
/// - Higher is better
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f32);

impl Score {
    /// Create score with validation
    pub fn new(value: f32) -> DeskResult<Self> {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            return Err(DeskError::InvalidScore(value));
        }
        Ok(Self(value))
    }

    /// Create score clamping to valid range
    pub fn clamped(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get value
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Perfect score
    pub const fn perfect() -> Self {
        Self(1.0)
    }

    /// Zero score
    pub const fn zero() -> Self {
        Self(0.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(0.5)
    }
}
