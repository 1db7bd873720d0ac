//! Agent record

use crate::error::{DeskError, DeskResult};
use crate::value_objects::{Priority, Proficiency, SkillTag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Support agent record.
///
/// `current_workload` is mutated only through the registry's commit
/// operation; everywhere else an `Agent` is a read-only snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent id
    pub id: String,
    /// Display name
    pub name: String,
    /// Skill proficiencies, 1-10 per tag
    pub skills: BTreeMap<SkillTag, Proficiency>,
    /// Seniority on a 1-10 scale
    pub experience_level: u8,
    /// Maximum concurrent tickets this agent may hold
    pub max_concurrent: u32,
    /// Tickets currently held (0 ..= max_concurrent)
    pub current_workload: u32,
    /// Priorities this agent may be escalated to, beyond the implicit
    /// LOW/MEDIUM that every agent handles
    pub handles: BTreeSet<Priority>,
}

impl Agent {
    /// Create an agent with an empty skill set and default capacity
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skills: BTreeMap::new(),
            experience_level: 1,
            max_concurrent: 5,
            current_workload: 0,
            handles: BTreeSet::new(),
        }
    }

    /// Boundary validation, applied before a record enters the registry
    pub fn validate(&self) -> DeskResult<()> {
        if self.id.is_empty() {
            return Err(DeskError::InvalidAgent {
                id: self.id.clone(),
                reason: "empty id".into(),
            });
        }
        if self.experience_level == 0 || self.experience_level > 10 {
            return Err(DeskError::InvalidAgent {
                id: self.id.clone(),
                reason: format!("experience_level {} out of 1-10", self.experience_level),
            });
        }
        if self.max_concurrent == 0 {
            return Err(DeskError::InvalidAgent {
                id: self.id.clone(),
                reason: "max_concurrent must be positive".into(),
            });
        }
        if self.current_workload > self.max_concurrent {
            return Err(DeskError::InvalidAgent {
                id: self.id.clone(),
                reason: format!(
                    "current_workload {} exceeds capacity {}",
                    self.current_workload, self.max_concurrent
                ),
            });
        }
        Ok(())
    }

    /// Whether the agent has spare capacity
    pub fn has_capacity(&self) -> bool {
        self.current_workload < self.max_concurrent
    }

    /// Whether the agent may take a ticket of the given priority
    pub fn handles_priority(&self, priority: Priority) -> bool {
        !priority.requires_escalation() || self.handles.contains(&priority)
    }

    /// Proficiency for a skill, 0 when absent
    pub fn proficiency(&self, tag: &SkillTag) -> u8 {
        self.skills.get(tag).map(|p| p.level()).unwrap_or(0)
    }

    /// Whether the agent holds at least one of the given skills
    pub fn has_any_skill(&self, tags: &BTreeSet<SkillTag>) -> bool {
        tags.iter().any(|t| self.skills.contains_key(t))
    }

    /// Fraction of capacity in use, 0.0 to 1.0
    pub fn utilization(&self) -> f32 {
        self.current_workload as f32 / self.max_concurrent as f32
    }
}
