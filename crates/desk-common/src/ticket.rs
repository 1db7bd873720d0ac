//! Ticket record

use crate::error::{DeskError, DeskResult};
use crate::value_objects::{Priority, Score, SkillTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Support ticket, already normalized: skills extracted and priority
/// assigned by a classifier. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket id
    pub id: String,
    /// One-line subject
    pub subject: String,
    /// Free-text description (kept for reporting; the engine never parses it)
    pub description: String,
    /// Skills required to resolve the ticket
    pub required_skills: BTreeSet<SkillTag>,
    /// Priority level
    pub priority: Priority,
    /// Business impact, 0.0 to 1.0
    pub business_impact: Score,
}

impl Ticket {
    /// Create a ticket with no required skills and default priority
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            description: String::new(),
            required_skills: BTreeSet::new(),
            priority: Priority::default(),
            business_impact: Score::default(),
        }
    }

    /// Boundary validation, applied before a batch enters the engine
    pub fn validate(&self) -> DeskResult<()> {
        if self.id.is_empty() {
            return Err(DeskError::InvalidTicket {
                id: self.id.clone(),
                reason: "empty id".into(),
            });
        }
        Ok(())
    }
}
